//! Fuzz target for SGR mouse sequence parsing.
//!
//! Generates structured `ESC [ < Cb ; Cx ; Cy (M|m)` sequences plus raw
//! garbage to stress the mouse path of the input parser.

#![no_main]

use arbitrary::Arbitrary;
use chadcn_tui::input::InputParser;
use libfuzzer_sys::fuzz_target;

/// Structured input for mouse sequence fuzzing.
#[derive(Arbitrary, Debug)]
struct MouseInput {
    /// The sequence to generate.
    seq: SequenceKind,
    /// Raw bytes to append (for edge cases).
    suffix: Vec<u8>,
}

#[derive(Arbitrary, Debug)]
enum SequenceKind {
    /// Well-formed SGR mouse report with arbitrary fields.
    Sgr { cb: u16, cx: u32, cy: u32, release: bool },
    /// SGR prefix followed by arbitrary parameter bytes.
    Mangled { params: Vec<u8>, final_byte: u8 },
    /// Just raw bytes.
    Raw { bytes: Vec<u8> },
}

impl MouseInput {
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = match &self.seq {
            SequenceKind::Sgr { cb, cx, cy, release } => {
                let final_byte = if *release { 'm' } else { 'M' };
                format!("\x1b[<{cb};{cx};{cy}{final_byte}").into_bytes()
            }
            SequenceKind::Mangled { params, final_byte } => {
                let mut v = b"\x1b[<".to_vec();
                v.extend(params.iter().take(64));
                v.push(*final_byte);
                v
            }
            SequenceKind::Raw { bytes } => bytes.iter().take(128).copied().collect(),
        };
        bytes.extend(self.suffix.iter().take(32));
        bytes
    }
}

fuzz_target!(|input: MouseInput| {
    let bytes = input.to_bytes();
    let mut parser = InputParser::new();

    let mut remaining = bytes.as_slice();
    let mut iterations = 0;
    while !remaining.is_empty() && iterations < 1000 {
        iterations += 1;
        match parser.parse(remaining) {
            Ok((_event, consumed)) => {
                remaining = &remaining[consumed.max(1).min(remaining.len())..];
            }
            Err(_) => {
                remaining = &remaining[1..];
            }
        }
    }
});
