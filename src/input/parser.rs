//! ANSI sequence parser for terminal input.
//!
//! Parses raw bytes from the terminal into input events:
//! - plain and UTF-8 character keys, Ctrl+letter combinations
//! - arrow keys, Tab/BackTab, Enter, Backspace, Escape
//! - SGR mouse encoding (1006): press/move/release become pointer events,
//!   wheel buttons become wheel events
//!
//! There is no touch reporting in terminals; hosts that want the touch
//! input path (its own sensitivity and decay tuning) construct
//! [`TouchEvent`](crate::input::TouchEvent)s directly, as the showcase's
//! touch-emulation mode does.

#![allow(clippy::match_same_arms)]

use crate::input::event::Event;
use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};
use crate::input::pointer::{PointerEvent, WheelEvent};

/// Error type for input parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input buffer is empty.
    Empty,
    /// Incomplete escape sequence (need more bytes).
    Incomplete,
    /// Unrecognized escape sequence.
    UnrecognizedSequence(Vec<u8>),
    /// Invalid UTF-8 in input.
    InvalidUtf8,
}

/// Result of parsing input: the event and the number of bytes consumed.
pub type ParseResult = Result<(Event, usize), ParseError>;

/// Parser state for terminal input bytes.
///
/// Stateless between calls today, kept as a struct so buffering state can
/// be added without changing the call sites.
#[derive(Clone, Debug, Default)]
pub struct InputParser {}

impl InputParser {
    /// Create a new input parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse bytes into an event.
    ///
    /// Returns the event and number of bytes consumed. Call repeatedly on
    /// the same buffer (advancing past consumed bytes) until
    /// `Err(ParseError::Empty)` or `Err(ParseError::Incomplete)`.
    ///
    /// # Errors
    ///
    /// See [`ParseError`].
    pub fn parse(&mut self, input: &[u8]) -> ParseResult {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        let first = input[0];
        match first {
            0x1b => self.parse_escape(input),
            b'\r' | b'\n' => Ok((KeyEvent::key(KeyCode::Enter).into(), 1)),
            b'\t' => Ok((KeyEvent::key(KeyCode::Tab).into(), 1)),
            0x7f => Ok((KeyEvent::key(KeyCode::Backspace).into(), 1)),
            // Ctrl+A through Ctrl+Z (minus the codes handled above).
            0x01..=0x1a => {
                let c = (first - 1 + b'a') as char;
                Ok((
                    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CTRL).into(),
                    1,
                ))
            }
            0x20..=0x7e => Ok((KeyEvent::char(first as char).into(), 1)),
            0x80..=0xff => Self::parse_utf8(input),
            _ => Ok((KeyEvent::char(first as char).into(), 1)),
        }
    }

    fn parse_escape(&mut self, input: &[u8]) -> ParseResult {
        if input.len() == 1 {
            // Could be a lone Escape or the start of a sequence.
            return Err(ParseError::Incomplete);
        }

        match input[1] {
            b'[' => self.parse_csi(input),
            // Alt+key: ESC <char>
            0x20..=0x7e => {
                let c = input[1] as char;
                Ok((KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT).into(), 2))
            }
            // Double escape.
            0x1b => Ok((KeyEvent::key(KeyCode::Esc).into(), 1)),
            _ => Ok((KeyEvent::key(KeyCode::Esc).into(), 1)),
        }
    }

    fn parse_csi(&mut self, input: &[u8]) -> ParseResult {
        if input.len() < 3 {
            return Err(ParseError::Incomplete);
        }

        // SGR mouse: ESC [ < Cb ; Cx ; Cy (M|m)
        if input[2] == b'<' {
            return Self::parse_sgr_mouse(input);
        }

        match input[2] {
            b'A' => Ok((KeyEvent::key(KeyCode::Up).into(), 3)),
            b'B' => Ok((KeyEvent::key(KeyCode::Down).into(), 3)),
            b'C' => Ok((KeyEvent::key(KeyCode::Right).into(), 3)),
            b'D' => Ok((KeyEvent::key(KeyCode::Left).into(), 3)),
            b'Z' => Ok((KeyEvent::key(KeyCode::BackTab).into(), 3)),
            _ => {
                // Skip to the final byte (0x40-0x7e) and report the sequence.
                for (i, &b) in input.iter().enumerate().skip(2) {
                    if (0x40..=0x7e).contains(&b) {
                        return Err(ParseError::UnrecognizedSequence(input[..=i].to_vec()));
                    }
                }
                Err(ParseError::Incomplete)
            }
        }
    }

    fn parse_sgr_mouse(input: &[u8]) -> ParseResult {
        // Find the final byte: 'M' (press/move) or 'm' (release).
        let Some(end) = input
            .iter()
            .position(|&b| b == b'M' || b == b'm')
        else {
            return Err(ParseError::Incomplete);
        };

        let body = &input[3..end];
        let mut fields = body.split(|&b| b == b';');
        let (Some(cb), Some(cx), Some(cy)) = (fields.next(), fields.next(), fields.next()) else {
            return Err(ParseError::UnrecognizedSequence(input[..=end].to_vec()));
        };
        let (Some(cb), Some(cx), Some(cy)) =
            (parse_decimal(cb), parse_decimal(cx), parse_decimal(cy))
        else {
            return Err(ParseError::UnrecognizedSequence(input[..=end].to_vec()));
        };

        // Coordinates are 1-based cells.
        let x = (cx.saturating_sub(1)) as f32;
        let y = (cy.saturating_sub(1)) as f32;
        let consumed = end + 1;

        // Wheel buttons.
        if cb & 0x40 != 0 {
            let delta = if cb & 0x01 == 0 { 1.0 } else { -1.0 };
            return Ok((WheelEvent::new(delta).into(), consumed));
        }

        let event = if input[end] == b'm' {
            PointerEvent::release(x, y)
        } else if cb & 0x20 != 0 {
            PointerEvent::move_to(x, y)
        } else {
            PointerEvent::press(x, y)
        };
        Ok((event.into(), consumed))
    }

    fn parse_utf8(input: &[u8]) -> ParseResult {
        let len = utf8_len(input[0]);
        if len == 0 {
            return Err(ParseError::InvalidUtf8);
        }
        if input.len() < len {
            return Err(ParseError::Incomplete);
        }
        match std::str::from_utf8(&input[..len]) {
            Ok(s) => match s.chars().next() {
                Some(c) => Ok((KeyEvent::char(c).into(), len)),
                None => Err(ParseError::InvalidUtf8),
            },
            Err(_) => Err(ParseError::InvalidUtf8),
        }
    }
}

const fn utf8_len(first: u8) -> usize {
    match first {
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 0,
    }
}

fn parse_decimal(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::pointer::PointerPhase;

    fn parse_one(bytes: &[u8]) -> (Event, usize) {
        InputParser::new().parse(bytes).expect("parse")
    }

    #[test]
    fn test_plain_char() {
        let (event, n) = parse_one(b"q");
        assert_eq!(n, 1);
        assert_eq!(event.key().map(|k| k.code), Some(KeyCode::Char('q')));
    }

    #[test]
    fn test_ctrl_char() {
        let (event, _) = parse_one(&[0x11]); // Ctrl+Q
        let key = event.key().unwrap();
        assert!(key.is_ctrl('q'));
    }

    #[test]
    fn test_enter_tab_backspace() {
        assert_eq!(parse_one(b"\r").0.key().unwrap().code, KeyCode::Enter);
        assert_eq!(parse_one(b"\t").0.key().unwrap().code, KeyCode::Tab);
        assert_eq!(parse_one(&[0x7f]).0.key().unwrap().code, KeyCode::Backspace);
    }

    #[test]
    fn test_arrows_and_backtab() {
        assert_eq!(parse_one(b"\x1b[A").0.key().unwrap().code, KeyCode::Up);
        assert_eq!(parse_one(b"\x1b[B").0.key().unwrap().code, KeyCode::Down);
        assert_eq!(parse_one(b"\x1b[C").0.key().unwrap().code, KeyCode::Right);
        assert_eq!(parse_one(b"\x1b[D").0.key().unwrap().code, KeyCode::Left);
        assert_eq!(parse_one(b"\x1b[Z").0.key().unwrap().code, KeyCode::BackTab);
    }

    #[test]
    fn test_lone_escape_incomplete() {
        assert_eq!(
            InputParser::new().parse(b"\x1b"),
            Err(ParseError::Incomplete)
        );
    }

    #[test]
    fn test_alt_char() {
        let (event, n) = parse_one(b"\x1bx");
        assert_eq!(n, 2);
        let key = event.key().unwrap();
        assert_eq!(key.code, KeyCode::Char('x'));
        assert!(key.modifiers.contains(KeyModifiers::ALT));
    }

    #[test]
    fn test_sgr_mouse_press() {
        let (event, n) = parse_one(b"\x1b[<0;10;5M");
        assert_eq!(n, 10);
        let pointer = event.pointer().unwrap();
        assert_eq!(pointer.phase, PointerPhase::Press);
        assert!((pointer.x - 9.0).abs() < f32::EPSILON);
        assert!((pointer.y - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sgr_mouse_move_and_release() {
        let (event, _) = parse_one(b"\x1b[<32;11;5M");
        assert_eq!(event.pointer().unwrap().phase, PointerPhase::Move);

        let (event, _) = parse_one(b"\x1b[<0;11;5m");
        assert_eq!(event.pointer().unwrap().phase, PointerPhase::Release);
    }

    #[test]
    fn test_sgr_wheel() {
        let (event, _) = parse_one(b"\x1b[<64;1;1M");
        assert!((event.wheel().unwrap().delta - 1.0).abs() < f32::EPSILON);

        let (event, _) = parse_one(b"\x1b[<65;1;1M");
        assert!((event.wheel().unwrap().delta + 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sgr_mouse_incomplete() {
        assert_eq!(
            InputParser::new().parse(b"\x1b[<0;10;5"),
            Err(ParseError::Incomplete)
        );
    }

    #[test]
    fn test_utf8_char() {
        let bytes = "é".as_bytes();
        let (event, n) = parse_one(bytes);
        assert_eq!(n, 2);
        assert_eq!(event.key().unwrap().code, KeyCode::Char('é'));
    }

    #[test]
    fn test_utf8_truncated_incomplete() {
        let bytes = "好".as_bytes();
        assert_eq!(
            InputParser::new().parse(&bytes[..1]),
            Err(ParseError::Incomplete)
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(InputParser::new().parse(b""), Err(ParseError::Empty));
    }

    #[test]
    fn test_unrecognized_csi() {
        let result = InputParser::new().parse(b"\x1b[99~");
        assert!(matches!(result, Err(ParseError::UnrecognizedSequence(_))));
    }

    #[test]
    fn test_sequential_parsing() {
        let mut parser = InputParser::new();
        let buffer = b"a\x1b[A\x1b[<0;3;3M";
        let mut offset = 0;
        let mut events = Vec::new();
        while let Ok((event, n)) = parser.parse(&buffer[offset..]) {
            events.push(event);
            offset += n;
        }
        assert_eq!(events.len(), 3);
        assert_eq!(offset, buffer.len());
    }
}
