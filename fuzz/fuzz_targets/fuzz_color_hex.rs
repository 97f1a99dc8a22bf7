//! Fuzz target for color hex parsing.
//!
//! Tests that `Rgba::from_hex` handles arbitrary strings without panicking.

#![no_main]

use chadcn_tui::color::Rgba;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // This should never panic, just return None for invalid input
    let _ = Rgba::from_hex(data);

    // Also try with a # prefix if not already present
    if !data.starts_with('#') {
        let with_hash = format!("#{data}");
        let _ = Rgba::from_hex(&with_hash);
    }

    // Walk substrings on char boundaries to find edge cases
    for (i, _) in data.char_indices().take(10) {
        let _ = Rgba::from_hex(&data[i..]);
        let _ = Rgba::from_hex(&data[..i]);
    }
});
