//! ANSI escape sequence generation.
//!
//! Sequence constants plus the small set of builders the renderer and docs
//! pages need: cursor positioning, truecolor SGR, and OSC 52 clipboard copy
//! for the "copy source" action.

use crate::color::Rgba;
use crate::style::{Style, TextAttributes};
use std::fmt::Write as _;

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Clear entire screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Move cursor to home position (1,1).
pub const CURSOR_HOME: &str = "\x1b[H";

/// Enable alternative screen buffer.
pub const ALT_SCREEN_ON: &str = "\x1b[?1049h";

/// Disable alternative screen buffer.
pub const ALT_SCREEN_OFF: &str = "\x1b[?1049l";

/// Enable mouse tracking (all motion, SGR encoding).
pub const MOUSE_ON: &str = "\x1b[?1003h\x1b[?1006h";

/// Disable mouse tracking.
pub const MOUSE_OFF: &str = "\x1b[?1003l\x1b[?1006l";

/// Move the cursor to a zero-based cell position.
#[must_use]
pub fn cursor_position(x: u32, y: u32) -> String {
    // CSI row;col H is 1-based.
    format!("\x1b[{};{}H", y + 1, x + 1)
}

/// SGR sequence for a truecolor foreground.
#[must_use]
pub fn fg_color(color: Rgba) -> String {
    let (r, g, b) = color.to_rgb_u8();
    format!("\x1b[38;2;{r};{g};{b}m")
}

/// SGR sequence for a truecolor background.
#[must_use]
pub fn bg_color(color: Rgba) -> String {
    let (r, g, b) = color.to_rgb_u8();
    format!("\x1b[48;2;{r};{g};{b}m")
}

/// Full SGR run for a style: reset, then colors and attributes.
#[must_use]
pub fn style_sequence(style: Style) -> String {
    let mut seq = String::from(RESET);
    if let Some(fg) = style.fg {
        seq.push_str(&fg_color(fg));
    }
    if let Some(bg) = style.bg {
        seq.push_str(&bg_color(bg));
    }
    for (flag, code) in [
        (TextAttributes::BOLD, 1),
        (TextAttributes::DIM, 2),
        (TextAttributes::ITALIC, 3),
        (TextAttributes::UNDERLINE, 4),
        (TextAttributes::BLINK, 5),
        (TextAttributes::INVERSE, 7),
        (TextAttributes::HIDDEN, 8),
        (TextAttributes::STRIKETHROUGH, 9),
    ] {
        if style.attributes.contains(flag) {
            let _ = write!(seq, "\x1b[{code}m");
        }
    }
    seq
}

/// OSC 52 sequence that places `text` on the system clipboard.
///
/// Terminals that honor OSC 52 (kitty, iTerm2, recent xterm) copy without
/// any host-side clipboard tooling.
#[must_use]
pub fn osc52_copy(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", base64_encode(text.as_bytes()))
}

/// Standard-alphabet base64, no line wrapping (OSC 52 payload format).
fn base64_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);
    for chunk in data.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        out.push(ALPHABET[(b0 >> 2) as usize] as char);
        out.push(ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);
        if chunk.len() > 1 {
            out.push(ALPHABET[(((b1 & 0x0f) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            out.push('=');
        }
        if chunk.len() > 2 {
            out.push(ALPHABET[(b2 & 0x3f) as usize] as char);
        } else {
            out.push('=');
        }
    }
    out
}
