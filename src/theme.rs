//! Default palette shared by the widgets and the showcase.
//!
//! Dark slate background with a violet primary accent. Widgets take styles
//! per call, so hosts can ignore this module entirely and bring their own
//! colors.

use crate::color::Rgba;
use crate::style::Style;

/// Page background.
pub const BACKGROUND: Rgba = Rgba::new(0.035, 0.044, 0.078, 1.0);
/// Raised surface (cards, modals, table header).
pub const SURFACE: Rgba = Rgba::new(0.075, 0.09, 0.145, 1.0);
/// Border lines.
pub const BORDER: Rgba = Rgba::new(0.2, 0.23, 0.32, 1.0);
/// Primary accent (violet).
pub const PRIMARY: Rgba = Rgba::new(0.486, 0.227, 0.929, 1.0);
/// Secondary accent (cyan).
pub const SECONDARY: Rgba = Rgba::new(0.133, 0.773, 0.871, 1.0);
/// Destructive red.
pub const DESTRUCTIVE: Rgba = Rgba::new(0.937, 0.267, 0.267, 1.0);
/// Success green.
pub const SUCCESS: Rgba = Rgba::new(0.29, 0.78, 0.44, 1.0);
/// Primary text.
pub const TEXT: Rgba = Rgba::new(0.92, 0.93, 0.96, 1.0);
/// Muted/secondary text.
pub const TEXT_MUTED: Rgba = Rgba::new(0.55, 0.58, 0.66, 1.0);

/// Style for body text on the default background.
#[must_use]
pub fn text() -> Style {
    Style::fg(TEXT)
}

/// Style for muted captions and placeholders.
#[must_use]
pub fn muted() -> Style {
    Style::fg(TEXT_MUTED)
}

/// Style for section titles.
#[must_use]
pub fn title() -> Style {
    Style::fg(TEXT).with_bold()
}

/// Style for the primary accent.
#[must_use]
pub fn accent() -> Style {
    Style::fg(PRIMARY)
}

/// Style for border glyphs.
#[must_use]
pub fn border() -> Style {
    Style::fg(BORDER)
}
