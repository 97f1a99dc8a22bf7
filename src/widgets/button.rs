//! Button with visual variants and pointer state.

use crate::event::emit_event;
use crate::geometry::Rect;
use crate::input::{Event, PointerPhase};
use crate::style::Style;
use crate::surface::Surface;
use crate::theme;
use crate::widgets::{Viewport, Widget};

/// Visual variant of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Destructive,
}

/// The button widget.
#[derive(Clone, Debug)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    area: Rect,
    hovered: bool,
    pressed: bool,
}

impl Button {
    #[must_use]
    pub fn new(label: impl Into<String>, variant: ButtonVariant) -> Self {
        let label = label.into();
        let width = label.chars().count() as u32 + 4;
        Self {
            label,
            variant,
            area: Rect::new(0, 0, width, 3),
            hovered: false,
            pressed: false,
        }
    }

    /// Place the button.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// The button's hit area.
    #[must_use]
    pub const fn area(&self) -> Rect {
        self.area
    }

    #[must_use]
    pub const fn variant(&self) -> ButtonVariant {
        self.variant
    }

    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn base_style(&self) -> Style {
        match self.variant {
            ButtonVariant::Primary => Style::fg(theme::TEXT).with_bg(theme::PRIMARY),
            ButtonVariant::Secondary => Style::fg(theme::BACKGROUND).with_bg(theme::SECONDARY),
            ButtonVariant::Outline => Style::fg(theme::PRIMARY),
            ButtonVariant::Ghost => Style::fg(theme::TEXT_MUTED),
            ButtonVariant::Destructive => Style::fg(theme::TEXT).with_bg(theme::DESTRUCTIVE),
        }
    }
}

impl Widget for Button {
    fn handle_event(&mut self, event: &Event, _viewport: Viewport) {
        let Event::Pointer(e) = event else { return };
        let inside = self.area.contains_point(e.position());
        match e.phase {
            PointerPhase::Move => {
                self.hovered = inside;
                if !inside {
                    self.pressed = false;
                }
            }
            PointerPhase::Press => {
                self.pressed = inside;
                self.hovered = inside;
            }
            PointerPhase::Release => {
                // A click is a release over the button that started on it.
                if self.pressed && inside {
                    emit_event("button.click", &self.label);
                }
                self.pressed = false;
            }
        }
    }

    fn render(&self, surface: &mut Surface, area: Rect) {
        if area.is_empty() {
            return;
        }
        let mut style = self.base_style();
        if self.pressed {
            style = style.with_attributes(style.attributes | crate::style::TextAttributes::INVERSE);
        } else if self.hovered {
            style = style.with_attributes(style.attributes | crate::style::TextAttributes::BOLD);
        }

        let rect = self.area;
        if let Some(bg) = style.bg {
            surface.fill_rect(rect, bg);
        }
        if self.variant == ButtonVariant::Outline {
            surface.draw_box(rect, theme::accent());
        }
        let label = format!(" {} ", self.label);
        let ly = rect.y + rect.height / 2;
        surface.draw_text(rect.x + 1, ly, &label, style);
    }
}
