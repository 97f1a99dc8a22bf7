//! Card container: bordered box with optional title and body lines.

use crate::geometry::Rect;
use crate::surface::Surface;
use crate::theme;
use crate::widgets::{Viewport, Widget};
use crate::input::Event;

/// The card widget.
#[derive(Clone, Debug)]
pub struct Card {
    title: Option<String>,
    body: Vec<String>,
    footer: Option<String>,
}

impl Card {
    #[must_use]
    pub fn new(title: Option<String>, body: Vec<String>) -> Self {
        Self {
            title,
            body,
            footer: None,
        }
    }

    /// Card with a title.
    #[must_use]
    pub fn titled(title: impl Into<String>, body: Vec<String>) -> Self {
        Self::new(Some(title.into()), body)
    }

    /// Card with body only.
    #[must_use]
    pub fn plain(body: Vec<String>) -> Self {
        Self::new(None, body)
    }

    /// Add a footer line rendered at the bottom of the card.
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

impl Widget for Card {
    fn handle_event(&mut self, _event: &Event, _viewport: Viewport) {}

    fn render(&self, surface: &mut Surface, area: Rect) {
        if area.is_empty() {
            return;
        }
        surface.fill_rect(area, theme::SURFACE);
        surface.draw_box(area, theme::border());

        let inner = area.inset(1);
        if inner.is_empty() {
            return;
        }
        let mut y = inner.y;
        if let Some(title) = &self.title {
            let mut title = title.clone();
            title.truncate(inner.width as usize);
            surface.draw_text(inner.x, y, &title, theme::title());
            y += 2;
        }
        // The footer claims the last inner row.
        let body_end = if self.footer.is_some() {
            inner.bottom().saturating_sub(1)
        } else {
            inner.bottom()
        };
        for line in &self.body {
            if y >= body_end {
                break;
            }
            surface.draw_text(inner.x, y, line, theme::text());
            y += 1;
        }
        if let Some(footer) = &self.footer {
            let mut footer = footer.clone();
            footer.truncate(inner.width as usize);
            surface.draw_text(inner.x, inner.bottom() - 1, &footer, theme::muted());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titled_card_renders_title_and_body() {
        let card = Card::titled("Billing", vec!["Plan: Pro".to_string()]);
        let mut surface = Surface::new(30, 8).unwrap();
        let area = surface.area();
        card.render(&mut surface, area);
        assert!(surface.row_text(1).contains("Billing"));
        assert!(surface.row_text(3).contains("Plan: Pro"));
    }

    #[test]
    fn test_plain_card_starts_body_at_top() {
        let card = Card::plain(vec!["only line".to_string()]);
        let mut surface = Surface::new(30, 6).unwrap();
        let area = surface.area();
        card.render(&mut surface, area);
        assert!(surface.row_text(1).contains("only line"));
    }

    #[test]
    fn test_footer_renders_on_last_inner_row() {
        let card = Card::plain(vec!["body".to_string()]).with_footer("updated today");
        let mut surface = Surface::new(30, 6).unwrap();
        let area = surface.area();
        card.render(&mut surface, area);
        assert!(surface.row_text(4).contains("updated today"));
        assert!(surface.row_text(1).contains("body"));
    }

    #[test]
    fn test_body_clipped_to_inner_area() {
        let body = (0..20).map(|i| format!("line {i}")).collect();
        let card = Card::plain(body);
        let mut surface = Surface::new(20, 5).unwrap();
        let area = surface.area();
        card.render(&mut surface, area);
        // Bottom border row stays a border, not text.
        assert!(!surface.row_text(4).contains("line"));
    }
}
