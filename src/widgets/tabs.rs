//! Tab strip with a single active panel.

use crate::geometry::Rect;
use crate::input::{Event, KeyCode, PointerPhase};
use crate::style::Style;
use crate::surface::Surface;
use crate::theme;
use crate::widgets::{Viewport, Widget};

/// The tabs widget. Labels render in one row; the active label is
/// highlighted and only its panel content shows below.
#[derive(Clone, Debug)]
pub struct Tabs {
    labels: Vec<String>,
    panels: Vec<Vec<String>>,
    active: usize,
}

impl Tabs {
    /// Create a tab strip. Panels beyond the label count are ignored and
    /// missing panels render empty.
    #[must_use]
    pub fn new(labels: Vec<String>, panels: Vec<Vec<String>>) -> Self {
        Self {
            labels,
            panels,
            active: 0,
        }
    }

    /// Index of the active tab.
    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    /// Activate a tab by index. Out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) {
        if index < self.labels.len() {
            self.active = index;
        }
    }

    /// Activate the next tab, wrapping.
    pub fn next(&mut self) {
        if !self.labels.is_empty() {
            self.active = (self.active + 1) % self.labels.len();
        }
    }

    /// Activate the previous tab, wrapping.
    pub fn prev(&mut self) {
        if !self.labels.is_empty() {
            self.active = (self.active + self.labels.len() - 1) % self.labels.len();
        }
    }

    /// Each label's strip rectangle in `area`, with a two-cell gap.
    fn label_rects(&self, area: Rect) -> Vec<Rect> {
        let mut x = area.x;
        self.labels
            .iter()
            .map(|label| {
                let width = label.chars().count() as u32 + 2;
                let rect = Rect::new(x, area.y, width, 1);
                x += width + 2;
                rect
            })
            .collect()
    }
}

impl Widget for Tabs {
    fn handle_event(&mut self, event: &Event, viewport: Viewport) {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Right | KeyCode::Tab => self.next(),
                KeyCode::Left | KeyCode::BackTab => self.prev(),
                _ => {}
            },
            Event::Pointer(e) if e.phase == PointerPhase::Press => {
                let strip = viewport.rect();
                for (i, rect) in self.label_rects(strip).iter().enumerate() {
                    if rect.contains_point(e.position()) {
                        self.activate(i);
                        return;
                    }
                }
            }
            _ => {}
        }
    }

    fn render(&self, surface: &mut Surface, area: Rect) {
        if area.is_empty() || self.labels.is_empty() {
            return;
        }
        for (i, rect) in self.label_rects(area).iter().enumerate() {
            let style = if i == self.active {
                Style::fg(theme::TEXT).with_bg(theme::PRIMARY)
            } else {
                theme::muted()
            };
            surface.draw_text(rect.x, rect.y, &format!(" {} ", self.labels[i]), style);
        }
        if area.height > 1 {
            surface.draw_hline(area.x, area.y + 1, area.width, '─', theme::border());
        }

        let Some(panel) = self.panels.get(self.active) else {
            return;
        };
        for (i, line) in panel.iter().enumerate() {
            let y = area.y + 2 + i as u32;
            if y >= area.bottom() {
                break;
            }
            surface.draw_text(area.x, y, line, theme::text());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyEvent, PointerEvent};

    fn tabs() -> Tabs {
        Tabs::new(
            vec!["One".to_string(), "Two".to_string(), "Three".to_string()],
            vec![
                vec!["first panel".to_string()],
                vec!["second panel".to_string()],
                vec!["third panel".to_string()],
            ],
        )
    }

    #[test]
    fn test_activation_bounds() {
        let mut t = tabs();
        t.activate(2);
        assert_eq!(t.active(), 2);
        t.activate(9);
        assert_eq!(t.active(), 2);
    }

    #[test]
    fn test_keyboard_cycles_with_wrap() {
        let mut t = tabs();
        let vp = Viewport::default();
        t.handle_event(&KeyEvent::key(KeyCode::Left).into(), vp);
        assert_eq!(t.active(), 2);
        t.handle_event(&KeyEvent::key(KeyCode::Right).into(), vp);
        assert_eq!(t.active(), 0);
    }

    #[test]
    fn test_pointer_press_activates_label() {
        let mut t = tabs();
        let vp = Viewport::default();
        // Labels: " One " at x 0..5, gap, " Two " at x 7..12.
        t.handle_event(&PointerEvent::press(8.0, 0.0).into(), vp);
        assert_eq!(t.active(), 1);
    }

    #[test]
    fn test_only_active_panel_renders() {
        let mut t = tabs();
        t.activate(1);
        let mut surface = Surface::new(40, 6).unwrap();
        let area = surface.area();
        t.render(&mut surface, area);
        assert!(surface.row_text(2).contains("second panel"));
        assert!(!surface.row_text(2).contains("first panel"));
    }
}
