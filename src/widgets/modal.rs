//! Draggable modal dialog.
//!
//! The modal floats over the page at a tracked position. Pressing inside the
//! title bar starts a drag that moves the whole window by the pointer delta;
//! the position clamps to the viewport so the title bar can never be pulled
//! out of reach. Escape or a press on the backdrop closes it.

use crate::geometry::{Point, Rect};
use crate::input::{Event, KeyCode, PointerEvent, PointerPhase};
use crate::style::Style;
use crate::surface::Surface;
use crate::theme;
use crate::widgets::{Viewport, Widget};

/// The modal widget.
#[derive(Clone, Debug)]
pub struct Modal {
    title: String,
    body: Vec<String>,
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    open: bool,
    drag_anchor: Option<Point>,
}

impl Modal {
    /// Create a closed modal centered on the default viewport.
    #[must_use]
    pub fn new(title: impl Into<String>, body: Vec<String>, width: u32, height: u32) -> Self {
        let vp = Viewport::default();
        let x = (u32::from(vp.width).saturating_sub(width)) / 2;
        let y = (u32::from(vp.height).saturating_sub(height)) / 2;
        Self {
            title: title.into(),
            body,
            width,
            height,
            x,
            y,
            open: false,
            drag_anchor: None,
        }
    }

    /// Whether the modal is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Current window rectangle.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Show the modal.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the modal and abandon any drag in progress.
    pub fn close(&mut self) {
        self.open = false;
        self.drag_anchor = None;
    }

    /// The title bar row.
    fn title_bar(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, 1)
    }

    fn pointer(&mut self, event: PointerEvent, viewport: Viewport) {
        match event.phase {
            PointerPhase::Press => {
                if self.title_bar().contains_point(event.position()) {
                    self.drag_anchor = Some(event.position());
                } else if !self.frame().contains_point(event.position()) {
                    // Backdrop press dismisses.
                    self.close();
                }
            }
            PointerPhase::Move => {
                let Some(anchor) = self.drag_anchor else { return };
                let (dx, dy) = event.position().delta_from(anchor);
                self.move_by(dx, dy, viewport);
                self.drag_anchor = Some(event.position());
            }
            PointerPhase::Release => self.drag_anchor = None,
        }
    }

    /// Translate by a delta, clamped so the window stays inside the viewport.
    fn move_by(&mut self, dx: f32, dy: f32, viewport: Viewport) {
        let max_x = u32::from(viewport.width).saturating_sub(self.width);
        let max_y = u32::from(viewport.height).saturating_sub(self.height);
        let nx = (self.x as f32 + dx).round().max(0.0) as u32;
        let ny = (self.y as f32 + dy).round().max(0.0) as u32;
        self.x = nx.min(max_x);
        self.y = ny.min(max_y);
    }
}

impl Widget for Modal {
    fn handle_event(&mut self, event: &Event, viewport: Viewport) {
        if !self.open {
            return;
        }
        match event {
            Event::Key(key) if key.is(KeyCode::Esc) => self.close(),
            Event::Pointer(e) => self.pointer(*e, viewport),
            _ => {}
        }
    }

    fn render(&self, surface: &mut Surface, area: Rect) {
        if !self.open || area.is_empty() {
            return;
        }
        let frame = self.frame();
        surface.fill_rect(frame, theme::SURFACE);
        surface.draw_box(frame, theme::border());

        // Title bar.
        surface.fill_rect(self.title_bar(), theme::PRIMARY);
        let mut title = format!(" {}", self.title);
        title.truncate(self.width.saturating_sub(1) as usize);
        surface.draw_text(self.x, self.y, &title, Style::fg(theme::TEXT).with_bg(theme::PRIMARY));

        let inner = frame.inset(1);
        for (i, line) in self.body.iter().enumerate() {
            let y = inner.y + 1 + i as u32;
            if y >= inner.bottom() {
                break;
            }
            surface.draw_text(inner.x, y, line, theme::text());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyEvent;

    fn modal() -> Modal {
        let mut m = Modal::new("Settings", vec!["Line one".to_string()], 30, 10);
        m.open();
        m
    }

    fn vp() -> Viewport {
        Viewport::default()
    }

    #[test]
    fn test_open_close() {
        let mut m = Modal::new("T", Vec::new(), 20, 8);
        assert!(!m.is_open());
        m.open();
        assert!(m.is_open());
        m.close();
        assert!(!m.is_open());
    }

    #[test]
    fn test_escape_closes() {
        let mut m = modal();
        m.handle_event(&KeyEvent::key(KeyCode::Esc).into(), vp());
        assert!(!m.is_open());
    }

    #[test]
    fn test_backdrop_press_closes() {
        let mut m = modal();
        m.handle_event(&PointerEvent::press(0.0, 0.0).into(), vp());
        assert!(!m.is_open());
    }

    #[test]
    fn test_body_press_does_not_close() {
        let mut m = modal();
        let frame = m.frame();
        let inside = PointerEvent::press((frame.x + 2) as f32, (frame.y + 3) as f32);
        m.handle_event(&inside.into(), vp());
        assert!(m.is_open());
    }

    #[test]
    fn test_title_bar_drag_moves_by_delta() {
        let mut m = modal();
        let start = m.frame();
        let (tx, ty) = (start.x as f32 + 5.0, start.y as f32);
        m.handle_event(&PointerEvent::press(tx, ty).into(), vp());
        m.handle_event(&PointerEvent::move_to(tx + 4.0, ty + 2.0).into(), vp());
        m.handle_event(&PointerEvent::release(tx + 4.0, ty + 2.0).into(), vp());
        let moved = m.frame();
        assert_eq!(moved.x, start.x + 4);
        assert_eq!(moved.y, start.y + 2);
    }

    #[test]
    fn test_drag_clamps_to_viewport() {
        let mut m = modal();
        let start = m.frame();
        let (tx, ty) = (start.x as f32 + 1.0, start.y as f32);
        m.handle_event(&PointerEvent::press(tx, ty).into(), vp());
        m.handle_event(&PointerEvent::move_to(tx - 10_000.0, ty - 10_000.0).into(), vp());
        let frame = m.frame();
        assert_eq!(frame.x, 0);
        assert_eq!(frame.y, 0);

        m.handle_event(&PointerEvent::move_to(10_000.0, 10_000.0).into(), vp());
        let frame = m.frame();
        let v = vp();
        assert_eq!(frame.right(), u32::from(v.width));
        assert_eq!(frame.bottom(), u32::from(v.height));
    }

    #[test]
    fn test_events_ignored_while_closed() {
        let mut m = Modal::new("T", Vec::new(), 20, 8);
        let before = m.frame();
        m.handle_event(&PointerEvent::press(before.x as f32, before.y as f32).into(), vp());
        m.handle_event(&PointerEvent::move_to(50.0, 20.0).into(), vp());
        assert_eq!(m.frame(), before);
    }

    #[test]
    fn test_render_when_open_only() {
        let m = Modal::new("T", Vec::new(), 20, 8);
        let mut surface = Surface::new(80, 24).unwrap();
        let before = surface.clone();
        let area = surface.area();
        m.render(&mut surface, area);
        assert_eq!(surface, before);

        let m = modal();
        let area = surface.area();
        m.render(&mut surface, area);
        assert_ne!(surface, before);
    }
}
