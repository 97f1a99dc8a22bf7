//! Dropdown menu.
//!
//! A trigger row that expands a list of options below it. Arrow keys move
//! the highlight, Enter selects and collapses, Escape or a press outside
//! the menu collapses without changing the selection.

use crate::event::emit_event;
use crate::geometry::Rect;
use crate::input::{Event, KeyCode, PointerEvent, PointerPhase};
use crate::style::Style;
use crate::surface::Surface;
use crate::theme;
use crate::widgets::{Viewport, Widget};

/// The dropdown widget.
#[derive(Clone, Debug)]
pub struct Dropdown {
    label: String,
    options: Vec<String>,
    selected: Option<usize>,
    highlighted: usize,
    open: bool,
    /// Trigger position, set by the page layout.
    anchor: Rect,
}

impl Dropdown {
    #[must_use]
    pub fn new(label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            label: label.into(),
            options,
            selected: None,
            highlighted: 0,
            open: false,
            anchor: Rect::new(0, 0, 20, 1),
        }
    }

    /// Place the trigger row.
    pub fn set_anchor(&mut self, anchor: Rect) {
        self.anchor = anchor;
    }

    /// Whether the option list is expanded.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the committed selection.
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Label of the committed selection.
    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].as_str())
    }

    /// Index of the highlighted option while open.
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Expand the list, highlighting the current selection if any.
    pub fn open(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.open = true;
        self.highlighted = self.selected.unwrap_or(0);
    }

    /// Collapse without changing the selection.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Commit an option and collapse. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.options.len() {
            return;
        }
        self.selected = Some(index);
        self.open = false;
        emit_event("dropdown.select", &self.options[index]);
    }

    fn menu_rect(&self) -> Rect {
        Rect::new(
            self.anchor.x,
            self.anchor.y + 1,
            self.anchor.width,
            self.options.len() as u32,
        )
    }

    fn pointer(&mut self, event: PointerEvent) {
        if event.phase != PointerPhase::Press {
            return;
        }
        let p = event.position();
        if self.anchor.contains_point(p) {
            if self.open {
                self.close();
            } else {
                self.open();
            }
            return;
        }
        if self.open {
            let menu = self.menu_rect();
            if menu.contains_point(p) {
                let index = (p.y as u32 - menu.y) as usize;
                self.select(index);
            } else {
                // Outside press collapses.
                self.close();
            }
        }
    }
}

impl Widget for Dropdown {
    fn handle_event(&mut self, event: &Event, _viewport: Viewport) {
        match event {
            Event::Pointer(e) => self.pointer(*e),
            Event::Key(key) if self.open => match key.code {
                KeyCode::Down => {
                    self.highlighted = (self.highlighted + 1) % self.options.len();
                }
                KeyCode::Up => {
                    self.highlighted =
                        (self.highlighted + self.options.len() - 1) % self.options.len();
                }
                KeyCode::Enter => self.select(self.highlighted),
                KeyCode::Esc => self.close(),
                _ => {}
            },
            Event::Key(key) if key.is(KeyCode::Enter) => self.open(),
            _ => {}
        }
    }

    fn render(&self, surface: &mut Surface, area: Rect) {
        if area.is_empty() {
            return;
        }
        let shown = self.selected_label().unwrap_or(&self.label);
        let marker = if self.open { "▴" } else { "▾" };
        let mut trigger = format!("{shown} {marker}");
        trigger.truncate(self.anchor.width as usize);
        surface.fill_rect(self.anchor, theme::SURFACE);
        surface.draw_text(self.anchor.x, self.anchor.y, &trigger, theme::text());

        if !self.open {
            return;
        }
        let menu = self.menu_rect();
        surface.fill_rect(menu, theme::SURFACE);
        for (i, option) in self.options.iter().enumerate() {
            let y = menu.y + i as u32;
            if y >= area.bottom() {
                break;
            }
            let style = if i == self.highlighted {
                Style::fg(theme::TEXT).with_bg(theme::PRIMARY)
            } else {
                theme::text()
            };
            let mut line = format!(" {option}");
            line.truncate(menu.width as usize);
            surface.draw_text(menu.x, y, &line, style);
        }
    }
}
