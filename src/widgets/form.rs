//! Multi-step form with preserved state across navigation.
//!
//! Steps are a fixed ordered list. Moving between steps never touches
//! field values; navigation past either end is a no-op. Submission fires
//! the `form.submit` event with the flattened field values.

use crate::event::emit_event;
use crate::geometry::Rect;
use crate::input::{Event, KeyCode};
use crate::style::Style;
use crate::surface::Surface;
use crate::theme;
use crate::widgets::{Viewport, Widget};
use std::fmt::Write as _;

/// A single named field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    /// Stable identifier.
    pub name: String,
    /// Displayed label.
    pub label: String,
    /// Current value.
    pub value: String,
}

impl FormField {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            value: String::new(),
        }
    }
}

/// One step of the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormStep {
    /// Step heading.
    pub title: String,
    /// Fields shown on this step.
    pub fields: Vec<FormField>,
}

impl FormStep {
    #[must_use]
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }
}

/// The multi-step form widget.
#[derive(Clone, Debug)]
pub struct MultiStepForm {
    steps: Vec<FormStep>,
    current: usize,
    /// Index of the focused field within the current step.
    focus: usize,
    submitted: bool,
}

impl MultiStepForm {
    #[must_use]
    pub fn new(steps: Vec<FormStep>) -> Self {
        Self {
            steps,
            current: 0,
            focus: 0,
            submitted: false,
        }
    }

    /// Zero-based index of the current step.
    #[must_use]
    pub const fn current_step(&self) -> usize {
        self.current
    }

    /// Total step count.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether the form has been submitted.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// The steps and their current values.
    #[must_use]
    pub fn steps(&self) -> &[FormStep] {
        &self.steps
    }

    /// Whether the current step is the last one.
    #[must_use]
    pub fn on_last_step(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }

    /// Move forward one step. At the last step this is a no-op.
    pub fn next_step(&mut self) {
        if !self.on_last_step() {
            self.current += 1;
            self.focus = 0;
        }
    }

    /// Move back one step. At the first step this is a no-op.
    pub fn prev_step(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.focus = 0;
        }
    }

    /// Set a field's value by name, searching every step.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        for step in &mut self.steps {
            if let Some(field) = step.fields.iter_mut().find(|f| f.name == name) {
                field.value = value.into();
                return;
            }
        }
    }

    /// Read a field's value by name.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.steps
            .iter()
            .flat_map(|s| &s.fields)
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Submit the form: fires `form.submit` with `name=value` pairs.
    pub fn submit(&mut self) {
        self.submitted = true;
        let mut payload = String::new();
        for field in self.steps.iter().flat_map(|s| &s.fields) {
            if !payload.is_empty() {
                payload.push('&');
            }
            let _ = write!(payload, "{}={}", field.name, field.value);
        }
        emit_event("form.submit", &payload);
    }

    fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        let focus = self.focus;
        self.steps.get_mut(self.current)?.fields.get_mut(focus)
    }

    fn field_count(&self) -> usize {
        self.steps.get(self.current).map_or(0, |s| s.fields.len())
    }
}

impl Widget for MultiStepForm {
    fn handle_event(&mut self, event: &Event, _viewport: Viewport) {
        let Event::Key(key) = event else { return };
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                let count = self.field_count();
                if count > 0 {
                    self.focus = (self.focus + 1) % count;
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                let count = self.field_count();
                if count > 0 {
                    self.focus = (self.focus + count - 1) % count;
                }
            }
            KeyCode::Right => self.next_step(),
            KeyCode::Left => self.prev_step(),
            KeyCode::Enter => {
                if self.on_last_step() {
                    self.submit();
                } else {
                    self.next_step();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field_mut() {
                    field.value.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.focused_field_mut() {
                    field.value.push(c);
                }
            }
            KeyCode::Esc => {}
        }
    }

    fn render(&self, surface: &mut Surface, area: Rect) {
        if area.is_empty() {
            return;
        }
        let Some(step) = self.steps.get(self.current) else {
            return;
        };

        let heading = format!(
            "{} ({}/{})",
            step.title,
            self.current + 1,
            self.steps.len()
        );
        surface.draw_text(area.x, area.y, &heading, theme::title());

        for (i, field) in step.fields.iter().enumerate() {
            let y = area.y + 2 + (i as u32) * 2;
            if y + 1 >= area.bottom() {
                break;
            }
            let label_style = if i == self.focus {
                theme::accent()
            } else {
                theme::muted()
            };
            surface.draw_text(area.x, y, &field.label, label_style);
            let shown = if field.value.is_empty() && i == self.focus {
                "_"
            } else {
                field.value.as_str()
            };
            surface.draw_text(area.x + 2, y + 1, shown, theme::text());
        }

        if self.submitted && area.height > 1 {
            surface.draw_text(
                area.x,
                area.bottom() - 1,
                "Submitted",
                Style::fg(theme::SUCCESS),
            );
        }
    }
}
