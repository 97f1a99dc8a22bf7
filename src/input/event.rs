//! The unified input event type delivered to widgets.

use crate::input::keyboard::KeyEvent;
use crate::input::pointer::{PointerEvent, TouchEvent, WheelEvent};

/// An input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Pointer (mouse) event.
    Pointer(PointerEvent),
    /// Touch event.
    Touch(TouchEvent),
    /// Wheel/scroll event.
    Wheel(WheelEvent),
    /// Keyboard event.
    Key(KeyEvent),
    /// Terminal resize event.
    Resize(ResizeEvent),
}

impl Event {
    /// Check if this is a pointer event.
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    /// Check if this is a touch event.
    #[must_use]
    pub const fn is_touch(&self) -> bool {
        matches!(self, Self::Touch(_))
    }

    /// Check if this is a key event.
    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Get the pointer event if this is one.
    #[must_use]
    pub const fn pointer(&self) -> Option<&PointerEvent> {
        match self {
            Self::Pointer(e) => Some(e),
            _ => None,
        }
    }

    /// Get the touch event if this is one.
    #[must_use]
    pub const fn touch(&self) -> Option<&TouchEvent> {
        match self {
            Self::Touch(e) => Some(e),
            _ => None,
        }
    }

    /// Get the wheel event if this is one.
    #[must_use]
    pub const fn wheel(&self) -> Option<&WheelEvent> {
        match self {
            Self::Wheel(e) => Some(e),
            _ => None,
        }
    }

    /// Get the key event if this is one.
    #[must_use]
    pub const fn key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PointerEvent> for Event {
    fn from(e: PointerEvent) -> Self {
        Self::Pointer(e)
    }
}

impl From<TouchEvent> for Event {
    fn from(e: TouchEvent) -> Self {
        Self::Touch(e)
    }
}

impl From<WheelEvent> for Event {
    fn from(e: WheelEvent) -> Self {
        Self::Wheel(e)
    }
}

impl From<KeyEvent> for Event {
    fn from(e: KeyEvent) -> Self {
        Self::Key(e)
    }
}

impl From<ResizeEvent> for Event {
    fn from(e: ResizeEvent) -> Self {
        Self::Resize(e)
    }
}

/// Terminal resize event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeEvent {
    /// New width in columns.
    pub width: u16,
    /// New height in rows.
    pub height: u16,
}

impl ResizeEvent {
    /// Create a new resize event.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keyboard::KeyCode;

    #[test]
    fn test_event_accessors() {
        let event: Event = PointerEvent::press(3.0, 4.0).into();
        assert!(event.is_pointer());
        assert!(!event.is_touch());
        assert!(event.pointer().is_some());
        assert!(event.key().is_none());

        let event: Event = KeyEvent::key(KeyCode::Esc).into();
        assert!(event.is_key());
        assert_eq!(event.key().map(|k| k.code), Some(KeyCode::Esc));
    }

    #[test]
    fn test_from_conversions() {
        let event: Event = TouchEvent::start(0.0, 0.0).into();
        assert!(event.is_touch());

        let event: Event = WheelEvent::up().into();
        assert!(event.wheel().is_some());

        let event: Event = ResizeEvent::new(80, 24).into();
        assert!(matches!(event, Event::Resize(r) if r.width == 80 && r.height == 24));
    }
}
