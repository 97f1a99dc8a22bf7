//! Pointer, touch, and wheel event types.
//!
//! Pointer and touch are deliberately separate types: the carousel tunes
//! sensitivity and momentum decay per input modality, so collapsing them
//! into one event would lose information widgets rely on.

use crate::geometry::Point;

/// Phase of a pointer or touch contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Contact began (pointer down / touch start).
    Press,
    /// Contact moved.
    Move,
    /// Contact ended (pointer up / touch end).
    Release,
}

/// A pointer (mouse) event in input-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Contact phase.
    pub phase: PointerPhase,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(x: f32, y: f32, phase: PointerPhase) -> Self {
        Self { x, y, phase }
    }

    /// Create a press event.
    #[must_use]
    pub const fn press(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerPhase::Press)
    }

    /// Create a move event.
    #[must_use]
    pub const fn move_to(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerPhase::Move)
    }

    /// Create a release event.
    #[must_use]
    pub const fn release(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerPhase::Release)
    }

    /// Position as a point.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A touch event in input-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Contact phase.
    pub phase: PointerPhase,
}

impl TouchEvent {
    /// Create a new touch event.
    #[must_use]
    pub const fn new(x: f32, y: f32, phase: PointerPhase) -> Self {
        Self { x, y, phase }
    }

    /// Create a touch-start event.
    #[must_use]
    pub const fn start(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerPhase::Press)
    }

    /// Create a touch-move event.
    #[must_use]
    pub const fn move_to(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerPhase::Move)
    }

    /// Create a touch-end event.
    #[must_use]
    pub const fn end(x: f32, y: f32) -> Self {
        Self::new(x, y, PointerPhase::Release)
    }

    /// Position as a point.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A wheel/scroll event.
///
/// Positive `delta` scrolls away from the user (wheel up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Signed scroll amount.
    pub delta: f32,
}

impl WheelEvent {
    /// Create a new wheel event.
    #[must_use]
    pub const fn new(delta: f32) -> Self {
        Self { delta }
    }

    /// Wheel-up by one notch.
    #[must_use]
    pub const fn up() -> Self {
        Self::new(1.0)
    }

    /// Wheel-down by one notch.
    #[must_use]
    pub const fn down() -> Self {
        Self::new(-1.0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_pointer_factories() {
        let e = PointerEvent::press(10.0, 5.0);
        assert_eq!(e.phase, PointerPhase::Press);
        assert_eq!(e.position(), Point::new(10.0, 5.0));

        assert_eq!(PointerEvent::move_to(0.0, 0.0).phase, PointerPhase::Move);
        assert_eq!(PointerEvent::release(0.0, 0.0).phase, PointerPhase::Release);
    }

    #[test]
    fn test_touch_factories() {
        assert_eq!(TouchEvent::start(1.0, 2.0).phase, PointerPhase::Press);
        assert_eq!(TouchEvent::move_to(1.0, 2.0).phase, PointerPhase::Move);
        assert_eq!(TouchEvent::end(1.0, 2.0).phase, PointerPhase::Release);
    }

    #[test]
    fn test_wheel_notches() {
        assert_eq!(WheelEvent::up().delta, 1.0);
        assert_eq!(WheelEvent::down().delta, -1.0);
    }
}
