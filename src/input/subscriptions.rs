//! Widget-owned event subscriptions.
//!
//! Each widget instance owns a [`Subscriptions`] registry describing which
//! event classes it wants delivered. The host loop checks
//! [`Subscriptions::accepts`] before dispatching. [`Subscriptions::dispose`]
//! removes every handle atomically, so a widget tears down all of its
//! listeners in one call when it is closed or dropped.

use crate::input::event::Event;
use bitflags::bitflags;

bitflags! {
    /// Classes of input events a widget can subscribe to.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct EventClasses: u8 {
        /// Pointer press/move/release.
        const POINTER = 0b0000_0001;
        /// Touch start/move/end.
        const TOUCH = 0b0000_0010;
        /// Wheel/scroll.
        const WHEEL = 0b0000_0100;
        /// Keyboard.
        const KEY = 0b0000_1000;
        /// Terminal resize.
        const RESIZE = 0b0001_0000;
    }
}

impl EventClasses {
    /// The class an event belongs to.
    #[must_use]
    pub const fn of(event: &Event) -> Self {
        match event {
            Event::Pointer(_) => Self::POINTER,
            Event::Touch(_) => Self::TOUCH,
            Event::Wheel(_) => Self::WHEEL,
            Event::Key(_) => Self::KEY,
            Event::Resize(_) => Self::RESIZE,
        }
    }
}

/// Handle to a single registered subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

/// Registry of a widget's live event subscriptions.
#[derive(Clone, Debug, Default)]
pub struct Subscriptions {
    entries: Vec<(SubscriptionId, EventClasses)>,
    next_id: u32,
    disposed: bool,
}

impl Subscriptions {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in a set of event classes.
    ///
    /// Returns `None` after [`dispose`](Self::dispose): a torn-down widget
    /// cannot re-arm its listeners.
    pub fn subscribe(&mut self, classes: EventClasses) -> Option<SubscriptionId> {
        if self.disposed {
            return None;
        }
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, classes));
        Some(id)
    }

    /// Remove a single subscription. Unknown ids are silent no-ops.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Whether any live subscription matches the event's class.
    #[must_use]
    pub fn accepts(&self, event: &Event) -> bool {
        let class = EventClasses::of(event);
        self.entries
            .iter()
            .any(|(_, classes)| classes.intersects(class))
    }

    /// Remove every subscription atomically and refuse new ones.
    pub fn dispose(&mut self) {
        self.entries.clear();
        self.disposed = true;
    }

    /// Whether [`dispose`](Self::dispose) has run.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no subscriptions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keyboard::{KeyCode, KeyEvent};
    use crate::input::pointer::{PointerEvent, TouchEvent, WheelEvent};

    #[test]
    fn test_subscribe_and_accept() {
        let mut subs = Subscriptions::new();
        subs.subscribe(EventClasses::POINTER | EventClasses::WHEEL)
            .unwrap();

        assert!(subs.accepts(&PointerEvent::press(0.0, 0.0).into()));
        assert!(subs.accepts(&WheelEvent::up().into()));
        assert!(!subs.accepts(&KeyEvent::key(KeyCode::Esc).into()));
        assert!(!subs.accepts(&TouchEvent::start(0.0, 0.0).into()));
    }

    #[test]
    fn test_unsubscribe_single() {
        let mut subs = Subscriptions::new();
        let pointer = subs.subscribe(EventClasses::POINTER).unwrap();
        subs.subscribe(EventClasses::KEY).unwrap();

        subs.unsubscribe(pointer);
        assert!(!subs.accepts(&PointerEvent::press(0.0, 0.0).into()));
        assert!(subs.accepts(&KeyEvent::key(KeyCode::Esc).into()));
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn test_dispose_clears_everything() {
        let mut subs = Subscriptions::new();
        subs.subscribe(EventClasses::all()).unwrap();
        assert!(!subs.is_empty());

        subs.dispose();
        assert!(subs.is_empty());
        assert!(subs.is_disposed());
        assert!(!subs.accepts(&WheelEvent::up().into()));
        // Disposed registries refuse new subscriptions.
        assert!(subs.subscribe(EventClasses::KEY).is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut subs = Subscriptions::new();
        let a = subs.subscribe(EventClasses::KEY).unwrap();
        let b = subs.subscribe(EventClasses::KEY).unwrap();
        assert_ne!(a, b);
    }
}
