//! Input event types, parsing, and subscription plumbing.

pub mod event;
pub mod keyboard;
pub mod parser;
pub mod pointer;
pub mod subscriptions;

pub use event::{Event, ResizeEvent};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use parser::{InputParser, ParseError};
pub use pointer::{PointerEvent, PointerPhase, TouchEvent, WheelEvent};
pub use subscriptions::{EventClasses, SubscriptionId, Subscriptions};
