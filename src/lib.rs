//! `ChadCn` UI - terminal component library
//!
//! Interactive widgets rendered on a cell grid: a 3D media carousel with
//! drag, momentum, and auto-rotation at the center, plus tables, forms,
//! modals, dropdowns, tabs, buttons, cards, and animated hero text. A
//! documentation registry pairs each widget with a prop table and a
//! copy-pasteable usage snippet for the showcase binary.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(dead_code)] // Public API functions not yet used internally
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for color math
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow widgets::FormField etc
#![allow(clippy::struct_excessive_bools)] // Terminal state needs multiple flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::format_push_string)] // format! with push_str is fine
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::branches_sharing_code)] // Code clarity over DRY in branching
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod ansi;
pub mod color;
pub mod docs;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod style;
pub mod surface;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export core types at crate root
pub use color::Rgba;
pub use docs::{ComponentDoc, PropDoc};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use geometry::{Point, Rect};
pub use renderer::{Renderer, RendererOptions};
pub use style::{Style, TextAttributes};
pub use surface::{Cell, CellPatch, Surface};

// Re-export input types
pub use input::{
    Event, InputParser, KeyCode, KeyEvent, KeyModifiers, PointerEvent, PointerPhase,
    SubscriptionId, Subscriptions, TouchEvent, WheelEvent,
};

// Re-export widget types
pub use widgets::{
    Button, ButtonVariant, Card, Carousel3D, CarouselConfig, CarouselItem, Column, DataTable,
    Dropdown, FormField, FormStep, HeroEffect, HeroText, InputProfile, MediaKind, Modal,
    MultiStepForm, Orientation, Phase, SortDirection, Tabs, Velocity, Viewport, Widget,
};
