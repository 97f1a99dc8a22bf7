//! The component library: stateful widgets that draw into a [`Surface`].
//!
//! Every widget owns its state, its event subscriptions, and nothing else.
//! There is no shared mutable state between instances; the host event loop
//! feeds events and ticks, then asks each widget to render into a rectangle.

pub mod button;
pub mod card;
pub mod carousel;
pub mod dropdown;
pub mod form;
pub mod hero;
pub mod modal;
pub mod table;
pub mod tabs;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use carousel::{
    Carousel3D, CarouselConfig, CarouselItem, InputProfile, MediaKind, Orientation, Phase,
    Velocity,
};
pub use dropdown::Dropdown;
pub use form::{FormField, FormStep, MultiStepForm};
pub use hero::{HeroEffect, HeroText};
pub use modal::Modal;
pub use table::{Column, DataTable, SortDirection};
pub use tabs::Tabs;

use crate::geometry::Rect;
use crate::input::Event;
use crate::surface::Surface;
use std::time::Duration;

/// Viewport dimensions in cells, used for input-profile selection and
/// clamping draggable widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Viewport {
    /// Columns below which a viewport counts as compact (the terminal
    /// analog of a mobile-sized browser window).
    pub const COMPACT_COLS: u16 = 100;

    /// Create a new viewport.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether this viewport is compact.
    ///
    /// Compact viewports select the mobile pointer profile and disable
    /// wheel-driven radius changes on the carousel.
    #[must_use]
    pub const fn is_compact(self) -> bool {
        self.width < Self::COMPACT_COLS
    }

    /// The viewport as a cell rectangle.
    #[must_use]
    pub const fn rect(self) -> Rect {
        Rect::new(0, 0, self.width as u32, self.height as u32)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

/// Common widget behavior.
pub trait Widget {
    /// Deliver an input event. Widgets ignore events they did not
    /// subscribe to and events outside their layout area.
    fn handle_event(&mut self, event: &Event, viewport: Viewport);

    /// Advance time-driven state (animations, momentum). Default: no-op.
    fn tick(&mut self, dt: Duration) {
        let _ = dt;
    }

    /// Render into `area` on the surface. An empty area is a silent no-op.
    fn render(&self, surface: &mut Surface, area: Rect);
}
