//! 3D carousel with drag, momentum, and auto-rotation.
//!
//! The carousel arranges media items on a cylinder: item `i` of `n` sits at
//! a fixed angular slot `i * 360/n` degrees, pushed `radius` units along Z.
//! Dragging accumulates yaw (horizontal) and pitch (vertical, clamped to a
//! half turn); releasing hands the last observed displacement to a momentum
//! phase that decays it geometrically at ~60 Hz until it rests. When nothing
//! else is happening, an auto-rotation advances yaw at a configured signed
//! speed. Auto-rotation is paused during drag and momentum, never reset: it
//! resumes from the angle where it froze.
//!
//! Pointer and touch input carry different sensitivity and decay tunings.
//! The asymmetry is intentional per-modality tuning and is kept visible as
//! named [`InputProfile`] constants instead of inline numbers.

use crate::event::emit_event;
use crate::geometry::{Point, Rect, normalize_deg, project_slot};
use crate::input::{
    Event, EventClasses, PointerEvent, PointerPhase, Subscriptions, TouchEvent, WheelEvent,
};
use crate::style::Style;
use crate::surface::Surface;
use crate::theme;
use crate::widgets::{Viewport, Widget};
use std::time::Duration;

/// Lower pitch bound in degrees.
pub const PITCH_MIN: f32 = 0.0;
/// Upper pitch bound in degrees.
pub const PITCH_MAX: f32 = 180.0;
/// Pitch on creation and after reset.
pub const DEFAULT_PITCH: f32 = 10.0;
/// Minimum radius.
pub const RADIUS_MIN: f32 = 120.0;
/// Maximum radius.
pub const RADIUS_MAX: f32 = 400.0;
/// Momentum step period (~60 Hz).
pub const MOMENTUM_TICK: Duration = Duration::from_millis(17);
/// Velocity magnitude below which momentum stops, per axis.
pub const REST_THRESHOLD: f32 = 0.5;
/// Radius change per wheel notch.
pub const WHEEL_RADIUS_GAIN: f32 = 15.0;
/// Duration of the per-item radius transition.
pub const RADIUS_TRANSITION_MS: f32 = 300.0;

/// Per-input-modality tuning: drag sensitivity and momentum decay factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputProfile {
    /// Degrees of rotation per unit of displacement.
    pub sensitivity: f32,
    /// Velocity multiplier applied each momentum step, in (0, 1).
    pub decay: f32,
}

impl InputProfile {
    /// Touch input.
    pub const TOUCH: Self = Self {
        sensitivity: 0.08,
        decay: 0.90,
    };

    /// Pointer input on a regular viewport.
    pub const POINTER_DESKTOP: Self = Self {
        sensitivity: 0.10,
        decay: 0.95,
    };

    /// Pointer input on a compact viewport.
    pub const POINTER_MOBILE: Self = Self {
        sensitivity: 0.05,
        decay: 0.95,
    };

    /// Pointer profile for a viewport.
    #[must_use]
    pub const fn pointer_for(viewport: Viewport) -> Self {
        if viewport.is_compact() {
            Self::POINTER_MOBILE
        } else {
            Self::POINTER_DESKTOP
        }
    }
}

/// Accumulated container rotation in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    /// Horizontal rotation, unbounded (display wraps modulo 360).
    pub yaw: f32,
    /// Vertical tilt, clamped to [`PITCH_MIN`]..=[`PITCH_MAX`].
    pub pitch: f32,
}

impl Orientation {
    /// Orientation on creation and after reset.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            yaw: 0.0,
            pitch: DEFAULT_PITCH,
        }
    }

    /// Apply a displacement scaled by sensitivity; pitch saturates silently.
    pub fn apply(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw += dx * sensitivity;
        self.pitch = (self.pitch + dy * sensitivity).clamp(PITCH_MIN, PITCH_MAX);
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::initial()
    }
}

/// Last observed per-event displacement, the seed for momentum.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    /// Zero velocity.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Multiply both components by a decay factor.
    pub fn decay(&mut self, factor: f32) {
        self.x *= factor;
        self.y *= factor;
    }

    /// Whether both components are below the rest threshold in magnitude.
    #[must_use]
    pub fn is_resting(self, threshold: f32) -> bool {
        self.x.abs() < threshold && self.y.abs() < threshold
    }
}

/// Interaction phase of the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No contact; auto-rotation free-runs when enabled.
    AutoRotating,
    /// A drag session is active.
    Dragging,
    /// Momentum decay is running after a release.
    Decaying,
}

/// Kind of media an item displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// One carousel item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselItem {
    /// Media source (URL or path), also used as the rendered label.
    pub source: String,
    /// Media kind.
    pub kind: MediaKind,
}

impl CarouselItem {
    /// Create an image item.
    #[must_use]
    pub fn image(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: MediaKind::Image,
        }
    }

    /// Create a video item.
    #[must_use]
    pub fn video(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: MediaKind::Video,
        }
    }
}

/// Carousel configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Advance yaw continuously while idle.
    pub auto_rotate: bool,
    /// Auto-rotation speed in degrees per second; the sign is the
    /// direction. Negative by default (reverse).
    pub rotate_speed: f32,
    /// Initial radius, clamped to [`RADIUS_MIN`]..=[`RADIUS_MAX`].
    pub radius: f32,
    /// Item width in cells when rendered at full scale.
    pub item_width: u32,
    /// Item height in cells when rendered at full scale.
    pub item_height: u32,
    /// Per-index step of the radius-transition stagger, in milliseconds.
    pub stagger_step_ms: f32,
    /// Explicit per-item transition delay overriding the stagger formula.
    pub explicit_delay_ms: Option<f32>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            rotate_speed: -12.0,
            radius: 240.0,
            item_width: 16,
            item_height: 7,
            stagger_step_ms: 60.0,
            explicit_delay_ms: None,
        }
    }
}

impl CarouselConfig {
    /// Set auto-rotation on or off.
    #[must_use]
    pub const fn with_auto_rotate(mut self, enabled: bool) -> Self {
        self.auto_rotate = enabled;
        self
    }

    /// Set the signed auto-rotation speed in degrees per second.
    #[must_use]
    pub const fn with_rotate_speed(mut self, speed: f32) -> Self {
        self.rotate_speed = speed;
        self
    }

    /// Set the radius (clamped when the carousel is built).
    #[must_use]
    pub const fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set rendered item dimensions in cells.
    #[must_use]
    pub const fn with_item_size(mut self, width: u32, height: u32) -> Self {
        self.item_width = width;
        self.item_height = height;
        self
    }

    /// Override the stagger formula with a fixed per-item delay.
    #[must_use]
    pub const fn with_explicit_delay_ms(mut self, delay: f32) -> Self {
        self.explicit_delay_ms = Some(delay);
        self
    }
}

/// A single item's placement: fixed slot angle plus current Z push.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    /// Item index.
    pub index: usize,
    /// Fixed angular slot in degrees.
    pub angle_deg: f32,
    /// Current Z translation for this item (mid-transition items lag).
    pub radius: f32,
    /// Transition delay applied to this item on the last radius change.
    pub delay_ms: f32,
}

/// In-flight momentum decay. At most one exists per carousel; a new drag
/// replaces it with `None` before anything else happens.
#[derive(Clone, Copy, Debug)]
struct MomentumTask {
    velocity: Velocity,
    profile: InputProfile,
    accumulator: Duration,
}

/// Per-item staggered radius transition after a wheel change.
#[derive(Clone, Copy, Debug)]
struct RadiusTransition {
    from: f32,
    to: f32,
    elapsed_ms: f32,
}

/// The 3D carousel widget.
#[derive(Clone, Debug)]
pub struct Carousel3D {
    config: CarouselConfig,
    items: Vec<CarouselItem>,
    orientation: Orientation,
    velocity: Velocity,
    radius: f32,
    phase: Phase,
    /// Frozen-while-interacting auto-rotation angle.
    auto_yaw: f32,
    last_point: Option<Point>,
    active_profile: InputProfile,
    momentum: Option<MomentumTask>,
    transition: Option<RadiusTransition>,
    subscriptions: Subscriptions,
}

impl Carousel3D {
    /// Create a carousel over an ordered item set.
    #[must_use]
    pub fn new(items: Vec<CarouselItem>, config: CarouselConfig) -> Self {
        let radius = config.radius.clamp(RADIUS_MIN, RADIUS_MAX);
        let mut subscriptions = Subscriptions::new();
        let _ = subscriptions.subscribe(
            EventClasses::POINTER | EventClasses::TOUCH | EventClasses::WHEEL,
        );
        Self {
            config,
            items,
            orientation: Orientation::initial(),
            velocity: Velocity::ZERO,
            radius,
            phase: Phase::AutoRotating,
            auto_yaw: 0.0,
            last_point: None,
            active_profile: InputProfile::POINTER_DESKTOP,
            momentum: None,
            transition: None,
            subscriptions,
        }
    }

    /// Current interaction phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Current velocity.
    #[must_use]
    pub const fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Current (target) radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Frozen-or-running auto-rotation angle.
    #[must_use]
    pub const fn auto_yaw(&self) -> f32 {
        self.auto_yaw
    }

    /// The items.
    #[must_use]
    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    /// The widget's event subscriptions.
    #[must_use]
    pub const fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    /// Container yaw as rendered: accumulated drag yaw plus auto-rotation.
    #[must_use]
    pub fn effective_yaw(&self) -> f32 {
        self.orientation.yaw + self.auto_yaw
    }

    /// Fixed angular slot of item `index`.
    #[must_use]
    pub fn slot_angle(&self, index: usize) -> f32 {
        if self.items.is_empty() {
            return 0.0;
        }
        (index as f32) * (360.0 / self.items.len() as f32)
    }

    /// Transition delay for item `index` on a radius change.
    ///
    /// Falls back to an index-inverse stagger: later slots start first,
    /// earlier slots follow, so the ring settles front to back.
    #[must_use]
    pub fn item_delay_ms(&self, index: usize) -> f32 {
        self.config.explicit_delay_ms.unwrap_or_else(|| {
            let count = self.items.len();
            (count.saturating_sub(index)) as f32 * self.config.stagger_step_ms
        })
    }

    /// Current placement of every item.
    #[must_use]
    pub fn item_transforms(&self) -> Vec<ItemTransform> {
        (0..self.items.len())
            .map(|index| ItemTransform {
                index,
                angle_deg: self.slot_angle(index),
                radius: self.item_radius(index),
                delay_ms: self.item_delay_ms(index),
            })
            .collect()
    }

    /// Z push of item `index`, honoring an in-flight staggered transition.
    #[must_use]
    pub fn item_radius(&self, index: usize) -> f32 {
        match self.transition {
            None => self.radius,
            Some(t) => {
                let progress =
                    ((t.elapsed_ms - self.item_delay_ms(index)) / RADIUS_TRANSITION_MS)
                        .clamp(0.0, 1.0);
                (t.to - t.from).mul_add(progress, t.from)
            }
        }
    }

    /// Restore initial orientation, velocity, and radius; momentum is
    /// discarded.
    pub fn reset(&mut self) {
        self.orientation = Orientation::initial();
        self.velocity = Velocity::ZERO;
        self.radius = self.config.radius.clamp(RADIUS_MIN, RADIUS_MAX);
        self.auto_yaw = 0.0;
        self.momentum = None;
        self.transition = None;
        self.last_point = None;
        self.phase = Phase::AutoRotating;
        emit_event("carousel.reset", "");
    }

    /// Tear down subscriptions and cancel any pending momentum.
    pub fn shutdown(&mut self) {
        self.momentum = None;
        self.subscriptions.dispose();
    }

    /// Handle a pointer event. The profile is picked from the viewport at
    /// press time and kept for the whole drag session.
    pub fn pointer(&mut self, event: PointerEvent, viewport: Viewport) {
        let profile = InputProfile::pointer_for(viewport);
        match event.phase {
            PointerPhase::Press => self.begin_drag(event.position(), profile),
            PointerPhase::Move => self.drag_to(event.position()),
            PointerPhase::Release => self.end_drag(),
        }
    }

    /// Handle a touch event. Touch always uses [`InputProfile::TOUCH`].
    pub fn touch(&mut self, event: TouchEvent) {
        match event.phase {
            PointerPhase::Press => self.begin_drag(event.position(), InputProfile::TOUCH),
            PointerPhase::Move => self.drag_to(event.position()),
            PointerPhase::Release => self.end_drag(),
        }
    }

    /// Handle a wheel event: adjust radius. Ignored on compact viewports.
    pub fn wheel(&mut self, event: WheelEvent, viewport: Viewport) {
        if viewport.is_compact() || self.items.is_empty() {
            return;
        }
        let from = self.radius;
        let to = (from + event.delta * WHEEL_RADIUS_GAIN).clamp(RADIUS_MIN, RADIUS_MAX);
        if (to - from).abs() < f32::EPSILON {
            return;
        }
        // Angles never change here; each item re-translates along Z on its
        // own staggered schedule.
        let start = self.transition.map_or(from, |t| t.from);
        self.radius = to;
        self.transition = Some(RadiusTransition {
            from: start,
            to,
            elapsed_ms: 0.0,
        });
        emit_event("carousel.radius", &format!("{to:.0}"));
    }

    fn begin_drag(&mut self, point: Point, profile: InputProfile) {
        // A new press always wins: the momentum task dies before the drag
        // session starts, so velocity is never applied twice.
        self.momentum = None;
        self.phase = Phase::Dragging;
        self.velocity = Velocity::ZERO;
        self.last_point = Some(point);
        self.active_profile = profile;
        emit_event("carousel.drag_start", "");
    }

    fn drag_to(&mut self, point: Point) {
        if self.phase != Phase::Dragging {
            return;
        }
        let Some(last) = self.last_point else {
            self.last_point = Some(point);
            return;
        };
        let (dx, dy) = point.delta_from(last);
        self.orientation
            .apply(dx, dy, self.active_profile.sensitivity);
        self.velocity = Velocity { x: dx, y: dy };
        self.last_point = Some(point);
    }

    fn end_drag(&mut self) {
        if self.phase != Phase::Dragging {
            return;
        }
        self.last_point = None;
        self.phase = Phase::Decaying;
        self.momentum = Some(MomentumTask {
            velocity: self.velocity,
            profile: self.active_profile,
            accumulator: Duration::ZERO,
        });
        emit_event("carousel.drag_end", "");
    }

    /// Advance time-driven state: auto-rotation, momentum, transitions.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(t) = &mut self.transition {
            t.elapsed_ms += dt.as_secs_f32() * 1000.0;
            let longest = self
                .config
                .explicit_delay_ms
                .unwrap_or_else(|| self.items.len() as f32 * self.config.stagger_step_ms);
            if t.elapsed_ms >= longest + RADIUS_TRANSITION_MS {
                self.transition = None;
            }
        }

        match self.phase {
            Phase::AutoRotating => {
                if self.config.auto_rotate {
                    self.auto_yaw += self.config.rotate_speed * dt.as_secs_f32();
                }
            }
            Phase::Dragging => {}
            Phase::Decaying => self.step_momentum(dt),
        }
    }

    fn step_momentum(&mut self, dt: Duration) {
        let Some(mut task) = self.momentum.take() else {
            // Defensive: no task means the phase is stale.
            self.phase = Phase::AutoRotating;
            return;
        };
        task.accumulator += dt;

        while task.accumulator >= MOMENTUM_TICK {
            task.accumulator -= MOMENTUM_TICK;
            task.velocity.decay(task.profile.decay);
            self.orientation
                .apply(task.velocity.x, task.velocity.y, task.profile.sensitivity);
            self.velocity = task.velocity;

            if task.velocity.is_resting(REST_THRESHOLD) {
                // Auto-rotation resumes from its frozen angle.
                self.phase = Phase::AutoRotating;
                emit_event("carousel.decay_end", "");
                return;
            }
        }
        self.momentum = Some(task);
    }
}

impl Widget for Carousel3D {
    fn handle_event(&mut self, event: &Event, viewport: Viewport) {
        if !self.subscriptions.accepts(event) {
            return;
        }
        match event {
            Event::Pointer(e) => self.pointer(*e, viewport),
            Event::Touch(e) => self.touch(*e),
            Event::Wheel(e) => self.wheel(*e, viewport),
            Event::Key(_) | Event::Resize(_) => {}
        }
    }

    fn tick(&mut self, dt: Duration) {
        self.advance(dt);
    }

    fn render(&self, surface: &mut Surface, area: Rect) {
        if area.is_empty() || self.items.is_empty() {
            return;
        }

        // Input-space radius maps to cells: terminals are much coarser than
        // pixels, and rows are about twice as tall as columns are wide.
        const CELLS_PER_UNIT_X: f32 = 10.0;
        const CELLS_PER_UNIT_Y: f32 = 24.0;

        let (center_x, center_y) = area.center();
        let yaw = self.effective_yaw();

        let mut placed: Vec<(usize, crate::geometry::Projected)> = (0..self.items.len())
            .map(|i| {
                let angle = normalize_deg(self.slot_angle(i) + yaw);
                (i, project_slot(angle, self.orientation.pitch, self.item_radius(i)))
            })
            .collect();
        // Far items first so near items paint over them.
        placed.sort_by(|a, b| a.1.depth.total_cmp(&b.1.depth));

        for (index, projected) in placed {
            let item = &self.items[index];
            let width = ((self.config.item_width as f32 * projected.scale) as u32).max(6);
            let height = ((self.config.item_height as f32 * projected.scale) as u32).max(3);

            let cx = center_x as f32 + projected.offset_x / CELLS_PER_UNIT_X;
            let cy = center_y as f32 + projected.offset_y / CELLS_PER_UNIT_Y;
            let x = (cx - width as f32 / 2.0).round();
            let y = (cy - height as f32 / 2.0).round();
            if x < area.x as f32 || y < area.y as f32 {
                continue;
            }
            let rect = Rect::new(x as u32, y as u32, width, height);
            if rect.right() > area.right() || rect.bottom() > area.bottom() {
                continue;
            }

            // Depth shading: far items sink toward the background.
            let fade = (1.0 - projected.depth) * 0.4;
            let border = theme::PRIMARY.lerp(theme::BACKGROUND, fade);
            let text = theme::TEXT.lerp(theme::BACKGROUND, fade);

            surface.fill_rect(rect, theme::SURFACE.lerp(theme::BACKGROUND, fade));
            surface.draw_box(rect, Style::fg(border));

            let inner = rect.inset(1);
            if !inner.is_empty() {
                let mut label: String = match item.kind {
                    MediaKind::Image => String::new(),
                    MediaKind::Video => "▶ ".to_string(),
                };
                label.push_str(&item.source);
                label.truncate(inner.width as usize);
                surface.draw_text(inner.x, inner.y, &label, Style::fg(text));
            }
        }
    }
}

impl Drop for Carousel3D {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    fn items(n: usize) -> Vec<CarouselItem> {
        (0..n)
            .map(|i| CarouselItem::image(format!("img-{i}.jpg")))
            .collect()
    }

    fn desktop() -> Viewport {
        Viewport::new(160, 48)
    }

    fn compact() -> Viewport {
        Viewport::new(80, 24)
    }

    fn carousel(n: usize) -> Carousel3D {
        Carousel3D::new(items(n), CarouselConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let c = carousel(5);
        assert_eq!(c.phase(), Phase::AutoRotating);
        assert_eq!(c.orientation().yaw, 0.0);
        assert_eq!(c.orientation().pitch, DEFAULT_PITCH);
        assert_eq!(c.velocity(), Velocity::ZERO);
        assert_eq!(c.radius(), 240.0);
    }

    #[test]
    fn test_config_radius_clamped_on_build() {
        let c = Carousel3D::new(items(3), CarouselConfig::default().with_radius(1000.0));
        assert_eq!(c.radius(), RADIUS_MAX);
        let c = Carousel3D::new(items(3), CarouselConfig::default().with_radius(10.0));
        assert_eq!(c.radius(), RADIUS_MIN);
    }

    #[test]
    fn test_slot_angles_seven_items() {
        let c = carousel(7);
        let step = 360.0 / 7.0;
        for i in 0..7 {
            assert!((c.slot_angle(i) - i as f32 * step).abs() < 1e-4);
        }
        // The documented layout: {0, 51.4, 102.9, 154.3, 205.7, 257.1, 308.6}.
        assert!((c.slot_angle(1) - 51.4).abs() < 0.1);
        assert!((c.slot_angle(6) - 308.6).abs() < 0.1);
    }

    #[test]
    fn test_drag_yaw_scenario() {
        // +100 horizontal displacement at desktop sensitivity 0.1 = +10 deg.
        let mut c = carousel(7);
        c.pointer(PointerEvent::press(0.0, 0.0), desktop());
        c.pointer(PointerEvent::move_to(100.0, 0.0), desktop());
        assert!((c.orientation().yaw - 10.0).abs() < 1e-4);
        // Slot angles are untouched; only the container rotates.
        assert_eq!(c.slot_angle(1), 360.0 / 7.0);
    }

    #[test]
    fn test_mobile_pointer_sensitivity() {
        let mut c = carousel(4);
        c.pointer(PointerEvent::press(0.0, 0.0), compact());
        c.pointer(PointerEvent::move_to(100.0, 0.0), compact());
        assert!((c.orientation().yaw - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_touch_sensitivity() {
        let mut c = carousel(4);
        c.touch(TouchEvent::start(0.0, 0.0));
        c.touch(TouchEvent::move_to(100.0, 0.0));
        assert!((c.orientation().yaw - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_pitch_clamps_silently() {
        let mut c = carousel(4);
        c.pointer(PointerEvent::press(0.0, 0.0), desktop());
        // Huge upward drag: pitch saturates at the lower bound.
        c.pointer(PointerEvent::move_to(0.0, -10_000.0), desktop());
        assert_eq!(c.orientation().pitch, PITCH_MIN);
        // And back down far past the top.
        c.pointer(PointerEvent::move_to(0.0, 90_000.0), desktop());
        assert_eq!(c.orientation().pitch, PITCH_MAX);
    }

    #[test]
    fn test_release_starts_momentum() {
        let mut c = carousel(4);
        c.pointer(PointerEvent::press(0.0, 0.0), desktop());
        c.pointer(PointerEvent::move_to(40.0, 0.0), desktop());
        c.pointer(PointerEvent::release(40.0, 0.0), desktop());
        assert_eq!(c.phase(), Phase::Decaying);

        let yaw_before = c.orientation().yaw;
        c.advance(MOMENTUM_TICK);
        assert!(c.orientation().yaw > yaw_before);
    }

    #[test]
    fn test_momentum_decays_to_rest_and_resumes_auto() {
        let mut c = carousel(4);
        c.pointer(PointerEvent::press(0.0, 0.0), desktop());
        c.pointer(PointerEvent::move_to(30.0, 0.0), desktop());
        c.pointer(PointerEvent::release(30.0, 0.0), desktop());

        let auto_before = c.auto_yaw();
        for _ in 0..600 {
            c.advance(MOMENTUM_TICK);
            if c.phase() == Phase::AutoRotating {
                break;
            }
        }
        assert_eq!(c.phase(), Phase::AutoRotating);
        assert!(c.velocity().is_resting(REST_THRESHOLD));
        // Paused, not reset: the auto angle did not move during decay...
        assert_eq!(c.auto_yaw(), auto_before);
        // ...and keeps accumulating afterward.
        c.advance(Duration::from_secs(1));
        assert!(c.auto_yaw() != auto_before);
    }

    #[test]
    fn test_velocity_magnitude_never_grows() {
        let mut c = carousel(4);
        c.pointer(PointerEvent::press(0.0, 0.0), desktop());
        c.pointer(PointerEvent::move_to(50.0, 20.0), desktop());
        c.pointer(PointerEvent::release(50.0, 20.0), desktop());

        let mut last = (c.velocity().x.abs(), c.velocity().y.abs());
        while c.phase() == Phase::Decaying {
            c.advance(MOMENTUM_TICK);
            let now = (c.velocity().x.abs(), c.velocity().y.abs());
            assert!(now.0 <= last.0 + 1e-6);
            assert!(now.1 <= last.1 + 1e-6);
            // Sign never flips spontaneously.
            assert!(c.velocity().x >= 0.0);
            assert!(c.velocity().y >= 0.0);
            last = now;
        }
    }

    #[test]
    fn test_new_drag_cancels_momentum() {
        let mut c = carousel(4);
        c.pointer(PointerEvent::press(0.0, 0.0), desktop());
        c.pointer(PointerEvent::move_to(80.0, 0.0), desktop());
        c.pointer(PointerEvent::release(80.0, 0.0), desktop());
        assert_eq!(c.phase(), Phase::Decaying);

        c.pointer(PointerEvent::press(0.0, 0.0), desktop());
        assert_eq!(c.phase(), Phase::Dragging);
        assert_eq!(c.velocity(), Velocity::ZERO);

        // Ticking during the new drag must not apply the old momentum.
        let yaw = c.orientation().yaw;
        c.advance(Duration::from_millis(500));
        assert_eq!(c.orientation().yaw, yaw);
    }

    #[test]
    fn test_auto_rotation_direction_and_pause() {
        let mut c = Carousel3D::new(
            items(3),
            CarouselConfig::default().with_rotate_speed(-12.0),
        );
        c.advance(Duration::from_secs(1));
        assert!((c.auto_yaw() + 12.0).abs() < 1e-3);

        // Paused while dragging.
        c.pointer(PointerEvent::press(0.0, 0.0), desktop());
        let frozen = c.auto_yaw();
        c.advance(Duration::from_secs(1));
        assert_eq!(c.auto_yaw(), frozen);
    }

    #[test]
    fn test_auto_rotate_disabled() {
        let mut c = Carousel3D::new(items(3), CarouselConfig::default().with_auto_rotate(false));
        c.advance(Duration::from_secs(2));
        assert_eq!(c.auto_yaw(), 0.0);
    }

    #[test]
    fn test_wheel_adjusts_and_clamps_radius() {
        let mut c = carousel(4);
        c.wheel(WheelEvent::new(4.0), desktop());
        assert_eq!(c.radius(), 300.0);

        c.wheel(WheelEvent::new(100.0), desktop());
        assert_eq!(c.radius(), RADIUS_MAX);

        c.wheel(WheelEvent::new(-1000.0), desktop());
        assert_eq!(c.radius(), RADIUS_MIN);
    }

    #[test]
    fn test_wheel_ignored_on_compact_viewport() {
        let mut c = carousel(4);
        c.wheel(WheelEvent::new(4.0), compact());
        assert_eq!(c.radius(), 240.0);
    }

    #[test]
    fn test_radius_transition_staggers_items() {
        let mut c = carousel(4);
        c.wheel(WheelEvent::up(), desktop());
        // Transition just started: every item still shows the old radius.
        for i in 0..4 {
            assert_eq!(c.item_radius(i), 240.0);
        }
        // Item 3 has the shortest delay (index-inverse stagger) so it moves
        // before item 0.
        c.advance(Duration::from_millis(120));
        assert!(c.item_radius(3) > c.item_radius(0));

        // Eventually everything lands on the new radius.
        c.advance(Duration::from_secs(2));
        for i in 0..4 {
            assert_eq!(c.item_radius(i), 255.0);
        }
    }

    #[test]
    fn test_stagger_formula() {
        let c = carousel(5);
        assert_eq!(c.item_delay_ms(0), 5.0 * 60.0);
        assert_eq!(c.item_delay_ms(4), 60.0);

        let c = Carousel3D::new(items(5), CarouselConfig::default().with_explicit_delay_ms(80.0));
        assert_eq!(c.item_delay_ms(0), 80.0);
        assert_eq!(c.item_delay_ms(4), 80.0);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut c = carousel(4);
        c.pointer(PointerEvent::press(0.0, 0.0), desktop());
        c.pointer(PointerEvent::move_to(200.0, 50.0), desktop());
        c.pointer(PointerEvent::release(200.0, 50.0), desktop());
        c.wheel(WheelEvent::up(), desktop());
        c.reset();
        assert_eq!(c.orientation(), Orientation::initial());
        assert_eq!(c.velocity(), Velocity::ZERO);
        assert_eq!(c.phase(), Phase::AutoRotating);
        assert_eq!(c.auto_yaw(), 0.0);
        assert_eq!(c.radius(), 240.0);
    }

    #[test]
    fn test_move_without_press_is_noop() {
        let mut c = carousel(4);
        c.pointer(PointerEvent::move_to(100.0, 100.0), desktop());
        assert_eq!(c.orientation(), Orientation::initial());
        c.pointer(PointerEvent::release(0.0, 0.0), desktop());
        assert_eq!(c.phase(), Phase::AutoRotating);
    }

    #[test]
    fn test_empty_items_render_noop() {
        let c = Carousel3D::new(Vec::new(), CarouselConfig::default());
        let mut surface = Surface::new(40, 12).unwrap();
        let before = surface.clone();
        let area = surface.area();
        c.render(&mut surface, area);
        assert_eq!(surface, before);
        assert_eq!(c.item_transforms().len(), 0);
    }

    #[test]
    fn test_empty_area_render_noop() {
        let c = carousel(3);
        let mut surface = Surface::new(40, 12).unwrap();
        let before = surface.clone();
        c.render(&mut surface, Rect::new(0, 0, 0, 0));
        assert_eq!(surface, before);
    }

    #[test]
    fn test_render_draws_items() {
        let c = carousel(3);
        let mut surface = Surface::new(80, 24).unwrap();
        let before = surface.clone();
        let area = surface.area();
        c.render(&mut surface, area);
        assert_ne!(surface, before);
    }

    #[test]
    fn test_shutdown_disposes_subscriptions() {
        let mut c = carousel(3);
        assert!(!c.subscriptions().is_disposed());
        c.shutdown();
        assert!(c.subscriptions().is_disposed());

        // Events after shutdown are no-ops.
        c.handle_event(&PointerEvent::press(0.0, 0.0).into(), desktop());
        assert_eq!(c.phase(), Phase::AutoRotating);
    }

    #[test]
    fn test_video_item_constructor() {
        let item = CarouselItem::video("clip.mp4");
        assert_eq!(item.kind, MediaKind::Video);
        assert_eq!(item.source, "clip.mp4");
    }
}
