//! Property tests for carousel interaction invariants.

use chadcn_tui::widgets::carousel::{
    MOMENTUM_TICK, PITCH_MAX, PITCH_MIN, RADIUS_MAX, RADIUS_MIN,
};
use chadcn_tui::{
    Carousel3D, CarouselConfig, CarouselItem, Phase, PointerEvent, TouchEvent, Viewport,
    WheelEvent, Widget,
};
use proptest::prelude::*;

fn items(n: usize) -> Vec<CarouselItem> {
    (0..n).map(|i| CarouselItem::image(format!("{i}.jpg"))).collect()
}

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (20u16..=250, 10u16..=80).prop_map(|(w, h)| Viewport::new(w, h))
}

fn displacement() -> impl Strategy<Value = (f32, f32)> {
    (-2_000.0f32..2_000.0, -2_000.0f32..2_000.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Pitch never escapes its bounds no matter the drag path.
    #[test]
    fn pitch_always_in_bounds(
        moves in prop::collection::vec(displacement(), 1..40),
        viewport in viewport_strategy(),
    ) {
        let mut c = Carousel3D::new(items(6), CarouselConfig::default());
        c.pointer(PointerEvent::press(0.0, 0.0), viewport);
        let (mut x, mut y) = (0.0f32, 0.0f32);
        for (dx, dy) in moves {
            x += dx;
            y += dy;
            c.pointer(PointerEvent::move_to(x, y), viewport);
            let pitch = c.orientation().pitch;
            prop_assert!((PITCH_MIN..=PITCH_MAX).contains(&pitch));
        }
    }

    /// Radius stays clamped through any wheel sequence, and compact
    /// viewports never change it at all.
    #[test]
    fn radius_always_in_bounds(
        deltas in prop::collection::vec(-50.0f32..50.0, 1..60),
        viewport in viewport_strategy(),
    ) {
        let mut c = Carousel3D::new(items(5), CarouselConfig::default());
        let initial = c.radius();
        for delta in deltas {
            c.wheel(WheelEvent::new(delta), viewport);
            prop_assert!((RADIUS_MIN..=RADIUS_MAX).contains(&c.radius()));
        }
        if viewport.is_compact() {
            prop_assert!((c.radius() - initial).abs() < f32::EPSILON);
        }
    }

    /// Momentum velocity magnitude never grows between steps and decay
    /// always terminates.
    #[test]
    fn decay_shrinks_and_terminates(
        dx in -500.0f32..500.0,
        dy in -500.0f32..500.0,
    ) {
        let mut c = Carousel3D::new(
            items(4),
            CarouselConfig::default().with_auto_rotate(false),
        );
        c.touch(TouchEvent::start(0.0, 0.0));
        c.touch(TouchEvent::move_to(dx, dy));
        c.touch(TouchEvent::end(dx, dy));

        let mut last = (c.velocity().x.abs(), c.velocity().y.abs());
        let mut steps = 0u32;
        while c.phase() == Phase::Decaying {
            c.tick(MOMENTUM_TICK);
            steps += 1;
            prop_assert!(steps < 10_000, "decay failed to terminate");
            let now = (c.velocity().x.abs(), c.velocity().y.abs());
            prop_assert!(now.0 <= last.0 + 1e-4);
            prop_assert!(now.1 <= last.1 + 1e-4);
            last = now;
        }
    }

    /// Slot angles are a fixed, even partition regardless of interaction.
    #[test]
    fn slot_angles_are_invariant(
        n in 1usize..20,
        dx in -1_000.0f32..1_000.0,
    ) {
        let mut c = Carousel3D::new(items(n), CarouselConfig::default());
        let before: Vec<f32> = (0..n).map(|i| c.slot_angle(i)).collect();

        c.touch(TouchEvent::start(0.0, 0.0));
        c.touch(TouchEvent::move_to(dx, 0.0));
        c.touch(TouchEvent::end(dx, 0.0));

        let step = 360.0 / n as f32;
        for (i, angle) in before.iter().enumerate() {
            prop_assert!((angle - i as f32 * step).abs() < 1e-3);
            prop_assert!((c.slot_angle(i) - angle).abs() < f32::EPSILON);
        }
    }
}
