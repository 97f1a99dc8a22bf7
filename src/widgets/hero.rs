//! Hero text with time-driven per-grapheme effects.
//!
//! Effects operate on grapheme clusters, not bytes or chars, so combining
//! marks and emoji travel as one unit. The widget is pure state plus a
//! clock; `tick` advances the clock and `render` projects it.

use crate::geometry::Rect;
use crate::input::Event;
use crate::style::Style;
use crate::surface::Surface;
use crate::theme;
use crate::widgets::{Viewport, Widget};
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Per-grapheme reveal stagger.
const REVEAL_STEP_MS: f32 = 40.0;
/// Wave oscillation period.
const WAVE_PERIOD_MS: f32 = 1200.0;
/// Sweep traversal speed in graphemes per second.
const SWEEP_SPEED: f32 = 12.0;

/// Animation applied to the hero text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroEffect {
    /// Graphemes fade in left to right, then hold.
    Reveal,
    /// Graphemes bob vertically on a phase-offset sine.
    Wave,
    /// A bright highlight sweeps across the text and loops.
    Sweep,
}

/// The hero text widget.
#[derive(Clone, Debug)]
pub struct HeroText {
    text: String,
    effect: HeroEffect,
    elapsed: Duration,
}

impl HeroText {
    #[must_use]
    pub fn new(text: impl Into<String>, effect: HeroEffect) -> Self {
        Self {
            text: text.into(),
            effect,
            elapsed: Duration::ZERO,
        }
    }

    /// The animated text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Elapsed animation time.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Restart the animation.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Number of graphemes revealed so far under the reveal effect.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        let total = self.text.graphemes(true).count();
        let shown = (self.elapsed.as_secs_f32() * 1000.0 / REVEAL_STEP_MS) as usize;
        shown.min(total)
    }
}

impl Widget for HeroText {
    fn handle_event(&mut self, _event: &Event, _viewport: Viewport) {}

    fn tick(&mut self, dt: Duration) {
        self.elapsed += dt;
    }

    fn render(&self, surface: &mut Surface, area: Rect) {
        if area.is_empty() || self.text.is_empty() {
            return;
        }
        let elapsed_ms = self.elapsed.as_secs_f32() * 1000.0;
        let graphemes: Vec<&str> = self.text.graphemes(true).collect();
        let base_y = area.y + area.height / 2;
        let mut x = area.x;

        for (i, grapheme) in graphemes.iter().enumerate() {
            let width = grapheme.width() as u32;
            if x + width > area.right() {
                break;
            }
            let (y, style) = match self.effect {
                HeroEffect::Reveal => {
                    if i >= self.revealed_count() {
                        x += width.max(1);
                        continue;
                    }
                    (base_y, theme::title())
                }
                HeroEffect::Wave => {
                    let phase = elapsed_ms / WAVE_PERIOD_MS * std::f32::consts::TAU
                        + i as f32 * 0.5;
                    let lift = (phase.sin() * (area.height as f32 / 3.0)).round();
                    let y = (base_y as f32 - lift)
                        .clamp(area.y as f32, (area.bottom() - 1) as f32)
                        as u32;
                    (y, Style::fg(theme::PRIMARY).with_bold())
                }
                HeroEffect::Sweep => {
                    let head = (elapsed_ms / 1000.0 * SWEEP_SPEED) as usize
                        % graphemes.len().max(1);
                    let style = if i.abs_diff(head) <= 1 {
                        Style::fg(theme::SECONDARY).with_bold()
                    } else {
                        theme::muted()
                    };
                    (base_y, style)
                }
            };
            surface.draw_text(x, y, grapheme, style);
            x += width.max(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_progresses_with_time() {
        let mut hero = HeroText::new("Hello", HeroEffect::Reveal);
        assert_eq!(hero.revealed_count(), 0);
        hero.tick(Duration::from_millis(80));
        assert_eq!(hero.revealed_count(), 2);
        hero.tick(Duration::from_secs(10));
        assert_eq!(hero.revealed_count(), 5);
    }

    #[test]
    fn test_reveal_counts_graphemes_not_bytes() {
        let mut hero = HeroText::new("a\u{0301}bc", HeroEffect::Reveal);
        hero.tick(Duration::from_secs(5));
        // "a + combining acute" is one grapheme.
        assert_eq!(hero.revealed_count(), 3);
    }

    #[test]
    fn test_restart_rewinds_clock() {
        let mut hero = HeroText::new("Hi", HeroEffect::Reveal);
        hero.tick(Duration::from_secs(1));
        hero.restart();
        assert_eq!(hero.elapsed(), Duration::ZERO);
        assert_eq!(hero.revealed_count(), 0);
    }

    #[test]
    fn test_wave_moves_graphemes_between_frames() {
        let mut hero = HeroText::new("WAVE", HeroEffect::Wave);
        let mut a = Surface::new(20, 7).unwrap();
        let area_a = a.area();
        hero.render(&mut a, area_a);
        hero.tick(Duration::from_millis(300));
        let mut b = Surface::new(20, 7).unwrap();
        let area_b = b.area();
        hero.render(&mut b, area_b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_sweep_loops() {
        let mut hero = HeroText::new("SWEEP", HeroEffect::Sweep);
        // Long enough to wrap the 5-grapheme text several times; must not
        // panic or walk off the end.
        hero.tick(Duration::from_secs(30));
        let mut surface = Surface::new(20, 3).unwrap();
        let area = surface.area();
        hero.render(&mut surface, area);
        assert!(surface.row_text(1).contains('S'));
    }

    #[test]
    fn test_empty_text_render_noop() {
        let hero = HeroText::new("", HeroEffect::Wave);
        let mut surface = Surface::new(10, 3).unwrap();
        let before = surface.clone();
        let area = surface.area();
        hero.render(&mut surface, area);
        assert_eq!(surface, before);
    }
}
