//! Double-buffered presenter with diff-based ANSI output.
//!
//! The renderer keeps two surfaces: a back surface the application draws
//! into and a front surface holding the previous frame. [`Renderer::present`]
//! diffs them and writes only the changed cells, batching consecutive cells
//! that share a style into single SGR runs.
//!
//! A renderer wraps any `Write` target: stdout for the showcase, an
//! in-memory buffer for headless tests and CI smoke runs.

use crate::ansi;
use crate::color::Rgba;
use crate::error::Result;
use crate::style::Style;
use crate::surface::{Cell, Surface};
use std::io::Write;
use std::time::{Duration, Instant};

/// Renderer configuration options.
#[derive(Clone, Copy, Debug)]
pub struct RendererOptions {
    /// Use the alternate screen buffer.
    pub use_alt_screen: bool,
    /// Hide the cursor on start.
    pub hide_cursor: bool,
    /// Enable mouse tracking.
    pub enable_mouse: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            use_alt_screen: true,
            hide_cursor: true,
            enable_mouse: true,
        }
    }
}

/// Headless options: no terminal setup sequences at all.
impl RendererOptions {
    /// Options suitable for rendering into a memory buffer.
    #[must_use]
    pub const fn headless() -> Self {
        Self {
            use_alt_screen: false,
            hide_cursor: false,
            enable_mouse: false,
        }
    }
}

/// Rendering statistics.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderStats {
    /// Frames presented so far.
    pub frames: u64,
    /// Cells written in the last frame.
    pub last_frame_cells: usize,
    /// Wall time spent in the last `present` call.
    pub last_frame_time: Duration,
}

/// Double-buffered renderer over an arbitrary writer.
pub struct Renderer<W: Write> {
    front: Surface,
    back: Surface,
    out: W,
    options: RendererOptions,
    stats: RenderStats,
    /// Force a full repaint on the next present.
    dirty: bool,
    cleaned_up: bool,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer and emit terminal setup sequences per `options`.
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions or when writing setup sequences fails.
    pub fn new(width: u32, height: u32, out: W, options: RendererOptions) -> Result<Self> {
        let mut renderer = Self {
            front: Surface::new(width, height)?,
            back: Surface::new(width, height)?,
            out,
            options,
            stats: RenderStats::default(),
            dirty: true,
            cleaned_up: false,
        };
        renderer.setup()?;
        Ok(renderer)
    }

    /// Create a renderer over an in-memory buffer with headless options.
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions.
    pub fn headless(width: u32, height: u32, out: W) -> Result<Self> {
        Self::new(width, height, out, RendererOptions::headless())
    }

    fn setup(&mut self) -> Result<()> {
        if self.options.use_alt_screen {
            self.out.write_all(ansi::ALT_SCREEN_ON.as_bytes())?;
        }
        if self.options.hide_cursor {
            self.out.write_all(ansi::CURSOR_HIDE.as_bytes())?;
        }
        if self.options.enable_mouse {
            self.out.write_all(ansi::MOUSE_ON.as_bytes())?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Surface dimensions.
    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        self.back.size()
    }

    /// The back surface to draw into.
    pub fn surface(&mut self) -> &mut Surface {
        &mut self.back
    }

    /// The last presented frame.
    #[must_use]
    pub const fn front(&self) -> &Surface {
        &self.front
    }

    /// Rendering statistics.
    #[must_use]
    pub const fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Clear the back surface to a background color.
    pub fn clear(&mut self, bg: Rgba) {
        self.back.clear(bg);
    }

    /// Force the next present to repaint every cell.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Present the back surface: write changed cells, then swap buffers.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn present(&mut self) -> Result<()> {
        let started = Instant::now();

        let patches = if self.dirty {
            self.dirty = false;
            let blank = Surface::new(1, 1)?;
            self.out.write_all(ansi::CLEAR_SCREEN.as_bytes())?;
            self.back.diff(&blank)
        } else {
            self.back.diff(&self.front)
        };

        let mut run = Vec::with_capacity(4096);
        let mut last_style: Option<Style> = None;
        let mut cursor: Option<(u32, u32)> = None;

        for patch in &patches {
            let style = cell_style(patch.cell);

            let continues = cursor == Some((patch.x.wrapping_sub(1), patch.y));
            if !continues {
                run.extend_from_slice(ansi::cursor_position(patch.x, patch.y).as_bytes());
            }
            if last_style != Some(style) {
                run.extend_from_slice(ansi::style_sequence(style).as_bytes());
                last_style = Some(style);
            }
            let mut encoded = [0u8; 4];
            run.extend_from_slice(patch.cell.ch.encode_utf8(&mut encoded).as_bytes());
            cursor = Some((patch.x, patch.y));
        }

        if !run.is_empty() {
            run.extend_from_slice(ansi::RESET.as_bytes());
            self.out.write_all(&run)?;
            self.out.flush()?;
        }

        std::mem::swap(&mut self.front, &mut self.back);
        self.stats.frames += 1;
        self.stats.last_frame_cells = patches.len();
        self.stats.last_frame_time = started.elapsed();
        Ok(())
    }

    /// Resize both surfaces, discarding contents and forcing a repaint.
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.front.resize(width, height)?;
        self.back.resize(width, height)?;
        self.dirty = true;
        Ok(())
    }

    /// Restore terminal state. Called automatically on drop.
    ///
    /// # Errors
    ///
    /// Propagates write failures from the underlying writer.
    pub fn cleanup(&mut self) -> Result<()> {
        if self.cleaned_up {
            return Ok(());
        }
        self.cleaned_up = true;
        if self.options.enable_mouse {
            self.out.write_all(ansi::MOUSE_OFF.as_bytes())?;
        }
        if self.options.hide_cursor {
            self.out.write_all(ansi::CURSOR_SHOW.as_bytes())?;
        }
        if self.options.use_alt_screen {
            self.out.write_all(ansi::ALT_SCREEN_OFF.as_bytes())?;
        }
        self.out.write_all(ansi::RESET.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

}

impl<W: Write> Drop for Renderer<W> {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

const fn cell_style(cell: Cell) -> Style {
    Style {
        fg: Some(cell.fg),
        bg: Some(cell.bg),
        attributes: cell.attrs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headless(width: u32, height: u32, out: &mut Vec<u8>) -> Renderer<&mut Vec<u8>> {
        Renderer::headless(width, height, out).unwrap()
    }

    #[test]
    fn test_headless_emits_no_setup_sequences() {
        let mut out = Vec::new();
        let renderer = headless(10, 4, &mut out);
        drop(renderer);
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("\x1b[?1049h"));
        assert!(!text.contains("\x1b[?1003h"));
    }

    #[test]
    fn test_present_writes_drawn_text() {
        let mut out = Vec::new();
        {
            let mut renderer = headless(20, 4, &mut out);
            renderer.clear(Rgba::BLACK);
            renderer
                .surface()
                .draw_text(0, 0, "hello", Style::fg(Rgba::WHITE));
            renderer.present().unwrap();
            assert_eq!(renderer.stats().frames, 1);
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('h'));
        assert!(text.contains("38;2;255;255;255"));
    }

    #[test]
    fn test_second_present_diffs_only_changes() {
        let mut out = Vec::new();
        let mut renderer = headless(20, 4, &mut out);
        renderer.clear(Rgba::BLACK);
        renderer.surface().draw_text(0, 0, "abc", Style::NONE);
        renderer.present().unwrap();

        // Same content: nothing changes.
        renderer.clear(Rgba::BLACK);
        renderer.surface().draw_text(0, 0, "abc", Style::NONE);
        renderer.present().unwrap();
        assert_eq!(renderer.stats().last_frame_cells, 0);

        // One cell changes.
        renderer.clear(Rgba::BLACK);
        renderer.surface().draw_text(0, 0, "abd", Style::NONE);
        renderer.present().unwrap();
        assert_eq!(renderer.stats().last_frame_cells, 1);
    }

    #[test]
    fn test_resize_forces_repaint() {
        let mut out = Vec::new();
        let mut renderer = headless(10, 2, &mut out);
        renderer.clear(Rgba::BLACK);
        renderer.present().unwrap();

        renderer.resize(12, 3).unwrap();
        assert_eq!(renderer.size(), (12, 3));
        renderer.clear(Rgba::BLACK);
        renderer.present().unwrap();
        assert_eq!(renderer.stats().last_frame_cells, 36);
    }

    #[test]
    fn test_resize_zero_fails() {
        let mut out = Vec::new();
        let mut renderer = headless(10, 2, &mut out);
        assert!(renderer.resize(0, 5).is_err());
    }
}
