//! Cell surface: the render target every widget draws into.
//!
//! A [`Surface`] is a width x height grid of styled cells with basic drawing
//! primitives (text, filled rectangles, boxes) and a row-major diff used by
//! the renderer to emit only changed cells. Wide characters occupy their
//! display width; the cells they cover are blanked so diffing stays exact.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::style::{Style, TextAttributes};
use unicode_width::UnicodeWidthChar;

/// A single terminal cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Displayed character (space for blank and wide-char continuations).
    pub ch: char,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// Text attributes.
    pub attrs: TextAttributes,
}

impl Cell {
    /// A blank cell: space on transparent background.
    pub const BLANK: Self = Self {
        ch: ' ',
        fg: Rgba::WHITE,
        bg: Rgba::TRANSPARENT,
        attrs: TextAttributes::empty(),
    };

    /// Create a blank cell with the given background.
    #[must_use]
    pub const fn blank_with_bg(bg: Rgba) -> Self {
        Self {
            ch: ' ',
            fg: Rgba::WHITE,
            bg,
            attrs: TextAttributes::empty(),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// One changed cell produced by [`Surface::diff`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPatch {
    pub x: u32,
    pub y: u32,
    pub cell: Cell,
}

/// A width x height grid of cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Surface {
    /// Create a surface filled with blank cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = (width as usize).saturating_mul(height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![Cell::BLANK; size],
        })
    }

    /// Surface dimensions.
    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Surface width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Rectangle covering the whole surface.
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row = (y as usize).checked_mul(self.width as usize)?;
        let idx = row.checked_add(x as usize)?;
        (idx < self.cells.len()).then_some(idx)
    }

    /// Get the cell at a position, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Set the cell at a position. Out-of-bounds writes are silent no-ops.
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Fill the whole surface with a background color.
    pub fn clear(&mut self, bg: Rgba) {
        self.cells.fill(Cell::blank_with_bg(bg));
    }

    /// Draw text starting at a position, clipped at the right edge.
    ///
    /// Wide characters advance by their display width; zero-width characters
    /// are skipped rather than stacked into the previous cell.
    pub fn draw_text(&mut self, x: u32, y: u32, text: &str, style: Style) {
        let mut col = x;
        for ch in text.chars() {
            let ch_width = ch.width().unwrap_or(0) as u32;
            if ch_width == 0 {
                continue;
            }
            if col >= self.width || y >= self.height {
                break;
            }
            self.write_styled(col, y, ch, style);
            // Blank continuation cells so diffs never straddle a wide glyph.
            for cont in 1..ch_width {
                self.write_styled(col + cont, y, ' ', style);
            }
            col = col.saturating_add(ch_width);
        }
    }

    fn write_styled(&mut self, x: u32, y: u32, ch: char, style: Style) {
        if let Some(idx) = self.index(x, y) {
            let prev = self.cells[idx];
            self.cells[idx] = Cell {
                ch,
                fg: style.fg.unwrap_or(prev.fg),
                bg: style.bg.unwrap_or(prev.bg),
                attrs: style.attributes,
            };
        }
    }

    /// Fill a rectangle with a background color, clipped to the surface.
    pub fn fill_rect(&mut self, rect: Rect, bg: Rgba) {
        for row in rect.y..rect.bottom().min(self.height) {
            for col in rect.x..rect.right().min(self.width) {
                self.set(col, row, Cell::blank_with_bg(bg));
            }
        }
    }

    /// Draw a single-line box border on the rectangle's edge.
    ///
    /// Degenerate rectangles (under 2x2) are silent no-ops.
    pub fn draw_box(&mut self, rect: Rect, style: Style) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        self.write_styled(rect.x, rect.y, '┌', style);
        self.write_styled(right, rect.y, '┐', style);
        self.write_styled(rect.x, bottom, '└', style);
        self.write_styled(right, bottom, '┘', style);
        for col in (rect.x + 1)..right {
            self.write_styled(col, rect.y, '─', style);
            self.write_styled(col, bottom, '─', style);
        }
        for row in (rect.y + 1)..bottom {
            self.write_styled(rect.x, row, '│', style);
            self.write_styled(right, row, '│', style);
        }
    }

    /// Draw a horizontal line of `width` cells.
    pub fn draw_hline(&mut self, x: u32, y: u32, width: u32, ch: char, style: Style) {
        for col in x..x.saturating_add(width).min(self.width) {
            self.write_styled(col, y, ch, style);
        }
    }

    /// Resize the surface, discarding contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when either dimension is zero.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        self.width = width;
        self.height = height;
        let size = (width as usize).saturating_mul(height as usize);
        self.cells.clear();
        self.cells.resize(size, Cell::BLANK);
        Ok(())
    }

    /// Cells that differ from `previous`, in row-major order.
    ///
    /// Surfaces of different sizes report every cell as changed.
    #[must_use]
    pub fn diff(&self, previous: &Self) -> Vec<CellPatch> {
        let mut patches = Vec::new();
        if self.width != previous.width || self.height != previous.height {
            for y in 0..self.height {
                for x in 0..self.width {
                    if let Some(cell) = self.get(x, y) {
                        patches.push(CellPatch { x, y, cell: *cell });
                    }
                }
            }
            return patches;
        }
        for (idx, (cur, prev)) in self.cells.iter().zip(previous.cells.iter()).enumerate() {
            if cur != prev {
                let x = (idx % self.width as usize) as u32;
                let y = (idx / self.width as usize) as u32;
                patches.push(CellPatch { x, y, cell: *cur });
            }
        }
        patches
    }

    /// Render a row as plain text (styling dropped), for tests and snapshots.
    #[must_use]
    pub fn row_text(&self, y: u32) -> String {
        let mut line = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                line.push(cell.ch);
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            Surface::new(0, 24),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Surface::new(80, 0),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut s = Surface::new(10, 4).unwrap();
        let cell = Cell {
            ch: 'x',
            fg: Rgba::RED,
            bg: Rgba::BLACK,
            attrs: TextAttributes::BOLD,
        };
        s.set(3, 2, cell);
        assert_eq!(s.get(3, 2), Some(&cell));
        assert_eq!(s.get(10, 2), None);
        assert_eq!(s.get(3, 4), None);
    }

    #[test]
    fn test_out_of_bounds_set_is_noop() {
        let mut s = Surface::new(4, 4).unwrap();
        let before = s.clone();
        s.set(100, 100, Cell::BLANK);
        assert_eq!(s, before);
    }

    #[test]
    fn test_draw_text_basic() {
        let mut s = Surface::new(20, 2).unwrap();
        s.draw_text(2, 1, "hello", Style::fg(Rgba::WHITE));
        assert_eq!(s.row_text(1).trim_end(), "  hello");
        assert_eq!(s.get(2, 1).unwrap().fg, Rgba::WHITE);
    }

    #[test]
    fn test_draw_text_clips_at_edge() {
        let mut s = Surface::new(5, 1).unwrap();
        s.draw_text(3, 0, "wide", Style::NONE);
        assert_eq!(s.row_text(0), "   wi");
    }

    #[test]
    fn test_draw_text_wide_char_advance() {
        let mut s = Surface::new(10, 1).unwrap();
        // '好' is double width: next glyph lands two cells later.
        s.draw_text(0, 0, "好a", Style::NONE);
        assert_eq!(s.get(0, 0).unwrap().ch, '好');
        assert_eq!(s.get(1, 0).unwrap().ch, ' ');
        assert_eq!(s.get(2, 0).unwrap().ch, 'a');
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut s = Surface::new(6, 4).unwrap();
        s.fill_rect(Rect::new(4, 2, 10, 10), Rgba::BLUE);
        assert_eq!(s.get(4, 2).unwrap().bg, Rgba::BLUE);
        assert_eq!(s.get(5, 3).unwrap().bg, Rgba::BLUE);
        assert_eq!(s.get(3, 2).unwrap().bg, Rgba::TRANSPARENT);
    }

    #[test]
    fn test_draw_box_corners() {
        let mut s = Surface::new(8, 4).unwrap();
        s.draw_box(Rect::new(1, 0, 6, 4), Style::NONE);
        assert_eq!(s.get(1, 0).unwrap().ch, '┌');
        assert_eq!(s.get(6, 0).unwrap().ch, '┐');
        assert_eq!(s.get(1, 3).unwrap().ch, '└');
        assert_eq!(s.get(6, 3).unwrap().ch, '┘');
        assert_eq!(s.get(3, 0).unwrap().ch, '─');
        assert_eq!(s.get(1, 1).unwrap().ch, '│');
    }

    #[test]
    fn test_draw_box_degenerate_noop() {
        let mut s = Surface::new(8, 4).unwrap();
        let before = s.clone();
        s.draw_box(Rect::new(0, 0, 1, 4), Style::NONE);
        s.draw_box(Rect::new(0, 0, 4, 1), Style::NONE);
        assert_eq!(s, before);
    }

    #[test]
    fn test_diff_reports_changes_only() {
        let mut a = Surface::new(10, 2).unwrap();
        let b = a.clone();
        assert!(a.diff(&b).is_empty());

        a.draw_text(0, 0, "hi", Style::NONE);
        let patches = a.diff(&b);
        assert_eq!(patches.len(), 2);
        assert_eq!(patches[0].x, 0);
        assert_eq!(patches[0].cell.ch, 'h');
        assert_eq!(patches[1].cell.ch, 'i');
    }

    #[test]
    fn test_diff_size_mismatch_full() {
        let a = Surface::new(3, 2).unwrap();
        let b = Surface::new(2, 2).unwrap();
        assert_eq!(a.diff(&b).len(), 6);
    }

    #[test]
    fn test_resize_discards_contents() {
        let mut s = Surface::new(4, 2).unwrap();
        s.draw_text(0, 0, "abcd", Style::NONE);
        s.resize(6, 3).unwrap();
        assert_eq!(s.size(), (6, 3));
        assert_eq!(s.get(0, 0).unwrap().ch, ' ');
        assert!(s.resize(0, 3).is_err());
    }
}
