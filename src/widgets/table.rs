//! Filterable, sortable, paginated data table.
//!
//! The table owns its rows as strings and derives a view each frame:
//! filter by a case-insensitive substring across every field, sort by the
//! active column, then slice the current page. Selecting the active sort
//! column again flips its direction.

use crate::geometry::Rect;
use crate::surface::Surface;
use crate::theme;
use crate::widgets::{Viewport, Widget};
use crate::input::{Event, KeyCode};

/// Placeholder text shown when the filter matches nothing.
pub const NO_RESULTS: &str = "No results found";

/// Sort direction of the active column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A column definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// Stable identifier used for sorting.
    pub key: String,
    /// Header label.
    pub label: String,
}

impl Column {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// The data table widget.
#[derive(Clone, Debug)]
pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    query: String,
    sort: Option<(usize, SortDirection)>,
    page: usize,
    page_size: usize,
}

impl DataTable {
    /// Create a table. Rows shorter than the column set read as empty
    /// fields; extra fields are ignored.
    #[must_use]
    pub fn new(columns: Vec<Column>, rows: Vec<Vec<String>>, page_size: usize) -> Self {
        Self {
            columns,
            rows,
            query: String::new(),
            sort: None,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// The column definitions.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Current filter query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Active sort as (column key, direction).
    #[must_use]
    pub fn sort(&self) -> Option<(&str, SortDirection)> {
        self.sort
            .map(|(i, dir)| (self.columns[i].key.as_str(), dir))
    }

    /// Current page index (zero-based).
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Set the filter query. Matching is a case-insensitive substring test
    /// against every field of a row. Changing the query returns to the
    /// first page so the view never lands past the shrunk result set.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 0;
    }

    /// Sort by column key. A key that is already active flips direction;
    /// a new key starts ascending. Unknown keys are ignored.
    pub fn toggle_sort(&mut self, key: &str) {
        let Some(index) = self.columns.iter().position(|c| c.key == key) else {
            return;
        };
        self.sort = Some(match self.sort {
            Some((active, dir)) if active == index => (index, dir.flipped()),
            _ => (index, SortDirection::Ascending),
        });
    }

    /// Number of rows surviving the filter.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered_indices().len()
    }

    /// Number of pages for the current filter (at least one).
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.filtered_len().div_ceil(self.page_size).max(1)
    }

    /// Advance to the next page; saturates at the last page.
    pub fn next_page(&mut self) {
        if self.page + 1 < self.page_count() {
            self.page += 1;
        }
    }

    /// Go back one page; saturates at the first page.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// The rows of the current page, filtered and sorted.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&[String]> {
        let mut indices = self.filtered_indices();
        if let Some((col, dir)) = self.sort {
            indices.sort_by(|&a, &b| {
                let fa = self.field(a, col);
                let fb = self.field(b, col);
                let ord = fa.cmp(fb);
                match dir {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        indices
            .into_iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .map(|i| self.rows[i].as_slice())
            .collect()
    }

    fn field(&self, row: usize, col: usize) -> &str {
        self.rows[row].get(col).map_or("", String::as_str)
    }

    fn filtered_indices(&self) -> Vec<usize> {
        if self.query.is_empty() {
            return (0..self.rows.len()).collect();
        }
        let needle = self.query.to_lowercase();
        (0..self.rows.len())
            .filter(|&i| {
                self.rows[i]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

impl Widget for DataTable {
    fn handle_event(&mut self, event: &Event, _viewport: Viewport) {
        let Event::Key(key) = event else { return };
        match key.code {
            KeyCode::Left => self.prev_page(),
            KeyCode::Right => self.next_page(),
            _ => {}
        }
    }

    fn render(&self, surface: &mut Surface, area: Rect) {
        if area.is_empty() || self.columns.is_empty() {
            return;
        }
        let col_width = (area.width as usize / self.columns.len()).max(1);

        let mut header = String::new();
        for column in &self.columns {
            let marker = match self.sort {
                Some((i, SortDirection::Ascending)) if self.columns[i].key == column.key => " ↑",
                Some((i, SortDirection::Descending)) if self.columns[i].key == column.key => " ↓",
                _ => "",
            };
            let mut cell = format!("{}{marker}", column.label);
            cell.truncate(col_width.saturating_sub(1));
            header.push_str(&format!("{cell:<col_width$}"));
        }
        surface.draw_text(area.x, area.y, &header, theme::title());
        if area.height > 1 {
            surface.draw_hline(area.x, area.y + 1, area.width, '─', theme::border());
        }

        let rows = self.visible_rows();
        if rows.is_empty() {
            if area.height > 2 {
                surface.draw_text(area.x + 1, area.y + 2, NO_RESULTS, theme::muted());
            }
            return;
        }
        for (r, row) in rows.iter().enumerate() {
            let y = area.y + 2 + r as u32;
            if y >= area.bottom() {
                break;
            }
            let mut line = String::new();
            for c in 0..self.columns.len() {
                let mut cell = row.get(c).cloned().unwrap_or_default();
                cell.truncate(col_width.saturating_sub(1));
                line.push_str(&format!("{cell:<col_width$}"));
            }
            surface.draw_text(area.x, y, &line, theme::text());
        }

        // Page indicator in the bottom row.
        if area.height > 3 {
            let status = format!("page {}/{}", self.page + 1, self.page_count());
            surface.draw_text(area.x, area.bottom() - 1, &status, theme::muted());
        }
    }
}
