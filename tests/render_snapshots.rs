//! Snapshot tests for widget rendering.
//!
//! Surfaces are flattened to text (styles dropped, rows right-trimmed) so
//! the snapshots stay readable and stable across color tweaks.

use chadcn_tui::{
    Card, Column, DataTable, Dropdown, Rect, Surface, Tabs, Viewport, Widget,
};

fn flatten(surface: &Surface) -> String {
    let (_, height) = surface.size();
    let joined: Vec<String> = (0..height)
        .map(|y| surface.row_text(y).trim_end().to_string())
        .collect();
    joined.join("\n").trim_end().to_string()
}

fn render(widget: &dyn Widget, width: u32, height: u32) -> String {
    let mut surface = Surface::new(width, height).unwrap();
    let area = surface.area();
    widget.render(&mut surface, area);
    flatten(&surface)
}

#[test]
fn card_layout() {
    let card = Card::titled("Release", vec!["v0.1.0".to_string()]);
    insta::assert_snapshot!(render(&card, 14, 6), @r"
    ┌────────────┐
    │Release     │
    │            │
    │v0.1.0      │
    │            │
    └────────────┘
    ");
}

#[test]
fn plain_card_layout() {
    let card = Card::plain(vec!["hello".to_string()]);
    insta::assert_snapshot!(render(&card, 10, 4), @r"
    ┌────────┐
    │hello   │
    │        │
    └────────┘
    ");
}

#[test]
fn table_empty_filter_placeholder() {
    let mut table = DataTable::new(
        vec![Column::new("name", "Name"), Column::new("role", "Role")],
        vec![vec!["Ada".to_string(), "Engineer".to_string()]],
        5,
    );
    table.set_query("nobody");
    insta::assert_snapshot!(render(&table, 24, 6), @r"
    Name        Role
    ────────────────────────
     No results found
    ");
}

#[test]
fn table_rows_and_header() {
    let mut table = DataTable::new(
        vec![Column::new("name", "Name"), Column::new("role", "Role")],
        vec![
            vec!["Ada".to_string(), "Engineer".to_string()],
            vec!["Grace".to_string(), "Admiral".to_string()],
        ],
        5,
    );
    table.toggle_sort("name");
    insta::assert_snapshot!(render(&table, 24, 5), @r"
    Name ↑      Role
    ────────────────────────
    Ada         Engineer
    Grace       Admiral
    page 1/1
    ");
}

#[test]
fn dropdown_expanded_menu() {
    let mut dropdown = Dropdown::new(
        "Env",
        vec!["dev".to_string(), "prod".to_string()],
    );
    dropdown.set_anchor(Rect::new(0, 0, 12, 1));
    dropdown.open();
    insta::assert_snapshot!(render(&dropdown, 16, 4), @r"
    Env ▴
     dev
     prod
    ");
}

#[test]
fn tabs_strip_and_active_panel() {
    let mut tabs = Tabs::new(
        vec!["One".to_string(), "Two".to_string()],
        vec![
            vec!["first".to_string()],
            vec!["second".to_string()],
        ],
    );
    tabs.activate(1);
    let _ = Viewport::default();
    insta::assert_snapshot!(render(&tabs, 20, 4), @r"
     One    Two
    ────────────────────
    second
    ");
}
