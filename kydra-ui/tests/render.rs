mod common;

use std::sync::Arc;

use common::{columns, init_logger, numbered, people, render};
use kydra_dom::{find_element, Color, Element, Style, TextAlign, Theme};
use kydra_ui::table::EMPTY_MESSAGE;
use kydra_ui::{
    Column, DataTable, DynamicRecord, RecordId, TableOptions, TableTheme, Value,
};

fn lines(table: &DataTable<DynamicRecord>, records: &[DynamicRecord]) -> Vec<String> {
    let (buf, _) = render(&table.build(records), 100, 30);
    buf.to_lines()
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn test_renders_headers_rows_and_footer() {
    init_logger();
    let table = DataTable::new("people", columns());
    let lines = lines(&table, &people());

    assert!(contains(&lines, "Name ↕"));
    assert!(contains(&lines, "Salary ↕"));
    assert!(contains(&lines, "ann@example.com"));
    assert!(contains(&lines, "Rows per page:"));
    assert!(contains(&lines, "1 / 1"));
    let ann = lines.iter().position(|l| l.contains("Ann")).unwrap();
    let bo = lines.iter().position(|l| l.contains("Bo ")).unwrap();
    assert!(ann < bo);
}

#[test]
fn test_sort_indicator_follows_direction() {
    init_logger();
    let mut table = DataTable::new("people", columns());
    let records = people();
    table.sort_by("salary");
    assert!(contains(&lines(&table, &records), "Salary ↑"));
    table.sort_by("salary");
    let lines = lines(&table, &records);
    assert!(contains(&lines, "Salary ↓"));
    assert!(contains(&lines, "Name ↕"));
}

#[test]
fn test_empty_state_and_hidden_footer() {
    init_logger();
    let table = DataTable::new("people", columns());
    let lines = lines(&table, &[]);
    assert!(contains(&lines, EMPTY_MESSAGE));
    assert!(!contains(&lines, "Rows per page:"));
}

#[test]
fn test_custom_empty_state_gets_theme() {
    init_logger();
    let table = DataTable::new("people", columns())
        .options(TableOptions::new().dark_mode(true))
        .empty_state(Arc::new(|theme: &TableTheme| {
            Element::text(if theme.dark_mode { "nothing (dark)" } else { "nothing" })
        }));
    let lines = lines(&table, &[]);
    assert!(contains(&lines, "nothing (dark)"));
    assert!(!contains(&lines, EMPTY_MESSAGE));
}

#[test]
fn test_no_matches_shows_empty_state() {
    init_logger();
    let mut table =
        DataTable::new("people", columns()).options(TableOptions::new().filter(true));
    table.set_search("zzz");
    assert!(contains(&lines(&table, &people()), EMPTY_MESSAGE));
}

#[test]
fn test_formatter_receives_value_record_and_accent() {
    init_logger();
    let columns = vec![
        Column::new("Name", "name"),
        Column::new("Pay", "salary")
            .align(TextAlign::Right)
            .format(Arc::new(|value: &Value, record: &DynamicRecord, accent: &Color| {
                let name = record.get("name").map(|v| v.to_string()).unwrap_or_default();
                Element::text(format!("${value} ({name})"))
                    .style(Style::new().foreground(accent.clone()))
            })),
    ];
    let table = DataTable::new("people", columns);
    assert!(contains(&lines(&table, &people()), "$5200 (Ann)"));
}

#[test]
fn test_hidden_columns_are_not_drawn() {
    init_logger();
    let columns = vec![
        Column::new("Name", "name"),
        Column::new("Email", "email").hidden(true),
    ];
    let table = DataTable::new("people", columns);
    let lines = lines(&table, &people());
    assert!(contains(&lines, "Ann"));
    assert!(!contains(&lines, "Email"));
    assert!(!contains(&lines, "ann@example.com"));
}

#[test]
fn test_toolbar_controls() {
    init_logger();
    let mut table = DataTable::new("people", columns()).options(
        TableOptions::new()
            .filter(true)
            .filter_placeholder("Find people")
            .selectable(true)
            .add(true)
            .text_add("New person")
            .excel_export(true),
    );
    let records = people();
    let lines_before = lines(&table, &records);
    assert!(contains(&lines_before, "Find people"));
    assert!(contains(&lines_before, "New person"));
    assert!(contains(&lines_before, "Export"));
    assert!(!contains(&lines_before, "selected"));

    table.toggle_row(RecordId::Int(2));
    let lines_after = lines(&table, &records);
    assert!(contains(&lines_after, "1 selected"));
    assert!(contains(&lines_after, "Delete"));
    assert!(contains(&lines_after, "[✓]"));
}

#[test]
fn test_selected_row_is_highlighted() {
    init_logger();
    let mut table =
        DataTable::new("people", columns()).options(TableOptions::new().selectable(true));
    let records = people();
    table.toggle_row(RecordId::Int(1));

    let root = table.build(&records);
    let selected = find_element(&root, "people-row-i:1").unwrap();
    assert_eq!(selected.style.background, Some(Color::var("accent.soft")));
    let other = find_element(&root, "people-row-i:2").unwrap();
    assert_eq!(other.style.background, None);
}

#[test]
fn test_footer_pages_and_sizes() {
    init_logger();
    let mut table = DataTable::new("people", columns());
    let records = numbered(25);
    assert!(contains(&lines(&table, &records), "1 / 3"));
    table.next_page(&records);
    let lines = lines(&table, &records);
    assert!(contains(&lines, "2 / 3"));
    assert!(contains(&lines, "Person 10"));
    assert!(!contains(&lines, "Person 9 "));

    let root = table.build(&records);
    for size in [5, 10, 25, 50, 100] {
        assert!(find_element(&root, &format!("people-size-{size}")).is_some());
    }
    assert!(!find_element(&root, "people-prev").unwrap().disabled);
}

#[test]
fn test_pagination_off_hides_footer() {
    init_logger();
    let table = DataTable::new("people", columns()).options(TableOptions::new().pagination(false));
    let records = numbered(12);
    let root = table.build(&records);
    assert!(find_element(&root, "people-footer").is_none());
    assert!(find_element(&root, "people-row-i:11").is_some());
}

#[test]
fn test_dark_mode_paints_dark_surface() {
    init_logger();
    let table = DataTable::new("people", columns()).options(TableOptions::new().dark_mode(true));
    let records = people();
    let root = table.build(&records);
    let dark = table.theme().clone();

    let result = kydra_dom::layout(&root, kydra_dom::Rect::new(0, 0, 100, 30));
    let mut buf = kydra_dom::Buffer::new(100, 30);
    kydra_dom::render_to_buffer(&root, &result, &mut buf, &kydra_dom::ColorContext::new(&dark));

    let grid = result["people-grid"];
    let cell = buf.get(grid.x + 2, grid.y + 1).unwrap();
    let surface = dark.resolve("surface").unwrap().to_rgb();
    assert_eq!(cell.bg, surface);
}

#[test]
fn test_very_wide_cells_build_and_render() {
    init_logger();
    let wide = "x".repeat(40_000);
    let records = vec![
        DynamicRecord::new(1)
            .with("name", wide.as_str())
            .with("email", wide.as_str()),
    ];
    let table = DataTable::new("people", columns());

    let root = table.build(&records);
    assert!(find_element(&root, "people-grid").is_some());
    let (buf, _) = render(&root, 100, 30);
    assert!(contains(&buf.to_lines(), "Name"));
}
