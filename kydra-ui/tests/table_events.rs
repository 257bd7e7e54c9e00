mod common;

use std::sync::{Arc, Mutex};

use common::{columns, columns_with_actions, init_logger, numbered, people};
use kydra_dom::{hit_test, layout, Element, Event, Key, LayoutResult, Rect};
use kydra_ui::error::ExportError;
use kydra_ui::{
    ActionMenu, DataTable, DynamicRecord, RecordId, TableError, TableOptions, WidgetResult,
};

const VIEWPORT: Rect = Rect::new(0, 0, 120, 40);

fn build(table: &DataTable<DynamicRecord>, records: &[DynamicRecord]) -> (Element, LayoutResult) {
    let root = table.build(records);
    let result = layout(&root, VIEWPORT);
    (root, result)
}

/// Rebuild, then deliver `event` the way a host would.
fn send(
    table: &mut DataTable<DynamicRecord>,
    records: &[DynamicRecord],
    event: Event,
) -> WidgetResult {
    let (root, result) = build(table, records);
    table.handle_event(&event, &root, &result, records).unwrap()
}

fn click(table: &mut DataTable<DynamicRecord>, records: &[DynamicRecord], id: &str) -> WidgetResult {
    send(table, records, Event::click(id))
}

fn full_table() -> DataTable<DynamicRecord> {
    init_logger();
    DataTable::new("people", columns()).options(
        TableOptions::new()
            .filter(true)
            .selectable(true)
            .add(true)
            .excel_export(true),
    )
}

#[test]
fn test_click_on_header_sorts() {
    let mut table = full_table();
    let records = people();

    assert_eq!(click(&mut table, &records, "people-sort-salary"), WidgetResult::Sorted);
    assert_eq!(click(&mut table, &records, "people-sort-salary"), WidgetResult::Sorted);
    let sort = table.sort().unwrap();
    assert_eq!(sort.key, "salary");
    assert_eq!(sort.direction, kydra_ui::table::SortDirection::Descending);
}

#[test]
fn test_enter_on_focused_header_sorts() {
    let mut table = full_table();
    let records = people();
    let result = send(&mut table, &records, Event::key("people-sort-name", Key::Enter));
    assert_eq!(result, WidgetResult::Sorted);
    assert_eq!(table.sort().unwrap().key, "name");
}

#[test]
fn test_pager_clicks() {
    let mut table = full_table();
    let records = numbered(25);

    assert_eq!(click(&mut table, &records, "people-prev"), WidgetResult::Ignored);
    assert_eq!(click(&mut table, &records, "people-next"), WidgetResult::Changed);
    assert_eq!(click(&mut table, &records, "people-next"), WidgetResult::Changed);
    assert_eq!(table.current_page(), 3);
    assert_eq!(click(&mut table, &records, "people-next"), WidgetResult::Ignored);

    assert_eq!(click(&mut table, &records, "people-size-25"), WidgetResult::Changed);
    assert_eq!(table.page_size(), 25);
    assert_eq!(table.current_page(), 1);
}

#[test]
fn test_disabled_pager_is_not_hit() {
    let table = full_table();
    let records = numbered(25);
    let (root, result) = build(&table, &records);

    let prev = result["people-prev"];
    assert_eq!(hit_test(&result, &root, prev.x, prev.y), None);
    let next = result["people-next"];
    assert_eq!(
        hit_test(&result, &root, next.x, next.y).as_deref(),
        Some("people-next")
    );
}

#[test]
fn test_row_and_page_selection_by_click() {
    let mut table = full_table();
    let records = numbered(25);

    click(&mut table, &records, "people-next");
    assert_eq!(click(&mut table, &records, "people-select-all"), WidgetResult::Changed);
    let mut selected = table.selected_ids();
    selected.sort();
    let expected: Vec<RecordId> = (10..20).map(RecordId::Int).collect();
    assert_eq!(selected, expected);

    click(&mut table, &records, "people-select-i:12");
    assert_eq!(table.selected_ids().len(), 9);
    assert!(!table.is_selected(&RecordId::Int(12)));
}

#[test]
fn test_delete_button_appears_with_selection() {
    let deleted: Arc<Mutex<Vec<RecordId>>> = Arc::default();
    let sink = Arc::clone(&deleted);
    let mut table = full_table()
        .on_delete_rows(Arc::new(move |ids: Vec<RecordId>| sink.lock().unwrap().extend(ids)));
    let records = people();

    let (root, _) = build(&table, &records);
    assert!(kydra_dom::find_element(&root, "people-delete").is_none());

    click(&mut table, &records, "people-select-i:3");
    click(&mut table, &records, "people-select-i:1");
    let (root, _) = build(&table, &records);
    assert!(kydra_dom::find_element(&root, "people-delete").is_some());

    assert_eq!(click(&mut table, &records, "people-delete"), WidgetResult::Activated);
    assert_eq!(*deleted.lock().unwrap(), vec![RecordId::Int(3), RecordId::Int(1)]);
    assert!(table.selected_ids().is_empty());
}

#[test]
fn test_add_button_runs_action() {
    let count = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&count);
    let mut table = full_table().action_add(Arc::new(move || *sink.lock().unwrap() += 1));
    let records = people();

    assert_eq!(click(&mut table, &records, "people-add"), WidgetResult::Activated);
    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn test_unknown_target_is_ignored() {
    let mut table = full_table();
    let records = people();
    assert_eq!(click(&mut table, &records, "nowhere"), WidgetResult::Ignored);
    assert_eq!(
        send(&mut table, &records, Event::Resize { width: 10, height: 10 }),
        WidgetResult::Ignored
    );
}

#[test]
fn test_typing_into_search_filters() {
    let mut table = full_table();
    let records = people();

    let focus = Event::Focus {
        target: "people-search".into(),
    };
    assert_eq!(send(&mut table, &records, focus), WidgetResult::Handled);
    for c in ['A', 'n'] {
        let result = send(&mut table, &records, Event::key("people-search", Key::Char(c)));
        assert_eq!(result, WidgetResult::Changed);
    }
    assert_eq!(table.search(), "An");
    assert_eq!(table.view(&records).rows.len(), 1);

    send(&mut table, &records, Event::key("people-search", Key::Backspace));
    assert_eq!(table.search(), "A");
}

#[test]
fn test_search_clear_button_and_escape() {
    let mut table = full_table();
    let records = people();
    table.set_search("bo");

    assert_eq!(click(&mut table, &records, "people-search-clear"), WidgetResult::Changed);
    assert_eq!(table.search(), "");
    // The clear button is gone once the term is empty.
    assert_eq!(click(&mut table, &records, "people-search-clear"), WidgetResult::Ignored);

    table.set_search("bo");
    let result = send(&mut table, &records, Event::key("people-search", Key::Escape));
    assert_eq!(result, WidgetResult::Changed);
    assert_eq!(table.search(), "");
}

#[test]
fn test_search_events_ignored_without_filter() {
    init_logger();
    let mut table = DataTable::new("people", columns());
    let records = people();
    let result = send(&mut table, &records, Event::key("people-search", Key::Char('x')));
    assert_eq!(result, WidgetResult::Ignored);
    assert_eq!(table.search(), "");
}

#[test]
fn test_export_click_writes_file() {
    let dir = std::env::temp_dir().join(format!("kydra-export-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    init_logger();
    let mut table = DataTable::new("people", columns())
        .options(TableOptions::new().excel_export(true).export_dir(&dir));
    let records = people();

    assert_eq!(click(&mut table, &records, "people-export"), WidgetResult::Activated);
    let written: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("Export_") && name.ends_with(".csv"))
        .collect();
    assert!(!written.is_empty());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_export_into_missing_directory_fails() {
    init_logger();
    let dir = std::env::temp_dir().join("kydra-export-missing").join("nested");
    let mut table = DataTable::new("people", columns())
        .options(TableOptions::new().excel_export(true).export_dir(&dir));
    let records = people();

    let (root, result) = build(&table, &records);
    let err = table
        .handle_event(&Event::click("people-export"), &root, &result, &records)
        .unwrap_err();
    let TableError::Export(ExportError::Io { path, .. }) = &err else {
        panic!("expected an io error, got {err:?}");
    };
    assert!(path.starts_with(&dir));
    assert!(err.to_string().starts_with("failed to write export to"));
}

#[test]
fn test_action_menu_opens_at_anchor_and_runs_action() {
    init_logger();
    let log: Arc<Mutex<Vec<String>>> = Arc::default();
    let mut table = DataTable::new("people", columns_with_actions(Arc::clone(&log)));
    let records = people();

    let trigger = ActionMenu::trigger_id("people", &RecordId::Int(2), 3);
    let (root, result) = build(&table, &records);
    let anchor = result[&trigger];
    let event = Event::click(&trigger);
    assert_eq!(
        table.handle_event(&event, &root, &result, &records).unwrap(),
        WidgetResult::Opened
    );

    let open = table.state().menu.current().cloned().unwrap();
    assert_eq!(open.row, RecordId::Int(2));
    assert_eq!(open.anchor, anchor);

    let (root, result) = build(&table, &records);
    let panel = result[&ActionMenu::panel_id("people")];
    assert_eq!((panel.x, panel.y), ActionMenu::panel_origin(anchor));

    // The panel sits above the backdrop.
    let item = result[&ActionMenu::item_id("people", 1)];
    assert_eq!(
        hit_test(&result, &root, item.x, item.y),
        Some(ActionMenu::item_id("people", 1))
    );
    let outside = hit_test(&result, &root, 0, VIEWPORT.height - 1);
    assert_eq!(outside, Some(ActionMenu::backdrop_id("people")));

    let select = Event::click(ActionMenu::item_id("people", 1));
    assert_eq!(
        table.handle_event(&select, &root, &result, &records).unwrap(),
        WidgetResult::Activated
    );
    assert_eq!(*log.lock().unwrap(), vec!["remove 2".to_string()]);
    assert!(!table.state().menu.is_open());
}

#[test]
fn test_action_menu_closes_on_backdrop_escape_and_retoggle() {
    init_logger();
    let log: Arc<Mutex<Vec<String>>> = Arc::default();
    let mut table = DataTable::new("people", columns_with_actions(Arc::clone(&log)));
    let records = people();
    let trigger = ActionMenu::trigger_id("people", &RecordId::Int(1), 3);

    click(&mut table, &records, &trigger);
    let backdrop = ActionMenu::backdrop_id("people");
    assert_eq!(click(&mut table, &records, &backdrop), WidgetResult::Closed);

    click(&mut table, &records, &trigger);
    let escape = Event::key("anything", Key::Escape);
    assert_eq!(send(&mut table, &records, escape), WidgetResult::Closed);

    assert_eq!(click(&mut table, &records, &trigger), WidgetResult::Opened);
    assert_eq!(click(&mut table, &records, &trigger), WidgetResult::Closed);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_menu_overlay_hidden_when_row_leaves_page() {
    init_logger();
    let log: Arc<Mutex<Vec<String>>> = Arc::default();
    let mut table = DataTable::new("people", columns_with_actions(log))
        .options(TableOptions::new().filter(true));
    let records = people();

    click(&mut table, &records, &ActionMenu::trigger_id("people", &RecordId::Int(1), 3));
    table.set_search("bo");
    let (root, _) = build(&table, &records);
    assert!(kydra_dom::find_element(&root, &ActionMenu::panel_id("people")).is_none());
}
