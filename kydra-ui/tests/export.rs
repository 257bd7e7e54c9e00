mod common;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use common::{columns, init_logger, person};
use kydra_dom::{Color, Element};
use kydra_ui::table::{to_csv, CsvExport, BOM};
use kydra_ui::{Action, Column, DataTable, DynamicRecord, TableOptions, Value};

fn parse(contents: &str) -> Vec<Vec<String>> {
    let body = contents.strip_prefix(BOM).expect("export starts with a BOM");
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(body.as_bytes())
        .records()
        .map(|row| row.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_csv_round_trip_preserves_commas_and_quotes() {
    let records = vec![
        person(1, "Ann, Jr.", "ann@example.com", 5200),
        person(2, "Bo \"The Boss\"", "bo@example.com", 3100),
        person(3, "Cy", "cy@example.com", 4700),
    ];
    let rows: Vec<&DynamicRecord> = records.iter().collect();
    let contents = to_csv(&columns(), &rows).unwrap();

    assert_eq!(contents.lines().count(), records.len() + 1);
    assert!(contents.ends_with('\n'));

    let parsed = parse(&contents);
    assert_eq!(parsed[0], ["Name", "Email", "Salary"]);
    assert_eq!(parsed[1], ["Ann, Jr.", "ann@example.com", "5200"]);
    assert_eq!(parsed[2], ["Bo \"The Boss\"", "bo@example.com", "3100"]);
    assert_eq!(parsed.len(), 4);
}

#[test]
fn test_every_field_is_quoted() {
    let records = vec![person(1, "Ann", "a@x", 1)];
    let rows: Vec<&DynamicRecord> = records.iter().collect();
    let contents = to_csv(&columns(), &rows).unwrap();
    let expected = format!("{BOM}\"Name\",\"Email\",\"Salary\"\n\"Ann\",\"a@x\",\"1\"\n");
    assert_eq!(contents, expected);
}

#[test]
fn test_hidden_and_action_columns_are_skipped() {
    let columns: Vec<Column<DynamicRecord>> = vec![
        Column::new("Name", "name"),
        Column::new("Secret", "email").hidden(true),
        Column::new("Actions", "actions")
            .actions(vec![Action::new("Edit", Arc::new(|_: &DynamicRecord| {}))]),
    ];
    let records = vec![person(1, "Ann", "a@x", 1)];
    let rows: Vec<&DynamicRecord> = records.iter().collect();

    let parsed = parse(&to_csv(&columns, &rows).unwrap());
    assert_eq!(parsed, vec![vec!["Name".to_string()], vec!["Ann".to_string()]]);
}

#[test]
fn test_formatted_columns_export_raw_values() {
    let columns: Vec<Column<DynamicRecord>> = vec![Column::new("Salary", "salary").format(
        Arc::new(|value: &Value, _: &DynamicRecord, _: &Color| {
            Element::text(format!("${value}"))
        }),
    )];
    let records = vec![person(1, "Ann", "a@x", 1200)];
    let rows: Vec<&DynamicRecord> = records.iter().collect();

    let parsed = parse(&to_csv(&columns, &rows).unwrap());
    assert_eq!(parsed[1], ["1200"]);
}

#[test]
fn test_missing_values_export_empty() {
    let records = vec![DynamicRecord::new(1).with("name", "Ann")];
    let rows: Vec<&DynamicRecord> = records.iter().collect();
    let parsed = parse(&to_csv(&columns(), &rows).unwrap());
    assert_eq!(parsed[1], ["Ann", "", ""]);
}

#[test]
fn test_table_exports_filtered_sorted_rows_across_pages() {
    init_logger();
    let mut table = DataTable::new("people", columns())
        .options(TableOptions::new().filter(true).default_page_size(5));
    let records: Vec<DynamicRecord> = (0..12)
        .map(|i| person(i, &format!("Person {i}"), "x@example.com", i * 10))
        .collect();
    table.set_search("person 1");
    table.sort_by("salary");
    table.sort_by("salary");

    let export = table.export_csv(&records).unwrap();
    assert!(export.file_name.starts_with("Export_"));
    let parsed = parse(&export.contents);
    let names: Vec<&str> = parsed[1..].iter().map(|row| row[0].as_str()).collect();
    assert_eq!(names, ["Person 11", "Person 10", "Person 1"]);
}

#[test]
fn test_write_to_directory() {
    init_logger();
    let dir = std::env::temp_dir().join(format!("kydra-write-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let records = vec![person(1, "Ann", "a@x", 1)];
    let rows: Vec<&DynamicRecord> = records.iter().collect();
    let time = Utc.timestamp_millis_opt(42).unwrap();
    let export = CsvExport::at(&columns(), &rows, time).unwrap();

    let path = export.write_to(&dir).unwrap();
    assert_eq!(path, dir.join("Export_42.csv"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), export.contents);

    std::fs::remove_dir_all(&dir).unwrap();
}
