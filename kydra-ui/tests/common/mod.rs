#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use kydra_dom::{layout, render_to_buffer, Buffer, ColorContext, Element, LayoutResult, Rect};
use kydra_ui::{Action, Column, DynamicRecord, Record, TableTheme};
use simplelog::{Config, LevelFilter, TestLogger};

pub fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

pub fn person(id: i64, name: &str, email: &str, salary: i64) -> DynamicRecord {
    DynamicRecord::new(id)
        .with("name", name)
        .with("email", email)
        .with("salary", salary)
}

pub fn people() -> Vec<DynamicRecord> {
    vec![
        person(1, "Ann", "ann@example.com", 5200),
        person(2, "Bo", "bo@example.com", 3100),
        person(3, "Cy", "cy@example.com", 4700),
    ]
}

/// `count` records with ids 0..count and salaries descending from 1000.
pub fn numbered(count: i64) -> Vec<DynamicRecord> {
    (0..count)
        .map(|i| person(i, &format!("Person {i}"), &format!("p{i}@example.com"), 1000 - i))
        .collect()
}

pub fn columns() -> Vec<Column<DynamicRecord>> {
    vec![
        Column::new("Name", "name").filter(true),
        Column::new("Email", "email").filter(true),
        Column::new("Salary", "salary"),
    ]
}

/// Columns plus an action column whose actions record the ids they ran for.
pub fn columns_with_actions(log: Arc<Mutex<Vec<String>>>) -> Vec<Column<DynamicRecord>> {
    let edit_log = Arc::clone(&log);
    let remove_log = log;
    let mut cols = columns();
    cols.push(Column::new("", "actions").actions(vec![
        Action::new(
            "Edit",
            Arc::new(move |record: &DynamicRecord| {
                edit_log.lock().unwrap().push(format!("edit {}", record.id()));
            }),
        ),
        Action::new(
            "Remove",
            Arc::new(move |record: &DynamicRecord| {
                remove_log.lock().unwrap().push(format!("remove {}", record.id()));
            }),
        ),
    ]));
    cols
}

pub fn names(rows: &[&DynamicRecord]) -> Vec<String> {
    rows.iter()
        .map(|r| r.get("name").map(|v| v.to_string()).unwrap_or_default())
        .collect()
}

/// Lay out and paint `root` into a fresh buffer.
pub fn render(root: &Element, width: u16, height: u16) -> (Buffer, LayoutResult) {
    let theme = TableTheme::default();
    let result = layout(root, Rect::new(0, 0, width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &result, &mut buf, &ColorContext::new(&theme));
    (buf, result)
}
