use std::fs::File;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crossterm::event::{Event as CtEvent, KeyCode, KeyEventKind, MouseEventKind};
use kydra_dom::event::key_event;
use kydra_dom::{
    find_element, hit_test, Color, Edges, Element, Event, LayoutResult, Size, Style, Terminal,
};
use kydra_ui::{
    Action, Column, DataTable, DynamicRecord, HandlerRegistry, Navbar, Record, RecordId,
    TableError, Value, WidgetResult,
};
use serde_json::json;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("table.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let store = Arc::new(Mutex::new(seed()));
    let menu_open = Arc::new(AtomicBool::new(false));
    let registry = HandlerRegistry::new();

    let mut table = DataTable::new("people", columns(Arc::clone(&store)))
        .options(serde_json::from_value(json!({
            "filter": true,
            "selectable": true,
            "add": true,
            "textAdd": "New person",
            "excelExport": true,
            "defaultPageSize": 5,
            "customArrayPagination": [5, 10, 25],
        }))?)
        .on_delete_rows({
            let store = Arc::clone(&store);
            Arc::new(move |ids: Vec<RecordId>| {
                if let Ok(mut records) = store.lock() {
                    records.retain(|r| !ids.contains(&r.id()));
                }
            })
        })
        .action_add({
            let store = Arc::clone(&store);
            Arc::new(move || {
                if let Ok(mut records) = store.lock() {
                    let id = records.len() as i64 + 100;
                    records.push(person(id, &format!("New {id}"), "new@example.com", 1000));
                }
            })
        });

    let mut term = Terminal::new()?;
    let mut focused: Option<String> = None;

    loop {
        let records = store.lock().map(|r| r.clone()).unwrap_or_default();
        let (width, _) = term.size();

        registry.clear();
        let nav = Navbar::new()
            .title("Kydra Demo")
            .compact(Navbar::is_compact_width(width))
            .menu_open(menu_open.load(Ordering::Relaxed))
            .on_toggle_menu({
                let menu_open = Arc::clone(&menu_open);
                Arc::new(move || {
                    menu_open.fetch_xor(true, Ordering::Relaxed);
                })
            })
            .item(Element::text("People").style(Style::new().bold()).id("nav-people"))
            .item(Element::text("q to quit").id("nav-help"));

        let root = Element::col()
            .width(Size::Fill)
            .height(Size::Fill)
            .gap(1)
            .child(nav.build(&registry))
            .child(
                Element::col()
                    .width(Size::Fill)
                    .padding(Edges::horizontal(2))
                    .child(table.build(&records)),
            );

        let layout = term.render(&root, table.theme())?.clone();

        for raw in term.poll(None)? {
            let event = match raw {
                CtEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('q') && focused.is_none() {
                        return Ok(());
                    }
                    match key_event(key, focused.clone()) {
                        Some(event) => event,
                        None => continue,
                    }
                }
                CtEvent::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(button) => {
                        let target = hit_test(&layout, &root, mouse.column, mouse.row);
                        let pass = Pass {
                            root: &root,
                            layout: &layout,
                            records: &records,
                        };
                        move_focus(&mut table, &mut focused, target.clone(), &pass)?;
                        Event::Click {
                            target,
                            x: mouse.column,
                            y: mouse.row,
                            button: button.into(),
                        }
                    }
                    _ => continue,
                },
                CtEvent::Resize(width, height) => Event::Resize { width, height },
                _ => continue,
            };

            if registry.dispatch(&event).is_handled() {
                continue;
            }
            let result = table.handle_event(&event, &root, &layout, &records)?;
            if result == WidgetResult::Activated {
                log::info!("table action: {:?}", event.target());
            }
        }
    }
}

/// The tree, layout and records of one frame.
struct Pass<'a> {
    root: &'a Element,
    layout: &'a LayoutResult,
    records: &'a [DynamicRecord],
}

/// Send blur/focus events when a click lands on a different focusable element.
fn move_focus(
    table: &mut DataTable<DynamicRecord>,
    focused: &mut Option<String>,
    target: Option<String>,
    pass: &Pass<'_>,
) -> Result<(), TableError> {
    let target = target.filter(|id| find_element(pass.root, id).is_some_and(|e| e.focusable));
    if target == *focused {
        return Ok(());
    }
    if let Some(previous) = focused.take() {
        let blur = Event::Blur { target: previous };
        table.handle_event(&blur, pass.root, pass.layout, pass.records)?;
    }
    if let Some(next) = &target {
        let focus = Event::Focus {
            target: next.clone(),
        };
        table.handle_event(&focus, pass.root, pass.layout, pass.records)?;
    }
    *focused = target;
    Ok(())
}

fn person(id: i64, name: &str, email: &str, salary: i64) -> DynamicRecord {
    DynamicRecord::new(id)
        .with("name", name)
        .with("email", email)
        .with("salary", salary)
        .with("active", id % 3 != 0)
}

fn seed() -> Vec<DynamicRecord> {
    [
        ("Ann Lee", 5200),
        ("Bo Park", 3100),
        ("Cy Moreno", 4700),
        ("Dana \"DJ\" Smith", 6100),
        ("Eli Novak", 2900),
        ("Fay Chen", 3900),
        ("Gus Ortiz", 4400),
        ("Hana Ito", 5600),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, salary))| {
        let first = name.split(' ').next().unwrap_or("user").to_lowercase();
        let email = format!("{first}@example.com");
        person(i as i64 + 1, name, &email, salary)
    })
    .collect()
}

fn columns(store: Arc<Mutex<Vec<DynamicRecord>>>) -> Vec<Column<DynamicRecord>> {
    vec![
        Column::new("Name", "name").filter(true),
        Column::new("Email", "email").filter(true),
        Column::new("Salary", "salary")
            .align(kydra_dom::TextAlign::Right)
            .format(Arc::new(|value: &Value, _: &DynamicRecord, _: &Color| {
                Element::text(format!("${value}"))
            })),
        Column::new("Active", "active").format(Arc::new(
            |value: &Value, _: &DynamicRecord, accent: &Color| {
                let on = matches!(value, Value::Bool(true));
                let color = if on { accent.clone() } else { Color::var("muted") };
                Element::text(if on { "●" } else { "○" }).style(Style::new().foreground(color))
            },
        )),
        Column::new("", "actions").actions(vec![
            Action::new(
                "Give raise",
                Arc::new({
                    let store = Arc::clone(&store);
                    move |record: &DynamicRecord| {
                        if let Ok(mut records) = store.lock() {
                            if let Some(r) = records.iter_mut().find(|r| r.id() == record.id()) {
                                let salary = r.field("salary").as_f64().unwrap_or(0.0) as i64;
                                r.set("salary", salary + 500);
                            }
                        }
                    }
                }),
            )
            .icon("↑"),
            Action::new(
                "Remove",
                Arc::new(move |record: &DynamicRecord| {
                    if let Ok(mut records) = store.lock() {
                        records.retain(|r| r.id() != record.id());
                    }
                }),
            )
            .icon("✕")
            .color(Color::var("danger")),
        ]),
    ]
}
