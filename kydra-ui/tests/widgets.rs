mod common;

use std::sync::{Arc, Mutex};

use common::{init_logger, render};
use kydra_dom::{find_element, layout, Border, Element, Event, Key, Modifiers, Position, Rect, Size};
use kydra_ui::{
    Button, ButtonVariant, Checkbox, HandlerRegistry, InputEdit, InputPhase, InputState,
    NavPosition, Navbar, TextInput, WidgetResult,
};

fn recorder<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, Arc<dyn Fn(T) + Send + Sync>) {
    let seen: Arc<Mutex<Vec<T>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, Arc::new(move |value| sink.lock().unwrap().push(value)))
}

fn counter() -> (Arc<Mutex<u32>>, Arc<dyn Fn() + Send + Sync>) {
    let count = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&count);
    (count, Arc::new(move || *sink.lock().unwrap() += 1))
}

// Text input

#[test]
fn test_input_phase_cycle() {
    let mut state = InputState::new();
    assert_eq!(state.phase(""), InputPhase::UnfocusedEmpty);
    assert!(!state.phase("").is_lifted());

    state.focus("");
    assert_eq!(state.phase(""), InputPhase::FocusedEmpty);
    let InputEdit::Changed(value) = state.edit("", Key::Char('a'), Modifiers::new()) else {
        panic!("typing should change the value");
    };
    assert_eq!(state.phase(&value), InputPhase::FocusedNonempty);

    state.blur();
    assert_eq!(state.phase(&value), InputPhase::UnfocusedNonempty);
    assert!(state.phase(&value).is_lifted());
    assert_eq!(state.phase(""), InputPhase::UnfocusedEmpty);
}

#[test]
fn test_input_cursor_editing() {
    let mut state = InputState::new();
    state.focus("helo");
    assert_eq!(state.cursor(), 4);

    assert_eq!(state.edit("helo", Key::Left, Modifiers::new()), InputEdit::Moved);
    assert_eq!(
        state.edit("helo", Key::Char('l'), Modifiers::new()),
        InputEdit::Changed("hello".into())
    );
    assert_eq!(state.edit("hello", Key::Home, Modifiers::new()), InputEdit::Moved);
    assert_eq!(
        state.edit("hello", Key::Delete, Modifiers::new()),
        InputEdit::Changed("ello".into())
    );
    assert_eq!(state.edit("ello", Key::Backspace, Modifiers::new()), InputEdit::Ignored);
    let ctrl = Modifiers {
        ctrl: true,
        ..Modifiers::new()
    };
    assert_eq!(state.edit("ello", Key::Char('x'), ctrl), InputEdit::Ignored);
    assert_eq!(state.edit("ello", Key::End, Modifiers::new()), InputEdit::Moved);
    assert_eq!(state.cursor(), 4);
    assert_eq!(state.edit("ello", Key::Escape, Modifiers::new()), InputEdit::Cleared);
    assert_eq!(state.edit("", Key::Escape, Modifiers::new()), InputEdit::Ignored);
}

#[test]
fn test_input_events_report_changes() {
    init_logger();
    let (seen, on_change) = recorder::<String>();
    let mut state = InputState::new();
    let input = TextInput::new("name").value("Al").on_change(on_change);

    let focus = Event::Focus {
        target: "name".into(),
    };
    assert_eq!(input.handle_event(&mut state, &focus), WidgetResult::Handled);
    assert!(state.is_focused());
    assert_eq!(
        input.handle_event(&mut state, &Event::key("name", Key::Char('i'))),
        WidgetResult::Changed
    );
    assert_eq!(
        input.handle_event(&mut state, &Event::key("other", Key::Char('i'))),
        WidgetResult::Ignored
    );
    let blur = Event::Blur {
        target: "name".into(),
    };
    input.handle_event(&mut state, &blur);
    assert!(!state.is_focused());

    assert_eq!(*seen.lock().unwrap(), vec!["Ali".to_string()]);
}

#[test]
fn test_input_clear_action() {
    init_logger();
    let (cleared, on_clear) = counter();
    let mut state = InputState::new();
    let input = TextInput::new("q").value("abc").on_clear(on_clear);
    assert!(input.shows_clear());

    let root = input.element(&state);
    assert!(find_element(&root, &input.clear_id()).is_some());
    let result = input.handle_event(&mut state, &Event::click(input.clear_id()));
    assert_eq!(result, WidgetResult::Changed);
    assert_eq!(*cleared.lock().unwrap(), 1);

    let empty = TextInput::new("q").value("").on_clear(Arc::new(|| {}));
    assert!(!empty.shows_clear());
    assert!(find_element(&empty.element(&state), &empty.clear_id()).is_none());
}

#[test]
fn test_clear_without_on_clear_sends_empty_value() {
    let (seen, on_change) = recorder::<String>();
    let mut state = InputState::new();
    let input = TextInput::new("q").value("abc").clearable().on_change(on_change);
    input.handle_event(&mut state, &Event::click(input.clear_id()));
    assert_eq!(*seen.lock().unwrap(), vec![String::new()]);
}

#[test]
fn test_disabled_input_ignores_everything() {
    let (seen, on_change) = recorder::<String>();
    let mut state = InputState::new();
    let input = TextInput::new("q")
        .value("abc")
        .clearable()
        .disabled(true)
        .on_change(on_change);

    assert!(!input.shows_clear());
    let focus = Event::Focus { target: "q".into() };
    assert_eq!(input.handle_event(&mut state, &focus), WidgetResult::Ignored);
    assert_eq!(
        input.handle_event(&mut state, &Event::key("q", Key::Char('x'))),
        WidgetResult::Ignored
    );
    assert!(seen.lock().unwrap().is_empty());
    assert!(find_element(&input.element(&state), "q").unwrap().disabled);
}

#[test]
fn test_input_label_lifts_when_focused() {
    let input = TextInput::new("email")
        .label("Email")
        .placeholder("you@example.com")
        .width(Size::Fixed(30));

    let mut state = InputState::new();
    let (buf, _) = render(&input.element(&state), 40, 4);
    assert_eq!(buf.find_text("Email").map(|(_, y)| y), Some(2));
    assert_eq!(buf.find_text("you@example.com"), None);

    state.focus("");
    let (buf, _) = render(&input.element(&state), 40, 4);
    assert_eq!(buf.find_text("Email"), Some((0, 0)));
    assert_eq!(buf.find_text("you@example.com").map(|(_, y)| y), Some(2));
}

#[test]
fn test_input_error_line() {
    let input = TextInput::new("email")
        .label("Email")
        .value("nope")
        .error("Invalid email")
        .width(Size::Fixed(30));
    let (buf, _) = render(&input.element(&InputState::new()), 40, 5);
    assert_eq!(buf.find_text("Invalid email").map(|(_, y)| y), Some(4));
    assert_eq!(buf.find_text("nope").map(|(_, y)| y), Some(2));
}

// Checkbox

#[test]
fn test_checkbox_toggle_requests_opposite() {
    let (seen, on_change) = recorder::<bool>();
    let unchecked = Checkbox::new(false).on_change(Arc::clone(&on_change));
    assert!(!unchecked.is_checked());
    assert_eq!(unchecked.toggle(), WidgetResult::Changed);
    let checked = Checkbox::new(true).on_change(on_change);
    checked.toggle();
    assert_eq!(*seen.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_disabled_checkbox_ignores_activation() {
    let (seen, on_change) = recorder::<bool>();
    let registry = HandlerRegistry::new();
    let checkbox = Checkbox::new(false).id("cb").disabled(true).on_change(on_change);

    assert_eq!(checkbox.toggle(), WidgetResult::Ignored);
    let element = checkbox.build(&registry);
    assert!(element.disabled);
    assert!(!element.clickable);
    assert!(registry.is_empty());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_checkbox_activation_through_registry() {
    let (seen, on_change) = recorder::<bool>();
    let registry = HandlerRegistry::new();
    Checkbox::new(false).id("remember").on_change(on_change).build(&registry);

    assert_eq!(registry.dispatch(&Event::key("remember", Key::Char(' '))), WidgetResult::Activated);
    assert_eq!(registry.dispatch(&Event::key("remember", Key::Char('x'))), WidgetResult::Ignored);
    assert_eq!(registry.dispatch(&Event::click("remember")), WidgetResult::Activated);
    assert_eq!(*seen.lock().unwrap(), vec![true, true]);
}

#[test]
fn test_checkbox_renders_box_and_label() {
    let checked = Checkbox::new(true).label("Remember me").element();
    let (buf, _) = render(&checked, 20, 1);
    assert_eq!(buf.to_lines()[0], "[✓] Remember me");

    let unchecked = Checkbox::new(false).element();
    let (buf, _) = render(&unchecked, 20, 1);
    assert_eq!(buf.to_lines()[0], "[ ]");
}

// Button

#[test]
fn test_button_defaults_and_min_width() {
    let element = Button::new().element();
    assert_eq!(element.id, "button");
    assert_eq!(element.width, Size::Fixed(14));
    let (buf, _) = render(&element, 20, 1);
    assert!(buf.to_lines()[0].contains("Button"));
}

#[test]
fn test_button_click_runs_handler() {
    init_logger();
    let (count, on_click) = counter();
    let registry = HandlerRegistry::new();
    let button = Button::new().id("save").label("Save").on_click(on_click);

    assert_eq!(button.activate(), WidgetResult::Activated);
    button.build(&registry);
    assert_eq!(registry.dispatch(&Event::click("save")), WidgetResult::Activated);
    assert_eq!(registry.dispatch(&Event::key("save", Key::Enter)), WidgetResult::Activated);
    assert_eq!(*count.lock().unwrap(), 3);

    registry.clear();
    assert_eq!(registry.dispatch(&Event::click("save")), WidgetResult::Ignored);
}

#[test]
fn test_loading_button_is_inert() {
    let (count, on_click) = counter();
    let registry = HandlerRegistry::new();
    let button = Button::new()
        .id("save")
        .label("Save")
        .icon("✓")
        .loading(true)
        .on_click(on_click);

    assert!(!button.is_interactive());
    assert_eq!(button.activate(), WidgetResult::Ignored);
    let element = button.build(&registry);
    assert!(element.disabled);
    assert!(registry.is_empty());
    assert_eq!(*count.lock().unwrap(), 0);

    let (buf, _) = render(&element, 30, 1);
    let line = &buf.to_lines()[0];
    assert!(line.contains("Loading..."));
    assert!(!line.contains("Save"));
}

#[test]
fn test_disabled_button_ignores_activation() {
    let (count, on_click) = counter();
    let button = Button::new().disabled(true).on_click(on_click);
    assert_eq!(button.activate(), WidgetResult::Ignored);
    assert_eq!(*count.lock().unwrap(), 0);
}

#[test]
fn test_button_variants_frame() {
    let dotted = Button::new().variant(ButtonVariant::Dotted).element();
    assert_eq!(dotted.style.border, Border::Dotted);
    let ghost = Button::new().variant(ButtonVariant::GhostHover).element();
    assert_eq!(ghost.style.border, Border::Single);
    let hovered = Button::new().variant(ButtonVariant::GhostHover).hovered(true).element();
    assert!(hovered.style.background.is_some());
    assert!(ghost.style.background.is_none());
}

// Navigation bar

fn nav_items() -> Vec<Element> {
    vec![
        Element::text("Home").id("home").clickable(true),
        Element::text("Docs").id("docs").clickable(true),
    ]
}

#[test]
fn test_navbar_inline_items() {
    let nav = Navbar::new().items(nav_items());
    let (buf, _) = render(&nav.element(), 60, 1);
    let line = &buf.to_lines()[0];
    assert!(line.starts_with("  Kydra Nav"));
    assert!(line.contains("Home"));
    assert!(line.contains("Docs"));
}

#[test]
fn test_navbar_compact_menu_is_caller_controlled() {
    let closed = Navbar::new().compact(true).items(nav_items());
    let root = closed.element();
    assert!(find_element(&root, "navbar-items").is_none());
    assert!(find_element(&root, &closed.menu_id()).is_none());
    let (buf, _) = render(&root, 40, 3);
    assert!(buf.to_lines()[0].ends_with('☰'));

    let open = Navbar::new().compact(true).menu_open(true).items(nav_items());
    let root = open.element();
    assert!(find_element(&root, "home-menu").is_some());
    assert!(find_element(&root, "docs-menu").is_some());
    let (buf, _) = render(&root, 40, 4);
    assert!(buf.to_lines()[0].ends_with('✕'));
    assert!(buf.find_text("Home").is_some());
}

#[test]
fn test_navbar_toggle_runs_handler() {
    init_logger();
    let (count, on_toggle) = counter();
    let registry = HandlerRegistry::new();
    let nav = Navbar::new().compact(true).on_toggle_menu(on_toggle);

    nav.build(&registry);
    assert_eq!(registry.dispatch(&Event::click(nav.toggle_id())), WidgetResult::Activated);
    assert_eq!(nav.toggle_menu(), WidgetResult::Activated);
    assert_eq!(*count.lock().unwrap(), 2);

    let wide = HandlerRegistry::new();
    Navbar::new().on_toggle_menu(Arc::new(|| {})).build(&wide);
    assert!(wide.is_empty());
    assert!(Navbar::is_compact_width(60));
    assert!(!Navbar::is_compact_width(120));
}

#[test]
fn test_navbar_positions() {
    let viewport = Rect::new(0, 0, 60, 20);

    let sticky = Navbar::new().position(NavPosition::Sticky).element();
    assert_eq!(sticky.position, Position::Absolute);
    let rect = layout(&sticky, viewport)["navbar"];
    assert_eq!((rect.x, rect.y, rect.width), (0, 0, 60));

    let floating = Navbar::new().position(NavPosition::FloatingBottom).element();
    let rect = layout(&floating, viewport)["navbar"];
    assert_eq!((rect.x, rect.width), (2, 56));
    assert_eq!(rect.bottom(), 19);
    assert_eq!(floating.style.border, Border::Rounded);
}

#[test]
fn test_navbar_dominant_color_fills_background() {
    let nav = Navbar::new().color_dominant(true).element();
    assert_eq!(nav.style.background, Some(kydra_dom::Color::rgb(99, 102, 241)));
    assert_eq!(nav.style.foreground, Some(kydra_dom::Color::rgb(255, 255, 255)));
}
