//! Navigation bar widget.

use std::sync::Arc;

use kydra_dom::{Border, Color, Content, Edges, Element, Justify, Position, Size, Style};

use crate::handler::{Handler, HandlerRegistry, ON_ACTIVATE};
use crate::widget::WidgetResult;
use crate::widgets::button::DEFAULT_ACCENT;

pub const DEFAULT_NAV_TITLE: &str = "Kydra Nav";

/// Viewports narrower than this get the compact (hamburger) layout.
pub const COMPACT_WIDTH: u16 = 80;

const NAV_Z: i16 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPosition {
    /// In normal flow.
    #[default]
    Static,
    /// Pinned to the top of the viewport.
    Sticky,
    /// Floating near the bottom of the viewport, inset from the sides.
    FloatingBottom,
}

/// A header/footer bar.
///
/// Holds no state. The mobile menu is open when the caller says so, and the
/// toggle only reports through `on_toggle_menu`.
#[derive(Clone)]
pub struct Navbar {
    id: String,
    title: String,
    position: NavPosition,
    color: Color,
    color_dominant: bool,
    compact: bool,
    menu_open: bool,
    on_toggle_menu: Option<Handler>,
    items: Vec<Element>,
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Navbar {
    pub fn new() -> Self {
        Self {
            id: "navbar".into(),
            title: DEFAULT_NAV_TITLE.into(),
            position: NavPosition::Static,
            color: Color::parse_or(DEFAULT_ACCENT, Color::rgb(99, 102, 241)),
            color_dominant: false,
            compact: false,
            menu_open: false,
            on_toggle_menu: None,
            items: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn position(mut self, position: NavPosition) -> Self {
        self.position = position;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Use the color as the bar background, with light text on top.
    pub fn color_dominant(mut self, dominant: bool) -> Self {
        self.color_dominant = dominant;
        self
    }

    /// Compact layout: items move into the toggleable menu.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }

    pub fn on_toggle_menu(mut self, handler: Handler) -> Self {
        self.on_toggle_menu = Some(handler);
        self
    }

    pub fn item(mut self, item: Element) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = Element>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn is_compact_width(width: u16) -> bool {
        width < COMPACT_WIDTH
    }

    pub fn toggle_id(&self) -> String {
        format!("{}-toggle", self.id)
    }

    pub fn menu_id(&self) -> String {
        format!("{}-menu", self.id)
    }

    pub fn toggle_menu(&self) -> WidgetResult {
        match &self.on_toggle_menu {
            Some(handler) => {
                handler();
                WidgetResult::Activated
            }
            None => WidgetResult::Ignored,
        }
    }

    pub fn element(&self) -> Element {
        let light = Color::rgb(255, 255, 255);
        let accent_fg = if self.color_dominant {
            light.clone()
        } else {
            self.color.clone()
        };

        let title = Element::text(&self.title).style(Style::new().foreground(accent_fg.clone()).bold());

        let inline_items = (!self.compact)
            .then(|| Element::row().id(format!("{}-items", self.id)).gap(3).children(self.items.clone()));

        let toggle = self.compact.then(|| {
            Element::text(if self.menu_open { "✕" } else { "☰" })
                .id(self.toggle_id())
                .focusable(true)
                .clickable(true)
                .style(Style::new().foreground(accent_fg.clone()))
        });

        let bar = Element::row()
            .id(format!("{}-bar", self.id))
            .width(Size::Fill)
            .justify(Justify::SpaceBetween)
            .padding(Edges::horizontal(2))
            .child(title)
            .child_opt(inline_items)
            .child_opt(toggle);

        let menu = (self.compact && self.menu_open).then(|| {
            Element::col()
                .id(self.menu_id())
                .padding(Edges::new(1, 2, 0, 2))
                .children(self.items.iter().map(|item| with_id_suffix(item, "menu")))
        });

        let style = if self.color_dominant {
            Style::new().background(self.color.clone()).foreground(light)
        } else {
            Style::new()
                .background(Color::var("surface"))
                .foreground(Color::var("foreground"))
        };

        let root = Element::col()
            .id(&self.id)
            .width(Size::Fill)
            .child(bar)
            .child_opt(menu);

        match self.position {
            NavPosition::Static => root.style(style),
            NavPosition::Sticky => root
                .style(style)
                .position(Position::Absolute)
                .top(0)
                .left(0)
                .right(0)
                .z_index(NAV_Z),
            NavPosition::FloatingBottom => root
                .style(style.border(Border::Rounded).border_color(self.color.clone()))
                .position(Position::Absolute)
                .bottom(1)
                .left(2)
                .right(2)
                .z_index(NAV_Z),
        }
    }

    /// Build the element and register the menu toggle.
    pub fn build(&self, registry: &HandlerRegistry) -> Element {
        if self.compact {
            if let Some(handler) = &self.on_toggle_menu {
                registry.register(&self.toggle_id(), ON_ACTIVATE, Arc::clone(handler));
            }
        }
        self.element()
    }
}

/// Copy of `element` whose ids, and its descendants' ids, carry `suffix`,
/// so the same items can appear twice in one tree.
fn with_id_suffix(element: &Element, suffix: &str) -> Element {
    let mut copy = element.clone();
    suffix_ids(&mut copy, suffix);
    copy
}

fn suffix_ids(element: &mut Element, suffix: &str) {
    element.id = format!("{}-{suffix}", element.id);
    if let Content::Children(children) = &mut element.content {
        for child in children {
            suffix_ids(child, suffix);
        }
    }
}

impl std::fmt::Debug for Navbar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navbar")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("position", &self.position)
            .field("menu_open", &self.menu_open)
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}
