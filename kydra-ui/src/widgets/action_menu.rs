//! Row action menu - a floating panel anchored to a trigger.
//!
//! The panel is drawn as an absolute overlay on top of everything else, so
//! no ancestor can clip it. Its position comes from the trigger's rectangle
//! as captured when the menu opened; it does not follow the trigger on
//! scroll or resize afterwards.

use kydra_dom::{Border, Color, Edges, Element, Position, Rect, Size, Style};

use super::COMMAND_KEY;
use crate::model::RecordId;
use crate::widget::WidgetResult;
use crate::widgets::table::Action;

/// Panel width in cells.
pub const MENU_WIDTH: u16 = 24;
/// Rows between the trigger's bottom edge and the panel.
pub const MENU_OFFSET: u16 = 1;

const BACKDROP_Z: i16 = 9998;
const PANEL_Z: i16 = 9999;

/// Commands attached to menu elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    /// Toggle the menu of `row` in action column `column`.
    Open { column: usize, row: RecordId },
    Close,
    /// Run the action at this index.
    Select(usize),
}

impl MenuCommand {
    pub fn encode(&self) -> String {
        match self {
            MenuCommand::Open { column, row } => format!("menu:open:{column}:{}", row.encode()),
            MenuCommand::Close => "menu:close".into(),
            MenuCommand::Select(index) => format!("menu:select:{index}"),
        }
    }

    pub fn parse(encoded: &str) -> Option<Self> {
        let rest = encoded.strip_prefix("menu:")?;
        if rest == "close" {
            return Some(MenuCommand::Close);
        }
        if let Some(index) = rest.strip_prefix("select:") {
            return index.parse().ok().map(MenuCommand::Select);
        }
        let (column, row) = rest.strip_prefix("open:")?.split_once(':')?;
        Some(MenuCommand::Open {
            column: column.parse().ok()?,
            row: RecordId::parse(row)?,
        })
    }
}

/// The menu that is currently open, with its anchor snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenMenu {
    pub row: RecordId,
    pub column: usize,
    pub anchor: Rect,
}

/// Open/closed state of a row action menu. At most one is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionMenu {
    open: Option<OpenMenu>,
}

impl ActionMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&OpenMenu> {
        self.open.as_ref()
    }

    pub fn is_open_for(&self, row: &RecordId, column: usize) -> bool {
        self.open
            .as_ref()
            .is_some_and(|open| open.row == *row && open.column == column)
    }

    /// Open the menu for (`row`, `column`) at `anchor`, or close it if that
    /// exact menu is already open.
    pub fn toggle(&mut self, row: RecordId, column: usize, anchor: Rect) -> WidgetResult {
        if self.is_open_for(&row, column) {
            return self.close();
        }
        log::debug!("action menu open for row {row} column {column} at {anchor:?}");
        self.open = Some(OpenMenu { row, column, anchor });
        WidgetResult::Opened
    }

    pub fn close(&mut self) -> WidgetResult {
        match self.open.take() {
            Some(open) => {
                log::debug!("action menu closed for row {}", open.row);
                WidgetResult::Closed
            }
            None => WidgetResult::Ignored,
        }
    }

    /// Run action `index` for `record`, then close.
    pub fn select<R>(&mut self, actions: &[Action<R>], index: usize, record: &R) -> WidgetResult {
        let Some(action) = actions.get(index) else {
            return self.close();
        };
        action.invoke(record);
        self.close();
        WidgetResult::Activated
    }

    /// Top-left corner of the panel: right-aligned with the anchor, just
    /// below it.
    pub fn panel_origin(anchor: Rect) -> (u16, u16) {
        (
            anchor.right().saturating_sub(MENU_WIDTH),
            anchor.bottom().saturating_add(MENU_OFFSET),
        )
    }

    pub fn trigger_id(owner: &str, row: &RecordId, column: usize) -> String {
        format!("{owner}-menu-{column}-{}", row.encode())
    }

    pub fn backdrop_id(owner: &str) -> String {
        format!("{owner}-menu-backdrop")
    }

    pub fn panel_id(owner: &str) -> String {
        format!("{owner}-menu-panel")
    }

    pub fn item_id(owner: &str, index: usize) -> String {
        format!("{owner}-menu-item-{index}")
    }

    /// The `⋯` trigger shown in an action cell.
    pub fn trigger(&self, owner: &str, row: &RecordId, column: usize, accent: &Color) -> Element {
        let open = self.is_open_for(row, column);
        let fg = if open { accent.clone() } else { Color::var("muted") };
        Element::text("⋯")
            .id(Self::trigger_id(owner, row, column))
            .padding(Edges::horizontal(1))
            .clickable(true)
            .focusable(true)
            .style(Style::new().foreground(fg).bold())
            .style_focused(Style::new().foreground(accent.clone()))
            .data(
                COMMAND_KEY,
                MenuCommand::Open {
                    column,
                    row: row.clone(),
                }
                .encode(),
            )
    }

    /// Backdrop and panel elements for the open menu. Empty when closed.
    ///
    /// Both are absolutely positioned, so they can be appended anywhere in
    /// the tree.
    pub fn overlay<R>(&self, owner: &str, actions: &[Action<R>], accent: &Color) -> Vec<Element> {
        let Some(open) = &self.open else {
            return Vec::new();
        };
        let (left, top) = Self::panel_origin(open.anchor);

        let backdrop = Element::box_()
            .id(Self::backdrop_id(owner))
            .position(Position::Absolute)
            .top(0)
            .left(0)
            .right(0)
            .bottom(0)
            .z_index(BACKDROP_Z)
            .clickable(true)
            .data(COMMAND_KEY, MenuCommand::Close.encode());

        let items = actions.iter().enumerate().map(|(index, action)| {
            let fg = action.color.clone().unwrap_or_else(|| Color::var("foreground"));
            let label = match &action.icon {
                Some(icon) => format!("{icon} {}", action.label),
                None => action.label.clone(),
            };
            Element::text(label)
                .id(Self::item_id(owner, index))
                .width(Size::Fill)
                .padding(Edges::horizontal(1))
                .clickable(true)
                .focusable(true)
                .style(Style::new().foreground(fg))
                .style_focused(Style::new().background(accent.clone().alpha(0.15)))
                .data(COMMAND_KEY, MenuCommand::Select(index).encode())
        });

        let panel = Element::col()
            .id(Self::panel_id(owner))
            .position(Position::Absolute)
            .left(left)
            .top(top)
            .width(Size::Fixed(MENU_WIDTH))
            .z_index(PANEL_Z)
            // Swallows clicks on the frame so they don't reach the backdrop.
            .clickable(true)
            .style(
                Style::new()
                    .background(Color::var("surface"))
                    .border(Border::Rounded)
                    .border_color(Color::var("border")),
            )
            .children(items);

        vec![backdrop, panel]
    }
}
