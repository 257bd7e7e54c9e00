//! One body row of a table.

use kydra_dom::{Color, Element, Justify, Size, Style, TextAlign};

use super::column::Column;
use super::command::TableCommand;
use crate::model::Record;
use crate::theme::TableTheme;
use crate::widgets::action_menu::ActionMenu;
use crate::widgets::checkbox::Checkbox;
use crate::widgets::COMMAND_KEY;

/// Everything a row needs from its table.
pub(crate) struct RowContext<'a> {
    pub table_id: &'a str,
    pub theme: &'a TableTheme,
    pub selectable: bool,
    pub menu: &'a ActionMenu,
}

/// Unsized cells of `record`: the selection checkbox (if selectable)
/// followed by one element per visible column.
pub(crate) fn row_cells<R: Record>(
    record: &R,
    columns: &[Column<R>],
    selected: bool,
    cx: &RowContext<'_>,
) -> Vec<Element> {
    let id = record.id();
    let mut cells = Vec::with_capacity(columns.len() + 1);

    if cx.selectable {
        cells.push(
            Checkbox::new(selected)
                .id(format!("{}-select-{}", cx.table_id, id.encode()))
                .color(cx.theme.color.clone())
                .element()
                .data(COMMAND_KEY, TableCommand::ToggleRow(id.clone()).encode()),
        );
    }

    for (index, column) in columns.iter().enumerate().filter(|(_, c)| !c.hidden) {
        let cell = if column.has_actions() {
            cx.menu.trigger(cx.table_id, &id, index, &cx.theme.color)
        } else {
            let value = record.field(&column.accessor);
            match column.formatter() {
                Some(format) => format(&value, record, &cx.theme.color),
                None => Element::text(value.to_string()),
            }
        };
        cells.push(cell);
    }
    cells
}

/// Give `cell` a fixed width and align its content inside it.
pub(crate) fn sized_cell(cell: Element, width: u16, align: TextAlign) -> Element {
    let justify = match align {
        TextAlign::Left => Justify::Start,
        TextAlign::Center => Justify::Center,
        TextAlign::Right => Justify::End,
    };
    Element::row()
        .width(Size::Fixed(width))
        .justify(justify)
        .child(cell)
}

/// Wrap sized cells into a row, highlighted when selected.
pub(crate) fn row_element(id: String, cells: Vec<Element>, selected: bool) -> Element {
    let row = Element::row().id(id).gap(2).width(Size::Fill).children(cells);
    if selected {
        row.style(Style::new().background(Color::var("accent.soft")))
    } else {
        row
    }
}
