//! Element tree for a table.

use kydra_dom::{measure, Border, Color, Edges, Element, Justify, Size, Style, TextAlign};

use super::command::TableCommand;
use super::pipeline::TableView;
use super::row::{row_cells, row_element, sized_cell, RowContext};
use super::DataTable;
use crate::model::Record;
use crate::widgets::button::{Button, ButtonVariant};
use crate::widgets::checkbox::Checkbox;
use crate::widgets::input::TextInput;
use crate::widgets::COMMAND_KEY;

pub const EMPTY_MESSAGE: &str = "No records to display";
const SEARCH_WIDTH: u16 = 32;
const CELL_GAP: u16 = 2;

impl<R: Record> DataTable<R> {
    /// Build the element tree for `records`.
    pub fn build(&self, records: &[R]) -> Element {
        let view = self.view(records);

        let mut root = Element::col()
            .id(&self.id)
            .width(Size::Fill)
            .gap(1)
            .style(Style::new().foreground(Color::var("foreground")))
            .child_opt(self.toolbar())
            .child(self.grid(&view));

        if self.options.pagination && !view.rows.is_empty() {
            root = root.child(self.footer(&view));
        }

        root.children(self.menu_overlay(&view))
    }

    pub(crate) fn search_input(&self) -> TextInput {
        TextInput::new(self.search_id())
            .value(&self.state.search)
            .label(&self.options.filter_placeholder)
            .icon("⌕")
            .color(self.theme.color.clone())
            .width(Size::Fixed(SEARCH_WIDTH))
            .clearable()
    }

    pub fn search_id(&self) -> String {
        format!("{}-search", self.id)
    }

    fn toolbar(&self) -> Option<Element> {
        let search = self
            .options
            .filter
            .then(|| self.search_input().element(&self.state.search_input));

        let selection = (self.options.selectable && !self.state.selection.is_empty()).then(|| {
            Element::row()
                .id(format!("{}-selection", self.id))
                .gap(2)
                .child(
                    Element::text(format!("{} selected", self.state.selection.len()))
                        .style(Style::new().foreground(self.theme.color.clone()).bold()),
                )
                .child(self.command_button(
                    "delete",
                    Button::new().label("Delete").icon("✕").color(Color::var("danger")),
                    TableCommand::Delete,
                ))
        });

        let export = self.options.excel_export.then(|| {
            self.command_button(
                "export",
                Button::new()
                    .label("Export")
                    .icon("⇩")
                    .variant(ButtonVariant::Dotted)
                    .color(Color::var("success")),
                TableCommand::Export,
            )
        });

        let add = self.options.add.then(|| {
            self.command_button(
                "add",
                Button::new()
                    .label(&self.options.text_add)
                    .icon("+")
                    .color(self.theme.color.clone()),
                TableCommand::Add,
            )
        });

        if search.is_none() && selection.is_none() && export.is_none() && add.is_none() {
            return None;
        }

        let left = Element::row().gap(2).child_opt(search).child_opt(selection);
        let right = Element::row().gap(2).child_opt(export).child_opt(add);
        Some(
            Element::row()
                .id(format!("{}-toolbar", self.id))
                .width(Size::Fill)
                .justify(Justify::SpaceBetween)
                .child(left)
                .child(right),
        )
    }

    fn command_button(&self, name: &str, button: Button, command: TableCommand) -> Element {
        button
            .id(format!("{}-{name}", self.id))
            .element()
            .data(COMMAND_KEY, command.encode())
    }

    fn grid(&self, view: &TableView<'_, R>) -> Element {
        let selectable = self.options.selectable;
        let cx = RowContext {
            table_id: &self.id,
            theme: &self.theme,
            selectable,
            menu: &self.state.menu,
        };

        let mut header: Vec<Element> = Vec::with_capacity(self.columns.len() + 1);
        let mut aligns: Vec<TextAlign> = Vec::with_capacity(self.columns.len() + 1);
        if selectable {
            let page_selected = self.state.selection.contains_all(&view.visible_ids());
            header.push(
                Checkbox::new(page_selected)
                    .id(format!("{}-select-all", self.id))
                    .color(self.theme.color.clone())
                    .element()
                    .data(COMMAND_KEY, TableCommand::ToggleAll.encode()),
            );
            aligns.push(TextAlign::Left);
        }
        for column in self.columns.iter().filter(|c| !c.hidden) {
            let indicator = match self.state.sort_direction(&column.accessor) {
                Some(direction) => direction.glyph(),
                None => "↕",
            };
            let active = self.state.sort_direction(&column.accessor).is_some();
            let fg = if active {
                self.theme.color.clone()
            } else {
                Color::var("muted")
            };
            header.push(
                Element::text(format!("{} {indicator}", column.header))
                    .id(format!("{}-sort-{}", self.id, column.accessor))
                    .clickable(true)
                    .focusable(true)
                    .style(Style::new().foreground(fg).bold())
                    .style_focused(Style::new().underline())
                    .data(COMMAND_KEY, TableCommand::Sort(column.accessor.clone()).encode()),
            );
            aligns.push(column.align);
        }

        let rows: Vec<(String, bool, Vec<Element>)> = view
            .visible()
            .iter()
            .map(|record| {
                let id = record.id();
                let selected = self.state.selection.is_selected(&id);
                let cells = row_cells(*record, &self.columns, selected, &cx);
                (format!("{}-row-{}", self.id, id.encode()), selected, cells)
            })
            .collect();

        // Each column is as wide as its widest cell, header included.
        let widths: Vec<u16> = (0..header.len())
            .map(|i| {
                let header_w = measure(&header[i]).0;
                rows.iter()
                    .map(|(_, _, cells)| measure(&cells[i]).0)
                    .fold(header_w, u16::max)
            })
            .collect();
        let gaps = u16::try_from(widths.len().saturating_sub(1)).unwrap_or(u16::MAX);
        let total_width = widths
            .iter()
            .fold(CELL_GAP.saturating_mul(gaps), |acc, w| acc.saturating_add(*w));

        let header_row = Element::row()
            .id(format!("{}-header", self.id))
            .gap(CELL_GAP)
            .children(
                header
                    .into_iter()
                    .zip(&widths)
                    .zip(&aligns)
                    .map(|((cell, w), align)| sized_cell(cell, *w, *align)),
            );
        let separator = Element::text("─".repeat(total_width as usize))
            .style(Style::new().foreground(Color::var("border")));

        let body = if rows.is_empty() {
            vec![self.empty_element()]
        } else {
            rows.into_iter()
                .map(|(id, selected, cells)| {
                    let cells = cells
                        .into_iter()
                        .zip(&widths)
                        .zip(&aligns)
                        .map(|((cell, w), align)| sized_cell(cell, *w, *align))
                        .collect();
                    row_element(id, cells, selected)
                })
                .collect()
        };

        Element::col()
            .id(format!("{}-grid", self.id))
            .width(Size::Fill)
            .padding(Edges::horizontal(1))
            .style(
                Style::new()
                    .background(Color::var("surface"))
                    .border(Border::Rounded)
                    .border_color(Color::var("border")),
            )
            .child(header_row)
            .child(separator)
            .children(body)
    }

    fn empty_element(&self) -> Element {
        if let Some(render) = &self.empty_state {
            return render(&self.theme);
        }
        Element::row()
            .id(format!("{}-empty", self.id))
            .width(Size::Fill)
            .padding(Edges::symmetric(1, 0))
            .justify(Justify::Center)
            .child(
                Element::text(EMPTY_MESSAGE)
                    .style(Style::new().foreground(Color::var("muted")).italic()),
            )
    }

    fn footer(&self, view: &TableView<'_, R>) -> Element {
        let sizes = self.options.page_size_options.iter().map(|&size| {
            let style = if size == self.state.page_size {
                Style::new()
                    .background(self.theme.color.clone())
                    .foreground(Color::var("on_accent"))
                    .bold()
            } else {
                Style::new().foreground(Color::var("muted"))
            };
            Element::text(size.to_string())
                .id(format!("{}-size-{size}", self.id))
                .padding(Edges::horizontal(1))
                .clickable(true)
                .focusable(true)
                .style(style)
                .data(COMMAND_KEY, TableCommand::PageSize(size).encode())
        });

        let page_sizes = Element::row()
            .gap(1)
            .child(Element::text("Rows per page:").style(Style::new().foreground(Color::var("muted"))))
            .children(sizes);

        let nav = |id: &str, glyph: &str, enabled: bool, command: TableCommand| {
            Element::text(glyph)
                .id(format!("{}-{id}", self.id))
                .padding(Edges::horizontal(1))
                .clickable(enabled)
                .focusable(enabled)
                .disabled(!enabled)
                .style(Style::new().foreground(self.theme.color.clone()).bold())
                .style_disabled(Style::new().foreground(Color::var("muted")).dim())
                .data(COMMAND_KEY, command.encode())
        };

        let pager = Element::row()
            .gap(1)
            .child(nav("prev", "‹", view.has_prev(), TableCommand::PrevPage))
            .child(Element::text(format!("{} / {}", view.page, view.total_pages)))
            .child(nav("next", "›", view.has_next(), TableCommand::NextPage));

        Element::row()
            .id(format!("{}-footer", self.id))
            .width(Size::Fill)
            .justify(Justify::SpaceBetween)
            .child(page_sizes)
            .child(pager)
    }

    /// Menu overlay, only while its record is still on the current page.
    fn menu_overlay(&self, view: &TableView<'_, R>) -> Vec<Element> {
        let Some(open) = self.state.menu.current() else {
            return Vec::new();
        };
        let on_page = view.visible().iter().any(|record| record.id() == open.row);
        match self.columns.get(open.column).and_then(|c| c.action_list()) {
            Some(actions) if on_page => self.state.menu.overlay(&self.id, actions, &self.theme.color),
            _ => Vec::new(),
        }
    }
}

