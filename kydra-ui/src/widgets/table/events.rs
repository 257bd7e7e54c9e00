//! Event routing for a table.

use kydra_dom::{find_element, Element, Event, Key, LayoutResult, Rect};

use super::command::TableCommand;
use super::DataTable;
use crate::error::TableError;
use crate::model::Record;
use crate::widget::WidgetResult;
use crate::widgets::action_menu::MenuCommand;
use crate::widgets::input::InputEdit;
use crate::widgets::COMMAND_KEY;

impl<R: Record> DataTable<R> {
    /// Handle an event the host resolved against the tree from
    /// [`build`](Self::build).
    ///
    /// `root` and `layout` must come from the same pass; the layout supplies
    /// the anchor rectangle when an action menu opens.
    pub fn handle_event(
        &mut self,
        event: &Event,
        root: &Element,
        layout: &LayoutResult,
        records: &[R],
    ) -> Result<WidgetResult, TableError> {
        if let Some(result) = self.handle_search_event(event) {
            return Ok(result);
        }

        match event {
            Event::Key {
                key: Key::Escape, ..
            } if self.state.menu.is_open() => Ok(self.close_menu()),
            Event::Click {
                target: Some(target),
                ..
            } => self.dispatch_target(target, root, layout, records),
            Event::Key {
                target: Some(target),
                key: Key::Enter | Key::Char(' '),
                ..
            } => self.dispatch_target(target, root, layout, records),
            _ => Ok(WidgetResult::Ignored),
        }
    }

    fn dispatch_target(
        &mut self,
        target: &str,
        root: &Element,
        layout: &LayoutResult,
        records: &[R],
    ) -> Result<WidgetResult, TableError> {
        let Some(element) = find_element(root, target) else {
            return Ok(WidgetResult::Ignored);
        };
        if element.disabled {
            return Ok(WidgetResult::Ignored);
        }
        let Some(command) = element
            .get_data(COMMAND_KEY)
            .and_then(|encoded| TableCommand::parse(encoded))
        else {
            return Ok(WidgetResult::Ignored);
        };
        let anchor = layout.get(target).copied();
        self.apply(command, anchor, records)
    }

    /// Run a table command. `anchor` is the rectangle of the element that
    /// triggered it, used to position an opening action menu.
    pub fn apply(
        &mut self,
        command: TableCommand,
        anchor: Option<Rect>,
        records: &[R],
    ) -> Result<WidgetResult, TableError> {
        log::trace!("table {} command {}", self.id, command.encode());
        let result = match command {
            TableCommand::Sort(key) => self.sort_by(&key),
            TableCommand::ToggleRow(id) => self.toggle_row(id),
            TableCommand::ToggleAll => self.toggle_select_all(records),
            TableCommand::Delete => self.delete_selected(),
            TableCommand::Add => self.add(),
            TableCommand::Export => {
                self.export(records)?;
                WidgetResult::Activated
            }
            TableCommand::PrevPage => self.prev_page(records),
            TableCommand::NextPage => self.next_page(records),
            TableCommand::PageSize(size) => self.set_page_size(size),
            TableCommand::ClearSearch => self.clear_search(),
            TableCommand::Menu(MenuCommand::Open { column, row }) => {
                self.open_menu(row, column, anchor.unwrap_or_default())
            }
            TableCommand::Menu(MenuCommand::Close) => self.close_menu(),
            TableCommand::Menu(MenuCommand::Select(index)) => self.select_action(records, index),
        };
        Ok(result)
    }

    fn clear_search(&mut self) -> WidgetResult {
        self.state.search_input.reset_cursor();
        self.set_search(String::new())
    }

    /// Events aimed at the search field or its clear button.
    fn handle_search_event(&mut self, event: &Event) -> Option<WidgetResult> {
        if !self.options.filter {
            return None;
        }
        let input = self.search_input();
        let field = input.field_id().to_string();
        let target = event.target()?;

        if target == input.clear_id() {
            return match event {
                Event::Click { .. } if input.shows_clear() => Some(self.clear_search()),
                _ => None,
            };
        }
        if target != field {
            return None;
        }

        match event {
            Event::Key { key, modifiers, .. } => {
                let search = self.state.search.clone();
                let result = match self.state.search_input.edit(&search, *key, *modifiers) {
                    InputEdit::Changed(next) => self.set_search(next),
                    InputEdit::Cleared => self.clear_search(),
                    InputEdit::Moved => WidgetResult::Handled,
                    InputEdit::Ignored => WidgetResult::Ignored,
                };
                Some(result)
            }
            _ => Some(input.handle_event(&mut self.state.search_input, event)),
        }
    }
}
