//! Data table - searchable, sortable, paginated, selectable rows.
//!
//! A table is built from caller-owned records on every pass. The table
//! itself only keeps view state (page, search term, sort, selection, open
//! menu) and reports intents through callbacks; it never touches the
//! caller's records.
//!
//! # Example
//!
//! ```ignore
//! let mut table = DataTable::new("people", columns)
//!     .options(TableOptions::new().filter(true).selectable(true))
//!     .on_delete_rows(Arc::new(move |ids| store.remove(&ids)));
//!
//! let root = table.build(&records);
//! let layout = kydra_dom::layout(&root, viewport);
//! // on click:
//! let target = kydra_dom::hit_test(&layout, &root, x, y);
//! table.handle_event(&event, &root, &layout, &records)?;
//! ```

mod column;
mod command;
mod events;
mod export;
mod options;
mod pipeline;
mod render;
mod row;
mod selection;
mod state;

pub use column::{Action, ActionHandler, Column, Formatter};
pub use command::TableCommand;
pub use export::{export_file_name, to_csv, CsvExport, BOM};
pub use options::{
    TableOptions, DEFAULT_ADD_LABEL, DEFAULT_FILTER_PLACEHOLDER, DEFAULT_PAGE_SIZE,
    DEFAULT_PAGE_SIZE_OPTIONS,
};
pub use pipeline::{filter_records, page_count, page_range, sort_records, TableView};
pub use render::EMPTY_MESSAGE;
pub use selection::Selection;
pub use state::{SortDirection, SortState, TableState};

use std::path::PathBuf;
use std::sync::Arc;

use kydra_dom::{Element, Rect};

use crate::error::ExportError;
use crate::handler::{Callback, Handler};
use crate::model::{Record, RecordId};
use crate::theme::TableTheme;
use crate::widget::WidgetResult;

/// Replacement rendering for an empty result set.
pub type EmptyState = Arc<dyn Fn(&TableTheme) -> Element + Send + Sync>;

pub struct DataTable<R> {
    id: String,
    columns: Vec<Column<R>>,
    options: TableOptions,
    theme: TableTheme,
    state: TableState,
    on_delete_rows: Option<Callback<Vec<RecordId>>>,
    action_add: Option<Handler>,
    empty_state: Option<EmptyState>,
}

impl<R: Record> DataTable<R> {
    pub fn new(id: impl Into<String>, columns: Vec<Column<R>>) -> Self {
        let options = TableOptions::default();
        Self {
            id: id.into(),
            columns,
            theme: options.theme(),
            state: TableState::new(options.initial_page_size()),
            options,
            on_delete_rows: None,
            action_add: None,
            empty_state: None,
        }
    }

    /// Apply configuration. Resets the page size to the configured default.
    pub fn options(mut self, options: TableOptions) -> Self {
        self.theme = options.theme();
        self.state.page_size = options.initial_page_size();
        self.state.current_page = 1;
        self.options = options;
        self
    }

    pub fn on_delete_rows(mut self, callback: Callback<Vec<RecordId>>) -> Self {
        self.on_delete_rows = Some(callback);
        self
    }

    pub fn action_add(mut self, handler: Handler) -> Self {
        self.action_add = Some(handler);
        self
    }

    pub fn empty_state(mut self, render: EmptyState) -> Self {
        self.empty_state = Some(render);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    pub fn table_options(&self) -> &TableOptions {
        &self.options
    }

    pub fn theme(&self) -> &TableTheme {
        &self.theme
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn view<'a>(&self, records: &'a [R]) -> TableView<'a, R> {
        TableView::compute(records, &self.columns, &self.options, &self.state)
    }

    // Search

    pub fn search(&self) -> &str {
        &self.state.search
    }

    /// Replace the search term and go back to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) -> WidgetResult {
        let term = term.into();
        if term == self.state.search {
            return WidgetResult::Ignored;
        }
        log::debug!("table {} search {:?}", self.id, term);
        self.state.search = term;
        self.state.current_page = 1;
        WidgetResult::Changed
    }

    // Sort

    pub fn sort(&self) -> Option<&SortState> {
        self.state.sort.as_ref()
    }

    pub fn sort_by(&mut self, accessor: &str) -> WidgetResult {
        let sort = self.state.sort_by(accessor);
        log::debug!("table {} sort {} {:?}", self.id, sort.key, sort.direction);
        WidgetResult::Sorted
    }

    // Selection

    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.state.selection.ids()
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.state.selection.is_selected(id)
    }

    pub fn toggle_row(&mut self, id: RecordId) -> WidgetResult {
        let selected = self.state.selection.toggle(id.clone());
        log::debug!("table {} row {id} selected={selected}", self.id);
        WidgetResult::Changed
    }

    /// Whether the header checkbox shows as checked.
    pub fn is_page_selected(&self, records: &[R]) -> bool {
        self.state
            .selection
            .contains_all(&self.view(records).visible_ids())
    }

    /// Header checkbox: clear everything when the page is fully selected,
    /// otherwise select exactly the current page.
    pub fn toggle_select_all(&mut self, records: &[R]) -> WidgetResult {
        let page_ids = self.view(records).visible_ids();
        if self.state.selection.contains_all(&page_ids) {
            self.state.selection.clear();
            log::debug!("table {} selection cleared", self.id);
        } else {
            log::debug!("table {} selected page of {}", self.id, page_ids.len());
            self.state.selection.replace(page_ids);
        }
        WidgetResult::Changed
    }

    /// Hand the selected ids to `on_delete_rows`, then forget them.
    ///
    /// The selection is cleared immediately; removing the records is up to
    /// the caller.
    pub fn delete_selected(&mut self) -> WidgetResult {
        if self.state.selection.is_empty() {
            return WidgetResult::Ignored;
        }
        let ids = self.state.selection.clear();
        log::debug!("table {} delete {} rows", self.id, ids.len());
        if let Some(on_delete_rows) = &self.on_delete_rows {
            on_delete_rows(ids);
        }
        WidgetResult::Activated
    }

    pub fn add(&self) -> WidgetResult {
        match &self.action_add {
            Some(action_add) => {
                action_add();
                WidgetResult::Activated
            }
            None => WidgetResult::Ignored,
        }
    }

    // Pagination

    /// Raw page number. See [`TableView::page`] for the clamped one.
    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size
    }

    pub fn next_page(&mut self, records: &[R]) -> WidgetResult {
        let view = self.view(records);
        if !view.has_next() {
            return WidgetResult::Ignored;
        }
        self.go_to(view.page + 1)
    }

    pub fn prev_page(&mut self, records: &[R]) -> WidgetResult {
        let view = self.view(records);
        if !view.has_prev() {
            return WidgetResult::Ignored;
        }
        self.go_to(view.page - 1)
    }

    /// Jump to `page`, clamped to the available pages.
    pub fn go_to_page(&mut self, page: usize, records: &[R]) -> WidgetResult {
        let total = self.view(records).total_pages;
        self.go_to(page.clamp(1, total))
    }

    fn go_to(&mut self, page: usize) -> WidgetResult {
        if page == self.state.current_page {
            return WidgetResult::Ignored;
        }
        log::debug!("table {} page {} -> {page}", self.id, self.state.current_page);
        self.state.current_page = page;
        WidgetResult::Changed
    }

    /// Change the page size and go back to the first page. Sizes not offered
    /// in the options are ignored.
    pub fn set_page_size(&mut self, size: usize) -> WidgetResult {
        if size == 0 || !self.options.page_size_options.contains(&size) {
            log::warn!("table {} page size {size} is not an offered choice", self.id);
            return WidgetResult::Ignored;
        }
        log::debug!("table {} page size {size}", self.id);
        self.state.page_size = size;
        self.state.current_page = 1;
        WidgetResult::Changed
    }

    // Export

    /// CSV of every filtered and sorted record, not just the current page.
    pub fn export_csv(&self, records: &[R]) -> Result<CsvExport, ExportError> {
        let view = self.view(records);
        let export = CsvExport::new(&self.columns, &view.rows)?;
        log::debug!(
            "table {} export {} rows as {}",
            self.id,
            view.rows.len(),
            export.file_name
        );
        Ok(export)
    }

    /// Export and write the file into the configured directory.
    pub fn export(&self, records: &[R]) -> Result<PathBuf, ExportError> {
        let dir = self.options.export_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        self.export_csv(records)?.write_to(&dir)
    }

    // Row action menu

    pub fn open_menu(&mut self, row: RecordId, column: usize, anchor: Rect) -> WidgetResult {
        self.state.menu.toggle(row, column, anchor)
    }

    pub fn close_menu(&mut self) -> WidgetResult {
        self.state.menu.close()
    }

    /// Run action `index` of the open menu for its record.
    pub fn select_action(&mut self, records: &[R], index: usize) -> WidgetResult {
        let Some(open) = self.state.menu.current().cloned() else {
            return WidgetResult::Ignored;
        };
        let record = records.iter().find(|r| r.id() == open.row);
        let actions = self.columns.get(open.column).and_then(Column::action_list);
        match (record, actions) {
            (Some(record), Some(actions)) => self.state.menu.select(actions, index, record),
            _ => self.state.menu.close(),
        }
    }
}

impl<R> std::fmt::Debug for DataTable<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("id", &self.id)
            .field("columns", &self.columns)
            .field("options", &self.options)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
