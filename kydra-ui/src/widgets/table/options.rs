//! Table configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::theme::{TableTheme, DEFAULT_TABLE_COLOR};

pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_FILTER_PLACEHOLDER: &str = "Search records...";
pub const DEFAULT_ADD_LABEL: &str = "Add";

/// Serializable part of a table's configuration.
///
/// Callbacks, the empty-state renderer and per-column formatters live on
/// [`DataTable`](super::DataTable) and [`Column`](super::Column) instead.
/// Field names also accept the camelCase spellings used by web front ends
/// (`defaultPageSize`, `customArrayPagination`, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    pub pagination: bool,
    pub selectable: bool,
    #[serde(alias = "customArrayPagination")]
    pub page_size_options: Vec<usize>,
    #[serde(alias = "defaultPageSize")]
    pub default_page_size: usize,
    pub filter: bool,
    #[serde(alias = "filterPlaceholder")]
    pub filter_placeholder: String,
    pub color: String,
    pub add: bool,
    #[serde(alias = "textAdd")]
    pub text_add: String,
    #[serde(alias = "excelExport")]
    pub excel_export: bool,
    #[serde(alias = "darkMode")]
    pub dark_mode: bool,
    /// Where CSV exports are written. Current directory when unset.
    #[serde(alias = "exportDir")]
    pub export_dir: Option<PathBuf>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            pagination: true,
            selectable: false,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
            filter: false,
            filter_placeholder: DEFAULT_FILTER_PLACEHOLDER.into(),
            color: DEFAULT_TABLE_COLOR.into(),
            add: false,
            text_add: DEFAULT_ADD_LABEL.into(),
            excel_export: false,
            dark_mode: false,
            export_dir: None,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pagination(mut self, on: bool) -> Self {
        self.pagination = on;
        self
    }

    pub fn selectable(mut self, on: bool) -> Self {
        self.selectable = on;
        self
    }

    pub fn page_size_options(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = sizes.into();
        self
    }

    pub fn default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn filter(mut self, on: bool) -> Self {
        self.filter = on;
        self
    }

    pub fn filter_placeholder(mut self, text: impl Into<String>) -> Self {
        self.filter_placeholder = text.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn add(mut self, on: bool) -> Self {
        self.add = on;
        self
    }

    pub fn text_add(mut self, text: impl Into<String>) -> Self {
        self.text_add = text.into();
        self
    }

    pub fn excel_export(mut self, on: bool) -> Self {
        self.excel_export = on;
        self
    }

    pub fn dark_mode(mut self, on: bool) -> Self {
        self.dark_mode = on;
        self
    }

    pub fn export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = Some(dir.into());
        self
    }

    /// Initial page size. Zero is not a usable size and falls back to the
    /// default.
    pub fn initial_page_size(&self) -> usize {
        if self.default_page_size == 0 {
            log::warn!("default page size 0 is invalid, using {DEFAULT_PAGE_SIZE}");
            DEFAULT_PAGE_SIZE
        } else {
            self.default_page_size
        }
    }

    /// Theme derived from the color and dark-mode flag.
    pub fn theme(&self) -> TableTheme {
        TableTheme::from_parts(&self.color, self.dark_mode)
    }
}
