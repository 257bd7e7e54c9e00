//! Column and row-action descriptors.

use std::sync::Arc;

use kydra_dom::{Color, Element, TextAlign};

use crate::model::Value;

/// Custom cell renderer: `(raw value, record, accent color) -> element`.
pub type Formatter<R> = Arc<dyn Fn(&Value, &R, &Color) -> Element + Send + Sync>;

/// Callback receiving the record a row action was chosen for.
pub type ActionHandler<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// A command offered in a row's action menu.
pub struct Action<R> {
    pub label: String,
    pub icon: Option<String>,
    pub color: Option<Color>,
    on_click: ActionHandler<R>,
}

impl<R> Action<R> {
    pub fn new(label: impl Into<String>, on_click: ActionHandler<R>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            color: None,
            on_click,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn invoke(&self, record: &R) {
        (self.on_click)(record);
    }
}

impl<R> Clone for Action<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
            on_click: Arc::clone(&self.on_click),
        }
    }
}

impl<R> std::fmt::Debug for Action<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// Describes one table column.
///
/// # Example
///
/// ```ignore
/// let columns = vec![
///     Column::new("Name", "name").filter(true),
///     Column::new("Salary", "salary").align(TextAlign::Right),
///     Column::new("", "actions").actions(vec![Action::new("Edit", edit)]),
/// ];
/// ```
pub struct Column<R> {
    pub header: String,
    pub accessor: String,
    pub align: TextAlign,
    /// Included in search matching.
    pub filter: bool,
    /// Neither rendered nor exported.
    pub hidden: bool,
    format: Option<Formatter<R>>,
    actions: Option<Vec<Action<R>>>,
}

impl<R> Column<R> {
    pub fn new(header: impl Into<String>, accessor: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor: accessor.into(),
            align: TextAlign::Left,
            filter: false,
            hidden: false,
            format: None,
            actions: None,
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn filter(mut self, filter: bool) -> Self {
        self.filter = filter;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn format(mut self, format: Formatter<R>) -> Self {
        self.format = Some(format);
        self
    }

    /// Render this column as a row action menu instead of a value.
    pub fn actions(mut self, actions: Vec<Action<R>>) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn formatter(&self) -> Option<&Formatter<R>> {
        self.format.as_ref()
    }

    pub fn action_list(&self) -> Option<&[Action<R>]> {
        self.actions.as_deref()
    }

    /// Action columns are never exported, even with an empty action list.
    pub fn has_actions(&self) -> bool {
        self.actions.is_some()
    }

    pub fn is_exported(&self) -> bool {
        !self.hidden && !self.has_actions()
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            align: self.align,
            filter: self.filter,
            hidden: self.hidden,
            format: self.format.clone(),
            actions: self.actions.clone(),
        }
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("filter", &self.filter)
            .field("hidden", &self.hidden)
            .field("formatted", &self.format.is_some())
            .field("actions", &self.actions.as_ref().map(Vec::len))
            .finish()
    }
}
