//! Themeable terminal UI components: data table, row action menu, text
//! input, checkbox, button and navigation bar.
//!
//! Components are plain builders. Each pass, the host builds the element
//! tree, lays it out and paints it with `kydra_dom`, hit-tests input and
//! hands the resulting [`Event`](kydra_dom::Event)s back to the component.

pub mod error;
pub mod handler;
pub mod model;
pub mod theme;
pub mod widget;
pub mod widgets;

pub use error::{ExportError, TableError};
pub use handler::{Callback, Handler, HandlerRegistry};
pub use model::{DynamicRecord, Record, RecordId, Value};
pub use theme::TableTheme;
pub use widget::WidgetResult;
pub use widgets::*;
