//! Records and the dynamic values they expose to columns.

mod record;
mod value;

pub use record::{DynamicRecord, Record, RecordId};
pub use value::Value;
