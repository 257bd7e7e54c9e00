//! Record trait and identity

use std::collections::HashMap;
use std::fmt;

use super::Value;

/// Unique identity of a record within one table's data.
///
/// Selection and row keys are built from these, so two records handed to the
/// same table must never share an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// Compact form used inside element data, e.g. `i:3` or `s:abc`.
    pub fn encode(&self) -> String {
        match self {
            RecordId::Int(n) => format!("i:{n}"),
            RecordId::Text(s) => format!("s:{s}"),
        }
    }

    /// Inverse of [`encode`](Self::encode).
    pub fn parse(encoded: &str) -> Option<Self> {
        let (kind, rest) = encoded.split_once(':')?;
        match kind {
            "i" => rest.parse().ok().map(RecordId::Int),
            "s" => Some(RecordId::Text(rest.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(v: i64) -> Self {
        RecordId::Int(v)
    }
}

impl From<i32> for RecordId {
    fn from(v: i32) -> Self {
        RecordId::Int(v as i64)
    }
}

impl From<&str> for RecordId {
    fn from(v: &str) -> Self {
        RecordId::Text(v.to_string())
    }
}

impl From<String> for RecordId {
    fn from(v: String) -> Self {
        RecordId::Text(v)
    }
}

/// A row of table data.
///
/// Tables only need a stable identity and named attribute lookup; any
/// application type can be displayed by implementing these two methods.
pub trait Record {
    /// Stable identity, unique within the data set.
    fn id(&self) -> RecordId;

    /// Attribute value for a column accessor. Unknown attributes are `Null`.
    fn field(&self, accessor: &str) -> Value;
}

/// A record backed by a map of attribute values.
///
/// Convenient for data that arrives untyped, e.g. JSON rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicRecord {
    id: RecordId,
    fields: HashMap<String, Value>,
}

impl DynamicRecord {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Build a record from a JSON object with an `id` attribute.
    ///
    /// Returns `None` when the value is not an object or its `id` is neither
    /// an integer nor a string.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        let serde_json::Value::Object(map) = value else {
            return None;
        };
        let id = match map.get("id")? {
            serde_json::Value::Number(n) => RecordId::Int(n.as_i64()?),
            serde_json::Value::String(s) => RecordId::Text(s.clone()),
            _ => return None,
        };
        let fields = map.into_iter().map(|(k, v)| (k, Value::from(v))).collect();
        Some(Self { id, fields })
    }
}

impl Record for DynamicRecord {
    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn field(&self, accessor: &str) -> Value {
        self.fields.get(accessor).cloned().unwrap_or_default()
    }
}
