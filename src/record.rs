//! Generic record model shared by every admin page.
//!
//! A page's rows are plain serde structs. Everything the list machinery needs
//! (identity, field lookup for search and filters, CSV cells) is derived from the
//! serialized form, so a new page only has to declare its struct and an `id()`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A page's rows. Records are shared so immutable updates keep untouched rows as-is.
pub type Rows<R> = Vec<Arc<R>>;

/// Unique identifier of a record within its list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

impl RecordId {
    /// Interpret a serialized `id` value.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(RecordId::Number),
            serde_json::Value::String(s) => Some(RecordId::Text(s.clone())),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            RecordId::Number(n) => serde_json::Value::from(*n),
            RecordId::Text(s) => serde_json::Value::from(s.clone()),
        }
    }
}

/// Scalar view of a single record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Canonical string form used for search, equality filters, table cells and CSV cells.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join("; "),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<&serde_json::Value> for FieldValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(*b),
            serde_json::Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or_default()),
            serde_json::Value::String(s) => FieldValue::Text(s.clone()),
            serde_json::Value::Array(items) => FieldValue::List(
                items
                    .iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s.clone(),
                        other => FieldValue::from(other).display(),
                    })
                    .collect(),
            ),
            serde_json::Value::Object(_) => FieldValue::Text(value.to_string()),
        }
    }
}

/// One row of domain data (audit log entry, role, ticket, ...).
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the identifier field in the serialized form.
    const ID_FIELD: &'static str = "id";

    fn id(&self) -> RecordId;

    /// Look up a field by its serialized name.
    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = serde_json::to_value(self).ok()?;
        value.get(name).map(FieldValue::from)
    }

    /// Required-field guards run before a create or update is applied.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Serialize a record into its field map, in declaration order.
pub fn to_fields<R: Serialize>(record: &R) -> Option<serde_json::Map<String, serde_json::Value>> {
    match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(map)) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_display_drops_integral_fraction() {
        assert_eq!(FieldValue::Number(42.0).display(), "42");
        assert_eq!(FieldValue::Number(7.5).display(), "7.5");
    }

    #[test]
    fn list_display_joins_items() {
        let value = FieldValue::from(&serde_json::json!(["users.read", "users.write"]));
        assert_eq!(value.display(), "users.read; users.write");
    }

    #[test]
    fn record_id_from_json() {
        assert_eq!(RecordId::from_json(&serde_json::json!(3)), Some(RecordId::Number(3)));
        assert_eq!(
            RecordId::from_json(&serde_json::json!("log-1")),
            Some(RecordId::Text("log-1".to_string()))
        );
        assert_eq!(RecordId::from_json(&serde_json::json!(true)), None);
    }
}
