//! Field lookup for list items.
//!
//! The default sort comparator and the search filter both read item values by
//! column name. Column names are dotted paths (`"company.name"`), so nested
//! JSON records work without a hand-written accessor per column.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// A value read from a list item, as seen by the default comparator.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Date(DateTime<Utc>),
    Text(String),
}

impl FieldValue {
    /// Text form used by the search filter. `Null` has none.
    pub fn to_text(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Number(n) => Some(format_number(*n)),
            FieldValue::Date(d) => Some(d.to_rfc3339_opts(SecondsFormat::Secs, true)),
            FieldValue::Text(s) => Some(s.clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Read access to named (possibly nested) fields of a list item.
pub trait FieldAccess {
    /// Look up `path`. Missing fields read as [`FieldValue::Null`].
    fn field(&self, path: &str) -> FieldValue;
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn field(&self, path: &str) -> FieldValue {
        (**self).field(path)
    }
}

impl FieldAccess for Value {
    fn field(&self, path: &str) -> FieldValue {
        match lookup_path(self, path) {
            None | Some(Value::Null) => FieldValue::Null,
            Some(Value::Bool(b)) => FieldValue::Bool(*b),
            Some(Value::Number(n)) => n.as_f64().map_or(FieldValue::Null, FieldValue::Number),
            Some(Value::String(s)) => FieldValue::Text(s.clone()),
            Some(other) => FieldValue::Text(other.to_string()),
        }
    }
}

/// Walk a dotted path through objects and arrays. Array segments are indices.
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}
