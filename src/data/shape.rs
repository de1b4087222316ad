//! Response-shape classification and field extraction
//!
//! The upstream providers are inconsistent about response shape: some
//! return a bare JSON array of records, others wrap the array in an
//! object under a named key (e.g. `{"forexList": [...]}`), and error
//! bodies can be arbitrary objects. This module classifies the raw value
//! into a small tagged union so the per-category normalizers all consume
//! rows the same way, and provides the prioritized field-fallback helper
//! they share.

use serde_json::{Map, Value};
use thiserror::Error;

/// Classified shape of a raw provider response
#[derive(Debug)]
pub enum ResponseShape {
    /// Top-level JSON array; its elements are the row source
    List(Vec<Value>),
    /// Object wrapping the row array under a known key
    Wrapped(Vec<Value>),
    /// Anything else; yields no rows
    Unknown,
}

/// Error for a single row element that could not be extracted
#[derive(Debug, Error)]
#[error("row {index} is not a JSON object")]
pub struct RowExtractionError {
    /// Position of the offending element in the row source
    pub index: usize,
}

impl ResponseShape {
    /// Classifies a raw response value
    ///
    /// A top-level array is `List`. An object is `Wrapped` if it holds an
    /// array under the first matching key in `wrapper_keys`. Everything
    /// else is `Unknown`.
    pub fn classify(value: Value, wrapper_keys: &[&str]) -> Self {
        match value {
            Value::Array(items) => ResponseShape::List(items),
            Value::Object(mut map) => {
                for key in wrapper_keys {
                    if let Some(Value::Array(items)) = map.remove(*key) {
                        return ResponseShape::Wrapped(items);
                    }
                }
                ResponseShape::Unknown
            }
            _ => ResponseShape::Unknown,
        }
    }

    /// Returns the row source; `Unknown` yields an empty list
    pub fn into_rows(self) -> Vec<Value> {
        match self {
            ResponseShape::List(items) | ResponseShape::Wrapped(items) => items,
            ResponseShape::Unknown => Vec::new(),
        }
    }
}

/// Borrows a row element as a JSON object, or reports which element failed
pub fn as_record(item: &Value, index: usize) -> Result<&Map<String, Value>, RowExtractionError> {
    item.as_object().ok_or(RowExtractionError { index })
}

/// Extracts a display value using a prioritized key-fallback chain
///
/// Returns the value under the first key that is present and non-null,
/// stringified for display, or `sentinel` when no key matches. Fallback
/// order is significant and preserved per field by the normalizers.
pub fn text_field(record: &Map<String, Value>, keys: &[&str], sentinel: &str) -> String {
    opt_text_field(record, keys).unwrap_or_else(|| sentinel.to_string())
}

/// Like [`text_field`], but leaves the missing case to the caller
///
/// Used where presence changes the formatting (e.g. a `$` prefix is only
/// applied to a real price, never to the sentinel).
pub fn opt_text_field(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| record.get(*key).filter(|v| !v.is_null()))
        .map(display_value)
}

/// Renders a JSON scalar for display without JSON quoting
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
