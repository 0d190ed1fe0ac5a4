//! Lenient readers for loosely-typed JSON record fields.
//!
//! Every reader returns `None` instead of failing, so one bad field never
//! poisons the rest of a record.

use chrono::DateTime;
use serde_json::Value;

/// Largest magnitude accepted for an epoch-millisecond timestamp (±100M days).
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

/// A finite number, given either as a JSON number or a numeric string
pub fn finite_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// An epoch-millisecond timestamp from a number, numeric string, or RFC 3339 string
pub fn epoch_millis(value: Option<&Value>) -> Option<i64> {
    if let Some(Value::String(s)) = value {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(s.trim()) {
            return Some(parsed.timestamp_millis());
        }
    }

    finite_number(value)
        .filter(|v| v.abs() <= MAX_EPOCH_MILLIS as f64)
        .map(|v| v.round() as i64)
}

/// Drop a typed timestamp that falls outside the supported range
pub fn bounded_millis(millis: Option<i64>) -> Option<i64> {
    millis.filter(|m| m.abs() <= MAX_EPOCH_MILLIS)
}

pub fn boolean(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        _ => None,
    }
}

/// Any string, including an empty one
pub fn string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// A usable record id. Numeric ids written by older clients are kept as text.
pub fn identifier(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Id for a persisted record that was saved without one.
///
/// Derived from the record's content and position in its document, so it
/// is the same on every load until the document is rewritten with it.
pub fn derived_identifier(record: &Value, index: usize) -> String {
    let seed = format!("{}#{}", index, record);
    uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, seed.as_bytes()).to_string()
}

/// A lowercase enum tag such as `"green"`, matched case-insensitively
pub fn tag<T: serde::de::DeserializeOwned>(value: Option<&Value>) -> Option<T> {
    match value? {
        Value::String(s) => {
            serde_json::from_value(Value::String(s.trim().to_lowercase())).ok()
        }
        _ => None,
    }
}
