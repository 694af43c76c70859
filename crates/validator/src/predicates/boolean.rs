//! Boolean-like predicate.

use serde_json::Value;

/// Returns true iff the value is a JSON boolean or one of the strings
/// `"true"` / `"false"`.
#[must_use]
pub fn is_boolean(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::String(s) => s == "true" || s == "false",
        _ => false,
    }
}
