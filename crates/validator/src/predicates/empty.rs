//! Emptiness predicate — the gate every other rule sits behind.

use serde_json::Value;

/// Returns true iff the value is absent, `null`, or the empty string.
///
/// `false` and `0` are present values, not empty ones; only the literal
/// absence of input counts.
#[must_use]
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
