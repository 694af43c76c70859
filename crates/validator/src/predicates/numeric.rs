//! Numeric-string predicate.

use serde_json::Value;

/// Returns true iff the value converts to a number.
///
/// JSON numbers pass outright. Booleans pass (they coerce to 0/1 under the
/// loose conversion this rule models). Strings pass when their trimmed form
/// parses as a finite-or-infinite float — `"25"`, `"-3.5"`, `"1e3"` — but
/// not when they are whitespace-only or textual.
#[must_use]
pub fn is_number(value: &Value) -> bool {
    match value {
        Value::Number(_) | Value::Bool(_) => true,
        Value::String(s) => s.trim().parse::<f64>().is_ok_and(|n| !n.is_nan()),
        _ => false,
    }
}
