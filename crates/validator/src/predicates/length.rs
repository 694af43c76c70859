//! Length-bound predicates over the value's string form.
//!
//! Length is measured in Unicode scalar values, not bytes, so accented and
//! non-Latin input is counted the way a user perceives it.

use serde_json::Value;

use super::string_form;

/// Returns true iff the string form has at least `min` characters.
#[must_use]
pub fn within_min(value: &Value, min: usize) -> bool {
    string_form(value).chars().count() >= min
}

/// Returns true iff the string form has at most `max` characters.
#[must_use]
pub fn within_max(value: &Value, max: usize) -> bool {
    string_form(value).chars().count() <= max
}
