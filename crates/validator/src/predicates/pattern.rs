//! Character-class and user-pattern predicates.

use serde_json::Value;

use super::string_form;

/// Returns true iff the value's string form is one or more ASCII letters.
#[must_use]
pub fn is_alpha(value: &Value) -> bool {
    let s = string_form(value);
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Returns true iff the value's string form is one or more ASCII letters or
/// digits.
#[must_use]
pub fn is_alphanumeric(value: &Value) -> bool {
    let s = string_form(value);
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Returns true iff the compiled pattern matches the value's string form.
#[must_use]
pub fn matches_pattern(value: &Value, pattern: &regex::Regex) -> bool {
    pattern.is_match(&string_form(value))
}
