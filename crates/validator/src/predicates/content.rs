//! Email and URL shape predicates.

use std::sync::LazyLock;

use serde_json::Value;

use super::string_form;

// Deliberately permissive: one `@` with non-whitespace on both sides and a
// dot somewhere after it. Full RFC 5322 validation rejects real addresses.
static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Returns true iff the value's string form looks like an email address:
/// exactly one `@`, non-whitespace on both sides, at least one `.` after
/// the `@` segment.
#[must_use]
pub fn is_email(value: &Value) -> bool {
    EMAIL_REGEX.is_match(&string_form(value))
}

/// Returns true iff the value's string form parses as an absolute URL with
/// both a scheme and a host.
#[must_use]
pub fn is_url(value: &Value) -> bool {
    url::Url::parse(&string_form(value)).is_ok_and(|parsed| parsed.has_host())
}
