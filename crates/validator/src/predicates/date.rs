//! ISO-8601 date predicate.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use super::string_form;

/// Accepted shapes, tried in order: full RFC 3339, date-only, and local
/// date-times with `T` or space separators (optional fractional seconds).
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Returns true iff the value's string form parses under a permissive
/// ISO-8601-oriented parser.
///
/// Calendar validity is enforced by the parser itself — `"2023-02-30"`
/// fails even though it is well-shaped.
#[must_use]
pub fn is_date(value: &Value) -> bool {
    let form = string_form(value);
    let s = form.trim();

    DateTime::parse_from_rfc3339(s).is_ok()
        || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(s, fmt).is_ok())
}
