//! Rule predicates
//!
//! The fixed catalog of boolean checks behind each schema rule. Every
//! predicate is a pure, total function: it never panics and never returns an
//! error — a value the check cannot interpret simply fails it (or, for
//! [`is_empty`], passes it).
//!
//! Predicates that inspect text operate on the value's *string form*: strings
//! are used as-is, numbers and booleans through their canonical display form
//! (`"25"`, `"true"`). This mirrors how loosely-typed form input arrives —
//! a numeric field posted as a string must behave like its number.

use std::borrow::Cow;

use serde_json::Value;

mod boolean;
mod content;
mod date;
mod empty;
mod length;
mod membership;
mod numeric;
mod password;
mod pattern;

pub use boolean::is_boolean;
pub use content::{is_email, is_url};
pub use date::is_date;
pub use empty::is_empty;
pub use length::{within_max, within_min};
pub use membership::{equals, is_in};
pub use numeric::is_number;
pub use password::is_strong_password;
pub use pattern::{is_alpha, is_alphanumeric, matches_pattern};

// ============================================================================
// STRING FORM
// ============================================================================

/// Returns the value's string form: the inner string for `Value::String`,
/// the canonical display form for numbers and booleans, the JSON text
/// otherwise.
///
/// Borrows when the value already is a string, allocates only for the
/// coerced cases.
pub(crate) fn string_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        other => Cow::Owned(other.to_string()),
    }
}
