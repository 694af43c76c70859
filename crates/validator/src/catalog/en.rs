//! English messages.

use super::{Violation, display_value, join_values};

pub(crate) fn messages(field: &str, violation: &Violation<'_>) -> String {
    match violation {
        Violation::Required => format!("{field} is required"),
        Violation::Min(min) => format!("{field} must have at least {min} characters"),
        Violation::Max(max) => format!("{field} must have at most {max} characters"),
        Violation::Email => format!("{field} must be a valid email"),
        Violation::Number => format!("{field} must be a number"),
        Violation::Alpha => format!("{field} must contain only letters"),
        Violation::Alphanumeric => format!("{field} must contain only letters and numbers"),
        Violation::Boolean => format!("{field} must be a boolean"),
        Violation::Date => format!("{field} must be a valid date"),
        Violation::Url => format!("{field} must be a valid URL"),
        Violation::In(allowed) => format!("{field} must be one of: {}", join_values(allowed)),
        Violation::Equals(expected) => {
            format!("{field} must be equal to {}", display_value(expected))
        }
        Violation::Password => format!(
            "{field} must contain at least one uppercase letter, one lowercase letter, one number and a minimum of 6 characters"
        ),
        Violation::Pattern(_) => format!("{field} has an invalid format"),
    }
}
