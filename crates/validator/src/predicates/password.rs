//! Password strength predicate.

use serde_json::Value;

use super::string_form;

/// Returns true iff the value's string form contains at least one ASCII
/// uppercase letter, one ASCII lowercase letter, one digit, and is at least
/// 6 characters long. No other character classes are required or rejected.
//
// Char scans instead of a regex: the usual lookahead formulation of this
// rule is not expressible in the regex crate.
#[must_use]
pub fn is_strong_password(value: &Value) -> bool {
    let s = string_form(value);
    s.chars().count() >= 6
        && s.bytes().any(|b| b.is_ascii_uppercase())
        && s.bytes().any(|b| b.is_ascii_lowercase())
        && s.bytes().any(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strong_passwords_pass() {
        assert!(is_strong_password(&json!("Abc123")));
        assert!(is_strong_password(&json!("sup3rS3cret!")));
        assert!(is_strong_password(&json!("aB1 with spaces")));
    }

    #[test]
    fn missing_uppercase_fails() {
        assert!(!is_strong_password(&json!("abc123")));
    }

    #[test]
    fn missing_lowercase_fails() {
        assert!(!is_strong_password(&json!("ABC123")));
    }

    #[test]
    fn missing_digit_fails() {
        assert!(!is_strong_password(&json!("Abcdef")));
    }

    #[test]
    fn too_short_fails() {
        assert!(!is_strong_password(&json!("Ab1")));
    }

    #[test]
    fn non_strings_fail() {
        assert!(!is_strong_password(&json!(123456)));
        assert!(!is_strong_password(&json!(true)));
    }
}
