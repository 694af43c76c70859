//! Set-membership and equality predicates.
//!
//! Both compare JSON values strictly: type and value must match, no
//! coercion. `"1"` is not `1` and `true` is not `"true"`.

use serde_json::Value;

/// Returns true iff the value equals one element of the allowed sequence.
#[must_use]
pub fn is_in(value: &Value, allowed: &[Value]) -> bool {
    allowed.iter().any(|candidate| candidate == value)
}

/// Returns true iff the value strictly equals the expected value.
#[must_use]
pub fn equals(value: &Value, expected: &Value) -> bool {
    value == expected
}
