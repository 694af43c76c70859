//! Schema types: the ordered field→rules mapping and per-field rule
//! configuration.
//!
//! A [`Schema`] is built once, handed to the engine, and never mutated
//! afterwards. Field iteration order is insertion order, which fixes the
//! order of error messages across calls.

use std::collections::HashMap;

use serde_json::Value;

use crate::catalog::Violation;

// ============================================================================
// RULE NAMES
// ============================================================================

/// The closed set of rule names a field can carry.
///
/// Labels are stable and double as the keys of per-field message overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    Required,
    Min,
    Max,
    Email,
    Number,
    Alpha,
    Alphanumeric,
    Boolean,
    Date,
    Url,
    In,
    Equals,
    Password,
    Pattern,
}

impl RuleName {
    /// Returns the canonical label for this rule.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min => "min",
            Self::Max => "max",
            Self::Email => "email",
            Self::Number => "number",
            Self::Alpha => "alpha",
            Self::Alphanumeric => "alphanumeric",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Url => "url",
            Self::In => "in",
            Self::Equals => "equals",
            Self::Password => "password",
            Self::Pattern => "pattern",
        }
    }
}

// ============================================================================
// MESSAGE OVERRIDES
// ============================================================================

/// A per-field message override for one rule.
///
/// Resolved before any catalog lookup: a literal is used verbatim, a
/// template is called with the field name and the failed rule's parameters.
#[derive(Debug, Clone)]
pub enum Override {
    /// Fixed message text, used as-is.
    Literal(String),
    /// Template function receiving `(field name, violation)`.
    Template(fn(&str, &Violation<'_>) -> String),
}

// ============================================================================
// FIELD RULES
// ============================================================================

/// The rule set attached to a single field.
///
/// One optional slot per known rule — there is no way to attach an unknown
/// rule name. Build fluently:
///
/// ```rust
/// use campo_validator::schema::FieldRules;
///
/// let rules = FieldRules::new().required().email().max(64);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    pub(crate) required: bool,
    pub(crate) min: Option<usize>,
    pub(crate) max: Option<usize>,
    pub(crate) email: bool,
    pub(crate) number: bool,
    pub(crate) alpha: bool,
    pub(crate) alphanumeric: bool,
    pub(crate) boolean: bool,
    pub(crate) date: bool,
    pub(crate) url: bool,
    pub(crate) one_of: Option<Vec<Value>>,
    pub(crate) equals: Option<Value>,
    pub(crate) password: bool,
    pub(crate) pattern: Option<regex::Regex>,
    pub(crate) messages: HashMap<RuleName, Override>,
}

impl FieldRules {
    /// Creates an empty rule set (everything optional, nothing checked).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The field must be present and non-empty. When it is empty, every
    /// other rule on the field is skipped and only the `required` message
    /// is produced.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The value's string form must have at least `min` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// The value's string form must have at most `max` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// The value must look like an email address.
    #[must_use = "builder methods must be chained or built"]
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// The value must convert to a number.
    #[must_use = "builder methods must be chained or built"]
    pub fn number(mut self) -> Self {
        self.number = true;
        self
    }

    /// The value must consist solely of ASCII letters.
    #[must_use = "builder methods must be chained or built"]
    pub fn alpha(mut self) -> Self {
        self.alpha = true;
        self
    }

    /// The value must consist solely of ASCII letters and digits.
    #[must_use = "builder methods must be chained or built"]
    pub fn alphanumeric(mut self) -> Self {
        self.alphanumeric = true;
        self
    }

    /// The value must be a boolean or the strings `"true"` / `"false"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn boolean(mut self) -> Self {
        self.boolean = true;
        self
    }

    /// The value must parse as an ISO-8601 date.
    #[must_use = "builder methods must be chained or built"]
    pub fn date(mut self) -> Self {
        self.date = true;
        self
    }

    /// The value must parse as an absolute URL (scheme and host).
    #[must_use = "builder methods must be chained or built"]
    pub fn url(mut self) -> Self {
        self.url = true;
        self
    }

    /// The value must equal one element of `allowed` (the `in` rule).
    /// Comparison is strict — no type coercion.
    #[must_use = "builder methods must be chained or built"]
    pub fn one_of<I, V>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.one_of = Some(allowed.into_iter().map(Into::into).collect());
        self
    }

    /// The value must strictly equal `expected` — type and value, no
    /// coercion.
    #[must_use = "builder methods must be chained or built"]
    pub fn equals(mut self, expected: impl Into<Value>) -> Self {
        self.equals = Some(expected.into());
        self
    }

    /// The value must satisfy the fixed password-strength rule: one ASCII
    /// uppercase letter, one lowercase letter, one digit, six characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn password(mut self) -> Self {
        self.password = true;
        self
    }

    /// The value's string form must match the compiled pattern.
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(mut self, pattern: regex::Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Overrides the message for one rule on this field with a literal.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, rule: RuleName, text: impl Into<String>) -> Self {
        self.messages.insert(rule, Override::Literal(text.into()));
        self
    }

    /// Overrides the message for one rule on this field with a template
    /// called as `(field name, violation)`.
    #[must_use = "builder methods must be chained or built"]
    pub fn message_with(mut self, rule: RuleName, template: fn(&str, &Violation<'_>) -> String) -> Self {
        self.messages.insert(rule, Override::Template(template));
        self
    }

    /// Looks up the message override for a rule, if any.
    #[must_use]
    pub(crate) fn override_for(&self, rule: RuleName) -> Option<&Override> {
        self.messages.get(&rule)
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// An ordered mapping from field name to [`FieldRules`].
///
/// Insertion order is iteration order, which makes error ordering
/// deterministic. Re-adding a field name replaces its rules in place.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, FieldRules)>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the rules for a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = rules;
        } else {
            self.fields.push((name, rules));
        }
        self
    }

    /// Number of fields in the schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.fields
            .iter()
            .map(|(name, rules)| (name.as_str(), rules))
    }
}

// ============================================================================
// TESTS
// ============================================================================
