//! Message catalog: language codes mapped to message template functions.
//!
//! Resolution is total by construction. A requested language that has no
//! entry falls back to the catalog's default language as a whole — there is
//! no per-rule fallback — and the default language is guaranteed to have an
//! entry, so rendering can never fail.
//!
//! Each built-in language renders every rule through an exhaustive match on
//! [`Violation`]; a built-in rule without a template in a shipped language
//! does not compile.

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::Value;

use crate::error::ConfigError;
use crate::schema::RuleName;

mod en;
mod es;
mod fr;
mod pt;

// ============================================================================
// VIOLATIONS
// ============================================================================

/// One failed rule, together with the parameters its message needs.
///
/// Borrowed from the schema for the duration of one message render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation<'a> {
    Required,
    Min(usize),
    Max(usize),
    Email,
    Number,
    Alpha,
    Alphanumeric,
    Boolean,
    Date,
    Url,
    /// The allowed values of the `in` rule.
    In(&'a [Value]),
    /// The comparison value of the `equals` rule.
    Equals(&'a Value),
    Password,
    /// The source text of the `pattern` rule's regex.
    Pattern(&'a str),
}

impl Violation<'_> {
    /// The name of the rule that failed.
    #[must_use]
    pub const fn name(&self) -> RuleName {
        match self {
            Self::Required => RuleName::Required,
            Self::Min(_) => RuleName::Min,
            Self::Max(_) => RuleName::Max,
            Self::Email => RuleName::Email,
            Self::Number => RuleName::Number,
            Self::Alpha => RuleName::Alpha,
            Self::Alphanumeric => RuleName::Alphanumeric,
            Self::Boolean => RuleName::Boolean,
            Self::Date => RuleName::Date,
            Self::Url => RuleName::Url,
            Self::In(_) => RuleName::In,
            Self::Equals(_) => RuleName::Equals,
            Self::Password => RuleName::Password,
            Self::Pattern(_) => RuleName::Pattern,
        }
    }
}

/// A language's message set: renders `(field name, violation)` to text.
pub type MessageFn = fn(&str, &Violation<'_>) -> String;

// ============================================================================
// PARAMETER RENDERING
// ============================================================================

/// Display form of a rule parameter: strings without quotes, everything
/// else as its JSON text. Shared by all language modules.
pub(crate) fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// The allowed values of an `in` rule, joined by `", "`.
pub(crate) fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(display_value)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// CATALOG
// ============================================================================

/// The language code the built-in catalog falls back to.
pub const DEFAULT_LANGUAGE: &str = "es";

/// Maps language codes to message sets, with a guaranteed-present default.
///
/// Built once and shared read-only across validation calls. Lookup
/// normalizes the requested code (ASCII-lowercase, region tag stripped), so
/// `"EN"`, `"en-US"` and `"pt_BR"` resolve to their base language.
#[derive(Debug, Clone)]
pub struct Catalog {
    languages: HashMap<String, MessageFn>,
    default_language: String,
    // Cached copy of the default language's entry; keeps `resolve` total
    // without re-checking the map on every call.
    default_messages: MessageFn,
}

impl Catalog {
    /// The built-in catalog: `en`, `es`, `pt`, `fr`, default
    /// [`DEFAULT_LANGUAGE`].
    #[must_use]
    pub fn builtin() -> Self {
        let languages: HashMap<String, MessageFn> = HashMap::from([
            ("en".to_owned(), en::messages as MessageFn),
            ("es".to_owned(), es::messages as MessageFn),
            ("pt".to_owned(), pt::messages as MessageFn),
            ("fr".to_owned(), fr::messages as MessageFn),
        ]);
        Self {
            languages,
            default_language: DEFAULT_LANGUAGE.to_owned(),
            default_messages: es::messages,
        }
    }

    /// Creates a catalog from a full replacement language table.
    ///
    /// Fails with [`ConfigError::MissingDefaultLanguage`] when
    /// `default_language` has no entry in `languages` — the fallback target
    /// must always exist.
    pub fn new(
        languages: HashMap<String, MessageFn>,
        default_language: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let default_language = Self::normalize(&default_language.into());
        let Some(&default_messages) = languages.get(&default_language) else {
            return Err(ConfigError::MissingDefaultLanguage(default_language));
        };
        Ok(Self {
            languages,
            default_language,
            default_messages,
        })
    }

    /// Adds (or replaces) one language entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_language(mut self, code: impl Into<String>, messages: MessageFn) -> Self {
        let code = Self::normalize(&code.into());
        if code == self.default_language {
            self.default_messages = messages;
        }
        self.languages.insert(code, messages);
        self
    }

    /// The code resolution falls back to.
    #[must_use]
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Iterates the registered language codes (arbitrary order).
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Resolves a requested language to its message set, falling back to
    /// the default language when the code has no entry. Total: always
    /// returns a message set.
    #[must_use]
    pub fn resolve(&self, requested: &str) -> MessageFn {
        self.languages
            .get(&Self::normalize(requested))
            .copied()
            .unwrap_or(self.default_messages)
    }

    /// Canonical lookup form of a language code: trimmed, ASCII-lowercased,
    /// region tag after `-` or `_` dropped.
    fn normalize(code: &str) -> String {
        let code = code.trim();
        let base = code.split(['-', '_']).next().unwrap_or(code);
        base.to_ascii_lowercase()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// TESTS
// ============================================================================
