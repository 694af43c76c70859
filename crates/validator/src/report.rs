//! The validation result type.

use std::fmt;

use serde::Serialize;

/// The outcome of one validation call: a success flag and the ordered list
/// of localized error messages.
///
/// `success == errors.is_empty()` always holds — reports are built only
/// through [`Report::from_errors`], which derives the flag. Serializes as
/// `{"success": bool, "errors": [string]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    success: bool,
    errors: Vec<String>,
}

impl Report {
    /// Builds a report from collected messages, deriving the success flag.
    #[must_use]
    pub(crate) fn from_errors(errors: Vec<String>) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
        }
    }

    /// True when no rule failed.
    #[must_use]
    pub fn success(&self) -> bool {
        self.success
    }

    /// The error messages, in field-then-rule order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the report, yielding the messages.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    /// Derived HTML view: one `<p>` paragraph per error message.
    ///
    /// A pure function of [`errors`](Self::errors) — carried for adapters
    /// that render error lists as markup.
    #[must_use]
    pub fn to_html(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|error| format!("<p>{error}</p>"))
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            return write!(f, "validation passed");
        }
        writeln!(f, "validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
