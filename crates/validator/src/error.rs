//! Construction-time configuration errors.
//!
//! Validation itself has no error channel — rule failures are data in the
//! [`Report`](crate::report::Report). Only building a misconfigured
//! [`Catalog`](crate::catalog::Catalog) can fail.

/// A defect in engine configuration, detected at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The catalog's default language has no entry, which would leave
    /// language fallback with nowhere to land.
    #[error("default language `{0}` has no entry in the catalog")]
    MissingDefaultLanguage(String),
}
