//! # campo-validator
//!
//! A schema-driven field validation engine with localized error messages.
//!
//! A [`Schema`](schema::Schema) maps field names to rule sets; the
//! [`Validator`](engine::Validator) checks a flat input record against it and
//! returns a [`Report`](report::Report) — a success flag plus an ordered list
//! of human-readable messages in the selected language.
//!
//! ## Quick Start
//!
//! ```rust
//! use campo_validator::prelude::*;
//!
//! let schema = Schema::new()
//!     .field("email", FieldRules::new().required().email())
//!     .field("age", FieldRules::new().number());
//!
//! let validator = Validator::new(schema).with_language("en");
//!
//! let record = serde_json::json!({ "email": "a@b.com", "age": "25" });
//! let report = validator.validate(record.as_object().unwrap());
//! assert!(report.success());
//! ```
//!
//! ## Message resolution
//!
//! Each failed rule resolves its message through three layers: the field's
//! per-rule override (literal or template), then the selected language's
//! template in the [`Catalog`](catalog::Catalog), falling back to the
//! catalog's default language (`es` for the built-in catalog) when the
//! requested language has no entry.
//!
//! ## Built-in rules
//!
//! `required`, `min`, `max`, `email`, `number`, `alpha`, `alphanumeric`,
//! `boolean`, `date`, `url`, `in`, `equals`, `password`, `pattern` — see
//! [`predicates`] for the exact contracts. Every predicate is total: bad
//! input fails the rule, it never faults the engine.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod predicates;
pub mod prelude;
pub mod report;
pub mod schema;
