//! Prelude module for convenient imports.
//!
//! ```rust
//! use campo_validator::prelude::*;
//!
//! let schema = Schema::new().field("name", FieldRules::new().required().alpha());
//! let validator = Validator::new(schema);
//! ```

pub use crate::catalog::{Catalog, DEFAULT_LANGUAGE, MessageFn, Violation};
pub use crate::engine::{Record, Validator};
pub use crate::error::ConfigError;
pub use crate::report::Report;
pub use crate::schema::{FieldRules, Override, RuleName, Schema};
