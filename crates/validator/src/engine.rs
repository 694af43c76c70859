//! The validation engine: walks a schema over an input record and collects
//! localized failure messages.

use smallvec::SmallVec;

use crate::catalog::{Catalog, MessageFn, Violation};
use crate::predicates;
use crate::report::Report;
use crate::schema::{FieldRules, Override, Schema};

/// A flat input record: field name to scalar value.
pub type Record = serde_json::Map<String, serde_json::Value>;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Checks records against a [`Schema`], producing a [`Report`] per call.
///
/// Construction fixes the schema, the catalog, and optionally the language;
/// after that the validator is read-only and safe to share across threads.
/// Validation is a pure function of (schema, record, language, catalog) —
/// the engine keeps no per-call state and never mutates its inputs.
///
/// ```rust
/// use campo_validator::prelude::*;
///
/// let validator = Validator::new(
///     Schema::new().field("email", FieldRules::new().required().email()),
/// )
/// .with_language("en");
///
/// let record = serde_json::json!({ "email": "not-an-email" });
/// let report = validator.validate(record.as_object().unwrap());
/// assert_eq!(report.errors(), ["email must be a valid email"]);
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    schema: Schema,
    catalog: Catalog,
    language: Option<String>,
}

impl Validator {
    /// Creates a validator over `schema` with the built-in catalog and no
    /// fixed language.
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            catalog: Catalog::builtin(),
            language: None,
        }
    }

    /// Fixes the message language. A fixed language always wins over the
    /// per-call hint.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Replaces the message catalog wholesale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The schema this validator checks against.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The catalog messages resolve through.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validates a record without a session language hint.
    #[must_use]
    pub fn validate(&self, record: &Record) -> Report {
        self.validate_with_hint(record, None)
    }

    /// Validates a record, selecting the message language as: fixed
    /// language if configured, else the session `hint`, else the catalog's
    /// default.
    ///
    /// Fields are processed in schema order. An empty value on a `required`
    /// field produces exactly the `required` message and skips the field's
    /// other rules; an empty value on an optional field produces nothing.
    /// A present value runs every configured rule — no short-circuiting —
    /// so one field can collect several messages in one call.
    #[must_use]
    pub fn validate_with_hint(&self, record: &Record, hint: Option<&str>) -> Report {
        let language = self
            .language
            .as_deref()
            .or(hint)
            .unwrap_or_else(|| self.catalog.default_language());
        let messages = self.catalog.resolve(language);

        let mut errors = Vec::new();
        for (field, rules) in self.schema.iter() {
            let value = record.get(field);

            if predicates::is_empty(value) {
                // The required gate short-circuits the field's other rules;
                // an optional empty field is simply valid.
                if rules.required {
                    errors.push(render(rules, messages, field, &Violation::Required));
                }
                tracing::trace!(field, empty = true, "field evaluated");
                continue;
            }
            // Non-empty implies present.
            let Some(value) = value else { continue };

            let failures = check_present(rules, messages, field, value);
            tracing::trace!(field, failures = failures.len(), "field evaluated");
            errors.extend(failures);
        }

        tracing::debug!(
            fields = self.schema.len(),
            errors = errors.len(),
            language,
            "validation finished"
        );
        Report::from_errors(errors)
    }
}

// ============================================================================
// RULE EVALUATION
// ============================================================================

/// Runs every configured rule against a present, non-empty value, in the
/// fixed declared order: min, max, email, number, alpha, alphanumeric,
/// boolean, date, url, in, equals, password, pattern.
fn check_present(
    rules: &FieldRules,
    messages: MessageFn,
    field: &str,
    value: &serde_json::Value,
) -> SmallVec<[String; 2]> {
    let mut failures: SmallVec<[String; 2]> = SmallVec::new();

    if let Some(min) = rules.min
        && !predicates::within_min(value, min)
    {
        failures.push(render(rules, messages, field, &Violation::Min(min)));
    }
    if let Some(max) = rules.max
        && !predicates::within_max(value, max)
    {
        failures.push(render(rules, messages, field, &Violation::Max(max)));
    }
    if rules.email && !predicates::is_email(value) {
        failures.push(render(rules, messages, field, &Violation::Email));
    }
    if rules.number && !predicates::is_number(value) {
        failures.push(render(rules, messages, field, &Violation::Number));
    }
    if rules.alpha && !predicates::is_alpha(value) {
        failures.push(render(rules, messages, field, &Violation::Alpha));
    }
    if rules.alphanumeric && !predicates::is_alphanumeric(value) {
        failures.push(render(rules, messages, field, &Violation::Alphanumeric));
    }
    if rules.boolean && !predicates::is_boolean(value) {
        failures.push(render(rules, messages, field, &Violation::Boolean));
    }
    if rules.date && !predicates::is_date(value) {
        failures.push(render(rules, messages, field, &Violation::Date));
    }
    if rules.url && !predicates::is_url(value) {
        failures.push(render(rules, messages, field, &Violation::Url));
    }
    if let Some(allowed) = &rules.one_of
        && !predicates::is_in(value, allowed)
    {
        failures.push(render(rules, messages, field, &Violation::In(allowed)));
    }
    if let Some(expected) = &rules.equals
        && !predicates::equals(value, expected)
    {
        failures.push(render(rules, messages, field, &Violation::Equals(expected)));
    }
    if rules.password && !predicates::is_strong_password(value) {
        failures.push(render(rules, messages, field, &Violation::Password));
    }
    if let Some(pattern) = &rules.pattern
        && !predicates::matches_pattern(value, pattern)
    {
        failures.push(render(rules, messages, field, &Violation::Pattern(pattern.as_str())));
    }

    failures
}

/// Resolves one failed rule to its message: per-field override first, then
/// the selected language's template.
fn render(rules: &FieldRules, messages: MessageFn, field: &str, violation: &Violation<'_>) -> String {
    match rules.override_for(violation.name()) {
        Some(Override::Literal(text)) => text.clone(),
        Some(Override::Template(template)) => template(field, violation),
        None => messages(field, violation),
    }
}

// ============================================================================
// TESTS
// ============================================================================
