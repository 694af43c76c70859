//! End-to-end engine scenarios: the public contract exercised through the
//! prelude, the way an adapter would drive it.

use std::collections::HashMap;

use campo_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn record(value: serde_json::Value) -> Record {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("record literal must be an object, got {other}"),
    }
}

fn email_schema() -> Schema {
    Schema::new().field("email", FieldRules::new().required().email())
}

// ============================================================================
// CONTRACT SCENARIOS
// ============================================================================

#[test]
fn valid_email_passes() {
    let validator = Validator::new(email_schema()).with_language("en");
    let report = validator.validate(&record(json!({ "email": "a@b.com" })));

    assert!(report.success());
    assert_eq!(report.errors(), Vec::<String>::new().as_slice());
}

#[test]
fn missing_required_email_fails_with_required_message() {
    let validator = Validator::new(email_schema()).with_language("en");
    let report = validator.validate(&record(json!({})));

    assert!(!report.success());
    assert_eq!(report.errors(), ["email is required"]);
}

#[test]
fn malformed_email_fails_with_email_message() {
    let validator = Validator::new(email_schema()).with_language("en");
    let report = validator.validate(&record(json!({ "email": "not-an-email" })));

    assert!(!report.success());
    assert_eq!(report.errors(), ["email must be a valid email"]);
}

#[test]
fn in_rule_lists_allowed_values() {
    let schema =
        Schema::new().field("role", FieldRules::new().one_of(["admin", "user", "guest"]));
    let validator = Validator::new(schema).with_language("es");

    let report = validator.validate(&record(json!({ "role": "superadmin" })));
    assert_eq!(
        report.errors(),
        ["role debe ser uno de: admin, user, guest"]
    );
}

#[test]
fn boolean_passes_while_equality_fails() {
    let schema = Schema::new().field("terms", FieldRules::new().boolean().equals(true));
    let validator = Validator::new(schema).with_language("en");

    let report = validator.validate(&record(json!({ "terms": false })));
    assert_eq!(report.errors(), ["terms must be equal to true"]);
}

#[test]
fn no_language_and_no_hint_defaults_to_spanish() {
    let validator = Validator::new(email_schema());
    let report = validator.validate(&record(json!({})));

    assert_eq!(report.errors(), ["email es requerido"]);
}

// ============================================================================
// LANGUAGES
// ============================================================================

#[rstest]
#[case::english("en", "email is required")]
#[case::spanish("es", "email es requerido")]
#[case::portuguese("pt", "email é obrigatório")]
#[case::french("fr", "email est requis")]
fn required_message_in_every_builtin_language(#[case] language: &str, #[case] expected: &str) {
    let validator = Validator::new(email_schema()).with_language(language);
    let report = validator.validate(&record(json!({})));

    assert_eq!(report.errors(), [expected]);
}

#[rstest]
#[case::region_tag("en-US", "email is required")]
#[case::underscore_region("pt_BR", "email é obrigatório")]
#[case::uppercase("FR", "email est requis")]
#[case::unknown_falls_back("de", "email es requerido")]
fn language_codes_are_normalized_before_lookup(#[case] language: &str, #[case] expected: &str) {
    let validator = Validator::new(email_schema()).with_language(language);
    let report = validator.validate(&record(json!({})));

    assert_eq!(report.errors(), [expected]);
}

#[test]
fn session_hint_selects_language_when_none_is_fixed() {
    let validator = Validator::new(email_schema());

    let hinted = validator.validate_with_hint(&record(json!({})), Some("pt"));
    assert_eq!(hinted.errors(), ["email é obrigatório"]);

    let unhinted = validator.validate_with_hint(&record(json!({})), None);
    assert_eq!(unhinted.errors(), ["email es requerido"]);
}

#[test]
fn fixed_language_wins_over_session_hint() {
    let validator = Validator::new(email_schema()).with_language("fr");
    let report = validator.validate_with_hint(&record(json!({})), Some("en"));

    assert_eq!(report.errors(), ["email est requis"]);
}

// ============================================================================
// MULTI-FIELD / MULTI-RULE AGGREGATION
// ============================================================================

#[test]
fn one_field_can_fail_several_rules_in_declared_order() {
    let schema = Schema::new().field("handle", FieldRules::new().min(10).alpha().url());
    let validator = Validator::new(schema).with_language("en");

    let report = validator.validate(&record(json!({ "handle": "abc123" })));
    assert_eq!(
        report.errors(),
        [
            "handle must have at least 10 characters",
            "handle must contain only letters",
            "handle must be a valid URL"
        ]
    );
}

#[test]
fn messages_aggregate_across_fields_in_schema_order() {
    let schema = Schema::new()
        .field("name", FieldRules::new().required())
        .field("age", FieldRules::new().number())
        .field("site", FieldRules::new().url());
    let validator = Validator::new(schema).with_language("en");

    let report = validator.validate(&record(json!({
        "age": "abc",
        "site": "not a url",
    })));
    assert_eq!(
        report.errors(),
        [
            "name is required",
            "age must be a number",
            "site must be a valid URL"
        ]
    );
}

#[test]
fn full_signup_form_passes() {
    let schema = Schema::new()
        .field("name", FieldRules::new().required().alpha().min(2).max(40))
        .field("email", FieldRules::new().required().email())
        .field("age", FieldRules::new().number())
        .field("role", FieldRules::new().one_of(["admin", "user"]))
        .field("password", FieldRules::new().required().password())
        .field("site", FieldRules::new().url())
        .field("terms", FieldRules::new().required().boolean().equals(true));
    let validator = Validator::new(schema).with_language("en");

    let report = validator.validate(&record(json!({
        "name": "Alice",
        "email": "alice@example.com",
        "age": "30",
        "role": "admin",
        "password": "Sup3rSecret",
        "terms": true,
    })));

    assert!(report.success(), "unexpected errors: {:?}", report.errors());
}

// ============================================================================
// OVERRIDES
// ============================================================================

#[test]
fn literal_override_replaces_catalog_message() {
    let schema = Schema::new().field(
        "email",
        FieldRules::new()
            .required()
            .email()
            .message(RuleName::Required, "give us an email address"),
    );
    let validator = Validator::new(schema).with_language("en");

    let missing = validator.validate(&record(json!({})));
    assert_eq!(missing.errors(), ["give us an email address"]);

    // Only the overridden rule changes; the email rule still uses the
    // catalog.
    let malformed = validator.validate(&record(json!({ "email": "nope" })));
    assert_eq!(malformed.errors(), ["email must be a valid email"]);
}

#[test]
fn template_override_sees_rule_parameters() {
    fn min_template(field: &str, violation: &Violation<'_>) -> String {
        match violation {
            Violation::Min(min) => format!("'{field}' needs {min}+ characters"),
            other => format!("'{field}' failed {}", other.name().as_str()),
        }
    }

    let schema = Schema::new().field(
        "nickname",
        FieldRules::new().min(3).message_with(RuleName::Min, min_template),
    );
    let validator = Validator::new(schema).with_language("en");

    let report = validator.validate(&record(json!({ "nickname": "io" })));
    assert_eq!(report.errors(), ["'nickname' needs 3+ characters"]);
}

// ============================================================================
// CATALOG REPLACEMENT
// ============================================================================

#[test]
fn replacement_catalog_drives_all_messages() {
    fn curt(field: &str, violation: &Violation<'_>) -> String {
        format!("{field}.{}", violation.name().as_str())
    }

    let languages = HashMap::from([("en".to_owned(), curt as MessageFn)]);
    let catalog = Catalog::new(languages, "en").expect("default language is present");

    let schema = Schema::new()
        .field("email", FieldRules::new().required().email())
        .field("age", FieldRules::new().number());
    let validator = Validator::new(schema).with_catalog(catalog);

    // "fr" has no entry in the replacement catalog — falls back to "en".
    let report = validator.validate_with_hint(
        &record(json!({ "email": "nope", "age": "x" })),
        Some("fr"),
    );
    assert_eq!(report.errors(), ["email.email", "age.number"]);
}

#[test]
fn replacement_catalog_must_contain_its_default() {
    fn curt(field: &str, violation: &Violation<'_>) -> String {
        format!("{field}.{}", violation.name().as_str())
    }

    let languages = HashMap::from([("en".to_owned(), curt as MessageFn)]);
    let err = Catalog::new(languages, "es").unwrap_err();
    assert_eq!(err, ConfigError::MissingDefaultLanguage("es".to_owned()));
}

// ============================================================================
// DERIVED VIEWS
// ============================================================================

#[test]
fn report_serializes_and_renders_html() {
    let validator = Validator::new(email_schema()).with_language("en");
    let report = validator.validate(&record(json!({})));

    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({ "success": false, "errors": ["email is required"] })
    );
    assert_eq!(report.to_html(), ["<p>email is required</p>"]);
}

#[test]
fn pattern_rule_uses_compiled_regex() {
    let schema = Schema::new().field(
        "zip",
        FieldRules::new().pattern(regex::Regex::new(r"^\d{5}$").unwrap()),
    );
    let validator = Validator::new(schema).with_language("en");

    assert!(validator.validate(&record(json!({ "zip": "12345" }))).success());
    assert_eq!(
        validator
            .validate(&record(json!({ "zip": "1234" })))
            .errors(),
        ["zip has an invalid format"]
    );
}
