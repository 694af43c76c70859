//! French messages.

use super::{Violation, display_value, join_values};

pub(crate) fn messages(field: &str, violation: &Violation<'_>) -> String {
    match violation {
        Violation::Required => format!("{field} est requis"),
        Violation::Min(min) => format!("{field} doit contenir au moins {min} caractères"),
        Violation::Max(max) => format!("{field} doit contenir au plus {max} caractères"),
        Violation::Email => format!("{field} doit être un email valide"),
        Violation::Number => format!("{field} doit être un nombre"),
        Violation::Alpha => format!("{field} ne doit contenir que des lettres"),
        Violation::Alphanumeric => {
            format!("{field} ne doit contenir que des lettres et des chiffres")
        }
        Violation::Boolean => format!("{field} doit être un booléen"),
        Violation::Date => format!("{field} doit être une date valide"),
        Violation::Url => format!("{field} doit être une URL valide"),
        Violation::In(allowed) => format!("{field} doit être l'un de: {}", join_values(allowed)),
        Violation::Equals(expected) => {
            format!("{field} doit être égal à {}", display_value(expected))
        }
        Violation::Password => format!(
            "{field} doit contenir au moins une lettre majuscule, une lettre minuscule, un chiffre et un minimum de 6 caractères"
        ),
        Violation::Pattern(_) => format!("{field} a un format invalide"),
    }
}
