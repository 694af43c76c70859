//! Spanish messages — the built-in catalog's default language.

use super::{Violation, display_value, join_values};

pub(crate) fn messages(field: &str, violation: &Violation<'_>) -> String {
    match violation {
        Violation::Required => format!("{field} es requerido"),
        Violation::Min(min) => format!("{field} debe tener al menos {min} caracteres"),
        Violation::Max(max) => format!("{field} debe tener como máximo {max} caracteres"),
        Violation::Email => format!("{field} debe ser un correo electrónico válido"),
        Violation::Number => format!("{field} debe ser un número"),
        Violation::Alpha => format!("{field} solo debe contener letras"),
        Violation::Alphanumeric => format!("{field} solo debe contener letras y números"),
        Violation::Boolean => format!("{field} debe ser un booleano"),
        Violation::Date => format!("{field} debe ser una fecha válida"),
        Violation::Url => format!("{field} debe ser una URL válida"),
        Violation::In(allowed) => format!("{field} debe ser uno de: {}", join_values(allowed)),
        Violation::Equals(expected) => {
            format!("{field} debe ser igual a {}", display_value(expected))
        }
        Violation::Password => format!(
            "{field} debe contener al menos una letra mayúscula, una letra minúscula, un número y un mínimo de 6 caracteres"
        ),
        Violation::Pattern(_) => format!("{field} tiene un formato inválido"),
    }
}
