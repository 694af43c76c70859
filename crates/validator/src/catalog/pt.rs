//! Portuguese messages.

use super::{Violation, display_value, join_values};

pub(crate) fn messages(field: &str, violation: &Violation<'_>) -> String {
    match violation {
        Violation::Required => format!("{field} é obrigatório"),
        Violation::Min(min) => format!("{field} deve ter pelo menos {min} caracteres"),
        Violation::Max(max) => format!("{field} deve ter no máximo {max} caracteres"),
        Violation::Email => format!("{field} deve ser um email válido"),
        Violation::Number => format!("{field} deve ser um número"),
        Violation::Alpha => format!("{field} deve conter apenas letras"),
        Violation::Alphanumeric => format!("{field} deve conter apenas letras e números"),
        Violation::Boolean => format!("{field} deve ser um booleano"),
        Violation::Date => format!("{field} deve ser uma data válida"),
        Violation::Url => format!("{field} deve ser uma URL válida"),
        Violation::In(allowed) => format!("{field} deve ser um de: {}", join_values(allowed)),
        Violation::Equals(expected) => {
            format!("{field} deve ser igual a {}", display_value(expected))
        }
        Violation::Password => format!(
            "{field} deve conter pelo menos uma letra maiúscula, uma letra minúscula, um número e no mínimo 6 caracteres"
        ),
        Violation::Pattern(_) => format!("{field} tem um formato inválido"),
    }
}
