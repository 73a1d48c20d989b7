//! Form field identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field of the registration form.
///
/// Errors are addressed by field so the UI can render one message beneath each
/// control. The wire name is the camelCase name the UI binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordConfirmation,
    Phone,
    DateBirth,
    Gender,
    Terms,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::PasswordConfirmation,
        Field::Phone,
        Field::DateBirth,
        Field::Gender,
        Field::Terms,
    ];

    /// Name the UI binds the control to.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordConfirmation => "passwordConfirmation",
            Field::Phone => "phone",
            Field::DateBirth => "dateBirth",
            Field::Gender => "gender",
            Field::Terms => "terms",
        }
    }

    /// Label shown above the control.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Nome completo",
            Field::Email => "Email",
            Field::Password => "Senha",
            Field::PasswordConfirmation => "Confirmar senha",
            Field::Phone => "Telefone",
            Field::DateBirth => "Data de nascimento",
            Field::Gender => "Gênero",
            Field::Terms => "Aceito os termos de uso",
        }
    }

    /// Whether the control is a password input with a visibility toggle.
    pub fn is_password(&self) -> bool {
        matches!(self, Field::Password | Field::PasswordConfirmation)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
