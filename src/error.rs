//! Error types for the registration form.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field errors are user-correctable and always reported together; nothing here is fatal.

use crate::domain::MIN_PASSWORD_LENGTH;
use crate::models::Field;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;

/// A validation failure attached to one form field.
///
/// The `Display` output is the message rendered beneath the control.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field was left empty
    #[error("{}", required_message(.0))]
    Required(Field),

    /// The email does not have the accepted shape
    #[error("Formato de email inválido.")]
    Format,

    /// The password has fewer characters than allowed
    #[error("A senha deve ter no mínimo {min} caracteres.")]
    TooShort { min: usize },

    /// The confirmation differs from the password
    #[error("As senhas não coincidem.")]
    Mismatch,

    /// The selector value is not one of the options
    #[error("Selecione um gênero válido.")]
    InvalidEnum { received: String },

    /// The terms of use were not accepted
    #[error("Você deve aceitar os termos de uso.")]
    NotAccepted,
}

fn required_message(field: &Field) -> &'static str {
    match field {
        Field::Name => "O campo nome completo é obrigatório.",
        Field::Email => "O email é obrigatório.",
        Field::PasswordConfirmation => "A confirmação de senha é obrigatória.",
        _ => "Campo obrigatório.",
    }
}

impl FieldError {
    /// The password length error for the form's minimum.
    pub fn too_short() -> Self {
        FieldError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::Required(_) => "required",
            FieldError::Format => "format",
            FieldError::TooShort { .. } => "too_short",
            FieldError::Mismatch => "mismatch",
            FieldError::InvalidEnum { .. } => "invalid_enum",
            FieldError::NotAccepted => "not_accepted",
        }
    }
}

/// Every field error produced by one validation pass.
///
/// Errors are grouped by field in form order; a field keeps its errors in the
/// order the rules produced them, and the first one is the displayed message.
/// Serializes as a map from field name to displayed message.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("registration has {} invalid field(s)", .errors.len())]
pub struct FieldErrors {
    errors: BTreeMap<Field, Vec<FieldError>>,
}

impl FieldErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an error to a field.
    pub fn add(&mut self, field: Field, error: FieldError) {
        self.errors.entry(field).or_default().push(error);
    }

    /// Whether no field has an error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the field has at least one error.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// The displayed error of a field.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field).and_then(|errors| errors.first())
    }

    /// All errors of a field, in rule order.
    pub fn all(&self, field: Field) -> &[FieldError] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The displayed message of a field.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Invalid fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Displayed error of each invalid field, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> + '_ {
        self.errors
            .iter()
            .filter_map(|(field, errors)| errors.first().map(|error| (*field, error)))
    }

    /// Map from field name to displayed message, as rendered by the UI.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, error)| (field.as_str(), error.to_string()))
            .collect()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.messages().serialize(serializer)
    }
}

/// Errors a submit handler can report for a validated registration.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The submission target refused the registration
    #[error("Submission rejected: {0}")]
    Rejected(String),
}

/// Errors that can occur when submitting the form.
#[derive(Error, Debug)]
pub enum FormError {
    /// One or more fields failed validation
    #[error(transparent)]
    Invalid(#[from] FieldErrors),

    /// Validation passed but the submit handler failed
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Environment variable is set but is not valid unicode
    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(String),
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with FormError
pub type FormResult<T> = Result<T, FormError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
