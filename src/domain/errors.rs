//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address does not have the expected shape.
    InvalidEmail(String),

    /// The provided gender is not one of the selectable options.
    InvalidGender(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidGender(gender) => {
                write!(f, "Invalid gender '{}', expected 'male' or 'female'", gender)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
