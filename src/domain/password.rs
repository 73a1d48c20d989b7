//! Password value object.

use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A plain-text password held by a validated registration.
///
/// The value never shows up in `Debug` output or serialized data, so a
/// registration can be logged as a whole.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wrap a password. Length rules are enforced by the validation contract.
    pub fn new(plain_text: impl Into<String>) -> Self {
        Self(plain_text.into())
    }

    /// Length in UTF-16 code units, the unit browsers use for string length.
    ///
    /// Characters outside the Basic Multilingual Plane count as two.
    pub fn len_utf16(&self) -> usize {
        self.0.encode_utf16().count()
    }

    pub fn meets_min_length(&self) -> bool {
        self.len_utf16() >= MIN_PASSWORD_LENGTH
    }

    /// Expose the plain text.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

impl Serialize for Password {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str("[REDACTED]")
    }
}
