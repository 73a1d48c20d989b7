//! EmailAddress value object and the shared email shape predicate.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// `\w` is spelled out as the ASCII word class; the regex crate's `\w` is Unicode-aware.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$",
    )
    .expect("Failed to compile email regex")
});

/// Check whether `email` has the simple email shape accepted by the form.
///
/// Word characters, optionally joined by single dots or hyphens, an `@`,
/// a domain label of the same shape, then one or more `.xx`/`.xxx` suffixes.
/// This is intentionally narrower than RFC 5322: `user+tag@example.com` and
/// `user@example.info` are both rejected.
///
/// Every email check in the crate goes through this predicate.
///
/// # Example
///
/// ```
/// use registration_form::domain::email_is_valid;
///
/// assert!(email_is_valid("user.name@sub.example.com"));
/// assert!(!email_is_valid("user@example"));
/// ```
pub fn email_is_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// A type-safe wrapper for email addresses.
///
/// Only strings accepted by [`email_is_valid`] can be wrapped.
///
/// # Example
///
/// ```
/// use registration_form::domain::EmailAddress;
///
/// let email = EmailAddress::new("ana@example.com").unwrap();
/// assert_eq!(email.as_str(), "ana@example.com");
/// assert!(EmailAddress::new("ana@example").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !email_is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
