//! Registration input, raw and validated.

use crate::domain::{EmailAddress, Gender, Password};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Raw field values of the registration form.
///
/// This is the candidate handed to the validation contract. Keys missing from
/// JSON input fall back to the form's default values.
///
/// # Example
///
/// ```
/// use registration_form::models::RegistrationDraft;
///
/// let draft: RegistrationDraft = serde_json::from_str(
///     r#"{"name": "Ana Silva", "passwordConfirmation": "secret123", "terms": true}"#,
/// ).unwrap();
/// assert_eq!(draft.password_confirmation, "secret123");
/// assert!(draft.email.is_empty());
/// assert!(draft.terms);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// Password
    pub password: String,

    /// Password typed a second time
    pub password_confirmation: String,

    /// Masked phone number, `(##) #####-####`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Birth date picked in the calendar (ISO 8601 in JSON)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_birth: Option<NaiveDate>,

    /// Raw gender selector value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Terms of use checkbox. Only a JSON `true` counts as checked.
    #[serde(deserialize_with = "deserialize_strict_true")]
    #[schemars(with = "bool")]
    pub terms: bool,
}

/// Read any JSON value, treating everything except the literal `true` as unchecked.
fn deserialize_strict_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value == serde_json::Value::Bool(true))
}

/// A registration that passed validation.
///
/// Handed to the submit handler, then dropped. Passwords are redacted in both
/// `Debug` and serialized output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: EmailAddress,
    pub password: Password,
    pub password_confirmation: Password,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Always `true` for a validated registration.
    pub terms: bool,
}
