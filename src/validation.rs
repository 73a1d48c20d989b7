//! Validation contract for the registration form.
//!
//! [`validate`] is a pure function from a [`RegistrationDraft`] to either a typed
//! [`Registration`] or the full set of field errors. Every field is checked on
//! every pass so the UI can show all messages at once.

use crate::domain::{EmailAddress, Gender, Password};
use crate::error::{FieldError, FieldErrors};
use crate::models::{Field, Registration, RegistrationDraft};
use tracing::debug;

/// Validate a draft.
///
/// # Errors
///
/// Returns every failing field with its errors. A mismatched confirmation is
/// reported on `passwordConfirmation` only.
///
/// # Example
///
/// ```
/// use registration_form::models::{Field, RegistrationDraft};
/// use registration_form::validation::validate;
///
/// let draft = RegistrationDraft {
///     name: "Ana Silva".to_string(),
///     email: "ana@example.com".to_string(),
///     password: "secret123".to_string(),
///     password_confirmation: "secret124".to_string(),
///     terms: true,
///     ..Default::default()
/// };
///
/// let errors = validate(&draft).unwrap_err();
/// assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::PasswordConfirmation]);
/// ```
pub fn validate(draft: &RegistrationDraft) -> Result<Registration, FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Err(e) = check_name(&draft.name) {
        errors.add(Field::Name, e);
    }

    let email = match check_email(&draft.email) {
        Ok(email) => Some(email),
        Err(e) => {
            errors.add(Field::Email, e);
            None
        }
    };

    if let Err(e) = check_password(&draft.password) {
        errors.add(Field::Password, e);
    }

    if let Err(e) = check_password_confirmation(&draft.password_confirmation) {
        errors.add(Field::PasswordConfirmation, e);
    }

    // Cross-field rule, after the per-field checks.
    if draft.password != draft.password_confirmation {
        errors.add(Field::PasswordConfirmation, FieldError::Mismatch);
    }

    let gender = match check_gender(draft.gender.as_deref()) {
        Ok(gender) => gender,
        Err(e) => {
            errors.add(Field::Gender, e);
            None
        }
    };

    if let Err(e) = check_terms(draft.terms) {
        errors.add(Field::Terms, e);
    }

    match email {
        Some(email) if errors.is_empty() => {
            debug!("Registration draft is valid");
            Ok(Registration {
                name: draft.name.clone(),
                email,
                password: Password::new(draft.password.as_str()),
                password_confirmation: Password::new(draft.password_confirmation.as_str()),
                phone: normalize_phone(draft.phone.as_deref()),
                date_birth: draft.date_birth,
                gender,
                terms: true,
            })
        }
        _ => {
            debug!(
                invalid_fields = errors.len(),
                "Registration draft failed validation"
            );
            Err(errors)
        }
    }
}

/// Name must contain something other than whitespace.
pub fn check_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError::Required(Field::Name));
    }
    Ok(())
}

/// Email must be present, then match the shared email predicate.
pub fn check_email(email: &str) -> Result<EmailAddress, FieldError> {
    if email.is_empty() {
        return Err(FieldError::Required(Field::Email));
    }
    EmailAddress::new(email).map_err(|_| FieldError::Format)
}

/// Password length is counted in UTF-16 code units.
pub fn check_password(password: &str) -> Result<(), FieldError> {
    if !Password::new(password).meets_min_length() {
        return Err(FieldError::too_short());
    }
    Ok(())
}

pub fn check_password_confirmation(confirmation: &str) -> Result<(), FieldError> {
    if confirmation.is_empty() {
        return Err(FieldError::Required(Field::PasswordConfirmation));
    }
    Ok(())
}

/// Gender is optional; a present value must be one of the options.
pub fn check_gender(gender: Option<&str>) -> Result<Option<Gender>, FieldError> {
    gender
        .map(|value| {
            value.parse::<Gender>().map_err(|_| FieldError::InvalidEnum {
                received: value.to_string(),
            })
        })
        .transpose()
}

pub fn check_terms(terms: bool) -> Result<(), FieldError> {
    if !terms {
        return Err(FieldError::NotAccepted);
    }
    Ok(())
}

/// An untouched masked input yields an empty string, which means "no phone".
fn normalize_phone(phone: Option<&str>) -> Option<String> {
    phone.filter(|p| !p.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            name: "Ana Silva".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret123".to_string(),
            password_confirmation: "secret123".to_string(),
            terms: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_valid_draft() {
        let registration = validate(&valid_draft()).unwrap();
        assert_eq!(registration.name, "Ana Silva");
        assert_eq!(registration.email.as_str(), "ana@example.com");
        assert_eq!(registration.password.expose(), "secret123");
        assert_eq!(registration.password_confirmation.expose(), "secret123");
        assert!(registration.phone.is_none());
        assert!(registration.date_birth.is_none());
        assert!(registration.gender.is_none());
        assert!(registration.terms);
    }

    #[test]
    fn test_validate_optional_fields_are_carried() {
        let date = NaiveDate::from_ymd_opt(1990, 3, 7).unwrap();
        let draft = RegistrationDraft {
            phone: Some("(11) 98765-4321".to_string()),
            date_birth: Some(date),
            gender: Some("female".to_string()),
            ..valid_draft()
        };

        let registration = validate(&draft).unwrap();
        assert_eq!(registration.phone.as_deref(), Some("(11) 98765-4321"));
        assert_eq!(registration.date_birth, Some(date));
        assert_eq!(registration.gender, Some(Gender::Female));
    }

    #[test]
    fn test_validate_empty_phone_becomes_none() {
        let draft = RegistrationDraft {
            phone: Some(String::new()),
            ..valid_draft()
        };
        assert!(validate(&draft).unwrap().phone.is_none());
    }

    #[test]
    fn test_validate_phone_shape_is_not_checked() {
        let draft = RegistrationDraft {
            phone: Some("(11) 9____-____".to_string()),
            ..valid_draft()
        };
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn test_validate_any_birth_date_is_accepted() {
        let future = NaiveDate::from_ymd_opt(2999, 1, 1).unwrap();
        let draft = RegistrationDraft {
            date_birth: Some(future),
            ..valid_draft()
        };
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn test_check_name() {
        assert!(check_name("Ana").is_ok());
        assert_eq!(check_name(""), Err(FieldError::Required(Field::Name)));
        assert_eq!(check_name("   \t"), Err(FieldError::Required(Field::Name)));
    }

    #[test]
    fn test_check_email_required_before_format() {
        assert_eq!(
            check_email("").unwrap_err(),
            FieldError::Required(Field::Email)
        );
        assert_eq!(check_email("bad-email").unwrap_err(), FieldError::Format);
        assert_eq!(check_email("   ").unwrap_err(), FieldError::Format);
        assert!(check_email("ana@example.com").is_ok());
    }

    #[test]
    fn test_check_password_boundary() {
        assert!(check_password("1234567").is_err());
        assert!(check_password("12345678").is_ok());
        assert_eq!(check_password(""), Err(FieldError::too_short()));
    }

    #[test]
    fn test_check_password_counts_utf16_units() {
        // 8 units, 10 bytes
        assert!(check_password("senhaçãé").is_ok());
        // 7 units, 9 bytes
        assert!(check_password("senhaçã").is_err());
        // 4 emoji are 8 units
        assert!(check_password(&"\u{1F600}".repeat(4)).is_ok());
        // 3 emoji and one letter are 7 units
        assert_eq!(
            check_password(&("\u{1F600}".repeat(3) + "a")),
            Err(FieldError::too_short())
        );
    }

    #[test]
    fn test_check_gender() {
        assert_eq!(check_gender(None), Ok(None));
        assert_eq!(check_gender(Some("male")), Ok(Some(Gender::Male)));
        assert_eq!(
            check_gender(Some("other")),
            Err(FieldError::InvalidEnum {
                received: "other".to_string()
            })
        );
        assert!(check_gender(Some("")).is_err());
    }

    #[test]
    fn test_mismatch_only_on_confirmation() {
        let draft = RegistrationDraft {
            password_confirmation: "secret124".to_string(),
            ..valid_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert!(!errors.contains(Field::Password));
        assert_eq!(errors.all(Field::PasswordConfirmation), &[FieldError::Mismatch]);
    }

    #[test]
    fn test_empty_confirmation_is_required_and_mismatched() {
        let draft = RegistrationDraft {
            password_confirmation: String::new(),
            ..valid_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.all(Field::PasswordConfirmation),
            &[
                FieldError::Required(Field::PasswordConfirmation),
                FieldError::Mismatch
            ]
        );
        assert_eq!(
            errors.message(Field::PasswordConfirmation).as_deref(),
            Some("A confirmação de senha é obrigatória.")
        );
    }

    #[test]
    fn test_short_matching_passwords_flag_password_only() {
        let draft = RegistrationDraft {
            password: "short".to_string(),
            password_confirmation: "short".to_string(),
            ..valid_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Password]);
    }

    #[test]
    fn test_terms_alone_fails() {
        let draft = RegistrationDraft {
            terms: false,
            ..valid_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(Field::Terms), Some(&FieldError::NotAccepted));
        assert_eq!(errors.len(), 1);
    }
}
