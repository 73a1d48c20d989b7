//! Test fixtures for registration drafts.
//!
//! Drafts built here mirror what the form produces for common user inputs.

use registration_form::RegistrationDraft;

/// Draft that passes validation with only the required fields filled.
#[allow(dead_code)]
pub fn valid_draft() -> RegistrationDraft {
    RegistrationDraft {
        name: "Ana Silva".to_string(),
        email: "ana@example.com".to_string(),
        password: "secret123".to_string(),
        password_confirmation: "secret123".to_string(),
        terms: true,
        ..Default::default()
    }
}

/// Draft where every field is wrong in the most common way.
#[allow(dead_code)]
pub fn invalid_draft() -> RegistrationDraft {
    RegistrationDraft {
        name: String::new(),
        email: "bad-email".to_string(),
        password: "short".to_string(),
        password_confirmation: "different".to_string(),
        terms: false,
        ..Default::default()
    }
}

/// Valid drafts with different combinations of optional fields.
#[allow(dead_code)]
pub fn valid_variants() -> Vec<RegistrationDraft> {
    vec![
        valid_draft(),
        RegistrationDraft {
            phone: Some("(11) 98765-4321".to_string()),
            ..valid_draft()
        },
        RegistrationDraft {
            gender: Some("male".to_string()),
            date_birth: chrono::NaiveDate::from_ymd_opt(1985, 11, 30),
            ..valid_draft()
        },
        RegistrationDraft {
            name: "  José da Silva  ".to_string(),
            email: "jose.silva@mail.com.br".to_string(),
            password: "uma senha longa".to_string(),
            password_confirmation: "uma senha longa".to_string(),
            gender: Some("female".to_string()),
            ..valid_draft()
        },
    ]
}
