//! Data models for the registration form.

pub mod field;
pub mod registration;

pub use field::Field;
pub use registration::{Registration, RegistrationDraft};
