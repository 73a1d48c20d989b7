//! Registration Form - validation contract and form session for a user-registration form.
//!
//! The library turns raw field input into either a typed, validated
//! registration or a field-by-field set of error messages, and keeps the
//! widget state a registration form needs around that contract.
//!
//! # Architecture
//!
//! - **domain**: Value objects (email predicate, gender, password, phone mask, birth date)
//! - **models**: Raw draft, validated registration, and field identifiers
//! - **validation**: The pure validation contract
//! - **error**: Custom error types for precise error handling
//! - **form**: Form session driving validation on submit/change/blur
//! - **submit**: Submit handler trait and the logging handler
//! - **metrics**: Submission counters
//! - **config**: Configuration management from environment variables
//! - **cli**: Read, submit and render steps of the command-line binary

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod submit;
pub mod validation;

// Re-export commonly used types
pub use cli::{run, RunOutcome};
pub use config::Config;
pub use domain::{apply_phone_mask, email_is_valid, EmailAddress, Gender, Password};
pub use error::{ConfigError, FieldError, FieldErrors, FormError, SubmitError};
pub use form::{RegistrationForm, ValidationMode};
pub use metrics::{FormMetrics, MetricsSummary};
pub use models::{Field, Registration, RegistrationDraft};
pub use submit::{LogSubmitHandler, SubmitHandler};
pub use validation::validate;
