//! Submission of validated registrations.
//!
//! The form hands every registration that passes validation to a
//! [`SubmitHandler`]. The only handler shipped here writes it to the log.

use crate::error::SubmitResult;
use crate::models::Registration;
use tracing::info;

/// Receives registrations that passed validation.
pub trait SubmitHandler {
    /// Take ownership of the submission outcome for one registration.
    ///
    /// # Errors
    ///
    /// Returns a `SubmitError` when the target refuses or fails to store the
    /// registration.
    fn on_submit(&self, registration: &Registration) -> SubmitResult<()>;
}

/// Handler that logs each validated registration and does nothing else.
///
/// Passwords are redacted by their `Debug` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitHandler;

impl SubmitHandler for LogSubmitHandler {
    fn on_submit(&self, registration: &Registration) -> SubmitResult<()> {
        info!(
            name = %registration.name,
            email = %registration.email,
            phone = ?registration.phone,
            date_birth = ?registration.date_birth,
            gender = ?registration.gender,
            password = ?registration.password,
            "Registration received and validated"
        );
        Ok(())
    }
}

impl<F> SubmitHandler for F
where
    F: Fn(&Registration) -> SubmitResult<()>,
{
    fn on_submit(&self, registration: &Registration) -> SubmitResult<()> {
        self(registration)
    }
}
