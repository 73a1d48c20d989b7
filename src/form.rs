//! Registration form session.
//!
//! Holds what the UI would keep between events: the draft being edited, the
//! error set currently on screen, and widget state (date picker popover,
//! password visibility). Every change replaces part of the draft; validation
//! always receives the whole draft, and its output replaces the displayed
//! errors.

use crate::domain::{apply_phone_mask, birth_date_label};
use crate::error::{FieldErrors, FormError, FormResult};
use crate::metrics::FormMetrics;
use crate::models::{Field, Registration, RegistrationDraft};
use crate::submit::{LogSubmitHandler, SubmitHandler};
use crate::validation::validate;
use chrono::NaiveDate;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// When the form re-validates and refreshes the displayed errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Errors first appear on submit; afterwards every change re-validates.
    #[default]
    OnSubmit,
    /// Every change re-validates.
    OnChange,
    /// A field losing focus re-validates; after the first submit every change
    /// re-validates too.
    OnBlur,
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "onSubmit" => Ok(ValidationMode::OnSubmit),
            "onChange" => Ok(ValidationMode::OnChange),
            "onBlur" => Ok(ValidationMode::OnBlur),
            other => Err(format!(
                "Expected onSubmit, onChange or onBlur, got: {}",
                other
            )),
        }
    }
}

/// One registration form instance.
pub struct RegistrationForm<H = LogSubmitHandler> {
    draft: RegistrationDraft,
    errors: FieldErrors,
    mode: ValidationMode,
    submitted: bool,
    date_picker_open: bool,
    show_password: bool,
    show_password_confirmation: bool,
    handler: H,
    metrics: FormMetrics,
}

impl Default for RegistrationForm<LogSubmitHandler> {
    fn default() -> Self {
        Self::new(LogSubmitHandler)
    }
}

impl<H: SubmitHandler> RegistrationForm<H> {
    /// Create a form with default values and the given submit handler.
    pub fn new(handler: H) -> Self {
        Self {
            draft: RegistrationDraft::default(),
            errors: FieldErrors::new(),
            mode: ValidationMode::default(),
            submitted: false,
            date_picker_open: false,
            show_password: false,
            show_password_confirmation: false,
            handler,
            metrics: FormMetrics::new(),
        }
    }

    /// Set when the form re-validates.
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Record into shared metrics instead of the form's own collector.
    pub fn with_metrics(mut self, metrics: FormMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Replace the whole draft, e.g. with values restored from JSON.
    pub fn load_draft(&mut self, draft: RegistrationDraft) {
        self.draft = draft;
        self.after_change();
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn metrics(&self) -> &FormMetrics {
        &self.metrics
    }

    /// Whether submit was triggered at least once.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.after_change();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
        self.after_change();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.draft.password = password.into();
        self.after_change();
    }

    pub fn set_password_confirmation(&mut self, confirmation: impl Into<String>) {
        self.draft.password_confirmation = confirmation.into();
        self.after_change();
    }

    /// Type into the phone input. The text goes through the phone mask.
    pub fn input_phone(&mut self, typed: &str) {
        self.draft.phone = Some(apply_phone_mask(typed));
        self.after_change();
    }

    /// Pick a gender option; `None` clears the selection.
    ///
    /// The raw value is kept as-is, unknown options are reported by validation.
    pub fn select_gender(&mut self, value: Option<&str>) {
        self.draft.gender = value.map(str::to_string);
        self.after_change();
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.draft.terms = accepted;
        self.after_change();
    }

    /// Whether the date picker popover is showing.
    pub fn is_date_picker_open(&self) -> bool {
        self.date_picker_open
    }

    pub fn open_date_picker(&mut self) {
        self.date_picker_open = true;
    }

    pub fn close_date_picker(&mut self) {
        self.date_picker_open = false;
    }

    /// Click on the picker trigger.
    pub fn toggle_date_picker(&mut self) {
        self.date_picker_open = !self.date_picker_open;
    }

    /// Click on a calendar day: sets the birth date and closes the popover.
    pub fn pick_date(&mut self, date: NaiveDate) {
        self.draft.date_birth = Some(date);
        self.date_picker_open = false;
        self.after_change();
    }

    /// Clear the birth date.
    pub fn clear_date(&mut self) {
        self.draft.date_birth = None;
        self.after_change();
    }

    /// Text on the date picker trigger.
    pub fn date_birth_label(&self) -> String {
        birth_date_label(self.draft.date_birth)
    }

    /// Flip visibility of a password field. Other fields are ignored.
    pub fn toggle_password_visibility(&mut self, field: Field) {
        match field {
            Field::Password => self.show_password = !self.show_password,
            Field::PasswordConfirmation => {
                self.show_password_confirmation = !self.show_password_confirmation
            }
            _ => {}
        }
    }

    /// Whether a password field currently shows its text.
    pub fn is_password_visible(&self, field: Field) -> bool {
        match field {
            Field::Password => self.show_password,
            Field::PasswordConfirmation => self.show_password_confirmation,
            _ => false,
        }
    }

    /// HTML input type of a password field.
    pub fn password_input_type(&self, field: Field) -> &'static str {
        if self.is_password_visible(field) {
            "text"
        } else {
            "password"
        }
    }

    /// A field lost focus.
    pub fn blur(&mut self, field: Field) {
        if self.mode == ValidationMode::OnBlur {
            debug!(%field, "Re-validating on blur");
            self.revalidate();
        }
    }

    /// Errors currently on screen.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message shown beneath a field, if any.
    pub fn error_message(&self, field: Field) -> Option<String> {
        self.errors.message(field)
    }

    /// Validate the whole draft and hand a valid registration to the handler.
    ///
    /// # Errors
    ///
    /// `FormError::Invalid` with every field error when validation fails (the
    /// same errors are now displayed); `FormError::Submit` when the handler fails.
    pub fn submit(&mut self) -> FormResult<Registration> {
        self.submitted = true;
        self.metrics.record_submit_attempt();

        match validate(&self.draft) {
            Ok(registration) => {
                self.errors = FieldErrors::new();
                if let Err(e) = self.handler.on_submit(&registration) {
                    warn!("Submit handler failed: {}", e);
                    self.metrics.record_handler_failure();
                    return Err(FormError::Submit(e));
                }
                self.metrics.record_accepted();
                info!("Registration submitted");
                Ok(registration)
            }
            Err(errors) => {
                info!(
                    invalid_fields = errors.len(),
                    "Registration rejected by validation"
                );
                self.metrics.record_validation_failure(&errors);
                self.errors = errors.clone();
                Err(FormError::Invalid(errors))
            }
        }
    }

    fn after_change(&mut self) {
        let revalidate = match self.mode {
            ValidationMode::OnChange => true,
            ValidationMode::OnSubmit => self.submitted,
            ValidationMode::OnBlur => self.submitted,
        };
        if revalidate {
            self.revalidate();
        }
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.draft).err().unwrap_or_default();
    }
}
