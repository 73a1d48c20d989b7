//! Command-line flow of the `registration-form` binary.
//!
//! The binary reads one JSON draft, submits it through a [`RegistrationForm`]
//! and prints the outcome as a single JSON object on stdout:
//!
//! - `{"status":"ok"}` when the registration was accepted (exit 0)
//! - `{"status":"invalid","errors":{<field>:<message>}}` when validation failed (exit 1)
//! - `{"status":"error","message":...}` when the input is not a draft or the
//!   handler failed (exit 1)

use crate::config::Config;
use crate::error::FormError;
use crate::form::{RegistrationForm, ValidationMode};
use crate::models::RegistrationDraft;
use crate::submit::{LogSubmitHandler, SubmitHandler};
use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::io::Read;
use std::process::ExitCode;
use tracing::{error, info};

/// Argument that prints the draft's JSON Schema instead of submitting.
pub const SCHEMA_FLAG: &str = "--schema";

/// What one run prints on stdout and how the process exits.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub output: Value,
    pub success: bool,
}

impl RunOutcome {
    fn ok() -> Self {
        Self {
            output: json!({ "status": "ok" }),
            success: true,
        }
    }

    fn failed(output: Value) -> Self {
        Self {
            output,
            success: false,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Whether the command line asks for the schema.
pub fn wants_schema<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter().any(|arg| arg.as_ref() == SCHEMA_FLAG)
}

/// Pretty-printed JSON Schema of [`RegistrationDraft`].
pub fn draft_schema() -> Result<String> {
    let schema = schemars::schema_for!(RegistrationDraft);
    serde_json::to_string_pretty(&schema).context("Failed to render the draft schema")
}

/// Read the raw draft: the configured input file when set, `stdin` otherwise.
///
/// # Errors
///
/// Returns an error when the chosen source cannot be read as UTF-8 text.
pub fn read_input(config: &Config, mut stdin: impl Read) -> Result<String> {
    match &config.input_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read draft from {}", path.display())),
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("Failed to read draft from stdin")?;
            Ok(buf)
        }
    }
}

/// Submit a raw JSON draft through a form that logs accepted registrations.
pub fn run(raw: &str, mode: ValidationMode) -> RunOutcome {
    run_with(raw, RegistrationForm::new(LogSubmitHandler).with_mode(mode))
}

/// Submit a raw JSON draft through the given form.
pub fn run_with<H: SubmitHandler>(raw: &str, mut form: RegistrationForm<H>) -> RunOutcome {
    let draft: RegistrationDraft = match serde_json::from_str(raw) {
        Ok(draft) => draft,
        Err(e) => {
            error!("Draft is not a valid registration JSON object: {}", e);
            return RunOutcome::failed(json!({
                "status": "error",
                "message": format!("Draft is not a valid registration JSON object: {}", e),
            }));
        }
    };

    form.load_draft(draft);

    let outcome = match form.submit() {
        Ok(_) => RunOutcome::ok(),
        Err(FormError::Invalid(errors)) => {
            RunOutcome::failed(json!({ "status": "invalid", "errors": errors }))
        }
        Err(FormError::Submit(e)) => {
            error!("Submission failed: {}", e);
            RunOutcome::failed(json!({ "status": "error", "message": e.to_string() }))
        }
    };

    info!(metrics = ?form.metrics().summary(), "Registration form done");
    outcome
}
