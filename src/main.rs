//! Registration Form - Main entry point
//!
//! Reads a registration draft as JSON, submits it through the form, and prints
//! the outcome as JSON on stdout. Logs go to stderr.
//!
//! `registration-form --schema` prints the JSON Schema of the draft instead.

use anyhow::Result;
use registration_form::cli::{draft_schema, read_input, run, wants_schema};
use registration_form::Config;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    if wants_schema(std::env::args().skip(1)) {
        println!("{}", draft_schema()?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::from_env()?;

    // Initialize logging (stderr only, stdout carries the result)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(mode = ?config.validation_mode, "Configuration loaded successfully");

    let raw = read_input(&config, std::io::stdin().lock())?;
    let outcome = run(&raw, config.validation_mode);

    println!("{}", outcome.output);
    Ok(outcome.exit_code())
}
