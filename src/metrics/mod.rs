//! Basic metrics instrumentation for the registration form.
//!
//! Provides counters for submit attempts, outcomes, and per-field validation failures.

use crate::error::FieldErrors;
use crate::models::Field;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for form submissions.
#[derive(Debug, Clone)]
pub struct FormMetrics {
    /// Total number of submit attempts
    submit_attempts_total: Arc<AtomicU64>,

    /// Submissions that passed validation and were accepted by the handler
    submissions_accepted_total: Arc<AtomicU64>,

    /// Submit attempts rejected by validation
    validation_failures_total: Arc<AtomicU64>,

    /// Submissions the handler failed on
    handler_failures_total: Arc<AtomicU64>,

    /// Validation failures per field, indexed like `Field::ALL`
    field_failures: Arc<[AtomicU64; 8]>,
}

impl Default for FormMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl FormMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            submit_attempts_total: Arc::new(AtomicU64::new(0)),
            submissions_accepted_total: Arc::new(AtomicU64::new(0)),
            validation_failures_total: Arc::new(AtomicU64::new(0)),
            handler_failures_total: Arc::new(AtomicU64::new(0)),
            field_failures: Arc::new(Default::default()),
        }
    }

    /// Record a submit attempt.
    pub fn record_submit_attempt(&self) {
        self.submit_attempts_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a submission the handler accepted.
    pub fn record_accepted(&self) {
        self.submissions_accepted_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a submission the handler failed on.
    pub fn record_handler_failure(&self) {
        self.handler_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed validation and each field it flagged.
    pub fn record_validation_failure(&self, errors: &FieldErrors) {
        self.validation_failures_total
            .fetch_add(1, Ordering::Relaxed);
        for field in errors.fields() {
            self.field_failures[field_index(field)].fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get total submit attempts.
    pub fn submit_attempts_total(&self) -> u64 {
        self.submit_attempts_total.load(Ordering::Relaxed)
    }

    /// Get total accepted submissions.
    pub fn submissions_accepted_total(&self) -> u64 {
        self.submissions_accepted_total.load(Ordering::Relaxed)
    }

    /// Get total failed validations.
    pub fn validation_failures_total(&self) -> u64 {
        self.validation_failures_total.load(Ordering::Relaxed)
    }

    /// Get total handler failures.
    pub fn handler_failures_total(&self) -> u64 {
        self.handler_failures_total.load(Ordering::Relaxed)
    }

    /// Get how many failed validations flagged `field`.
    pub fn field_failures(&self, field: Field) -> u64 {
        self.field_failures[field_index(field)].load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.submit_attempts_total.store(0, Ordering::Relaxed);
        self.submissions_accepted_total.store(0, Ordering::Relaxed);
        self.validation_failures_total.store(0, Ordering::Relaxed);
        self.handler_failures_total.store(0, Ordering::Relaxed);
        for counter in self.field_failures.iter() {
            counter.store(0, Ordering::Relaxed);
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submit_attempts_total: self.submit_attempts_total(),
            submissions_accepted_total: self.submissions_accepted_total(),
            validation_failures_total: self.validation_failures_total(),
            handler_failures_total: self.handler_failures_total(),
            field_failures: Field::ALL
                .into_iter()
                .map(|field| (field.as_str(), self.field_failures(field)))
                .filter(|(_, count)| *count > 0)
                .collect(),
        }
    }
}

/// Slot of a field in `field_failures`, matching its position in `Field::ALL`.
fn field_index(field: Field) -> usize {
    match field {
        Field::Name => 0,
        Field::Email => 1,
        Field::Password => 2,
        Field::PasswordConfirmation => 3,
        Field::Phone => 4,
        Field::DateBirth => 5,
        Field::Gender => 6,
        Field::Terms => 7,
    }
}

/// Snapshot of the form metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub submit_attempts_total: u64,
    pub submissions_accepted_total: u64,
    pub validation_failures_total: u64,
    pub handler_failures_total: u64,
    /// Failures per field name; fields that never failed are omitted
    pub field_failures: BTreeMap<&'static str, u64>,
}
