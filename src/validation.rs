//! Input validation for simulation requests.
//!
//! Checks job intake records before a run and reports every problem at
//! once. Detects:
//! - Duplicate job IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Non-positive round-robin quanta
//!
//! The engine itself only fails fast on the first invalid job; this module
//! is meant for the intake layer, which wants the complete list.

use std::collections::HashSet;

use crate::error::SimError;
use crate::models::{JobSpec, Ticks};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two jobs share the same ID.
    DuplicateId,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Arrival time is negative.
    NegativeArrival,
    /// Quantum is zero or negative.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Reuses the engine's wording for the same failure.
    fn from_engine(kind: ValidationErrorKind, err: SimError) -> Self {
        Self::new(kind, err.to_string())
    }
}

/// Validates job intake records.
///
/// Checks:
/// 1. No duplicate job IDs
/// 2. Every burst time is positive
/// 3. No arrival time is negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[JobSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for job in jobs {
        if !ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if job.burst_time <= 0 {
            errors.push(ValidationError::from_engine(
                ValidationErrorKind::NonPositiveBurst,
                SimError::NonPositiveBurst {
                    id: job.id,
                    burst_time: job.burst_time,
                },
            ));
        }

        if job.arrival_time < 0 {
            errors.push(ValidationError::from_engine(
                ValidationErrorKind::NegativeArrival,
                SimError::NegativeArrival {
                    id: job.id,
                    arrival_time: job.arrival_time,
                },
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a round-robin quantum.
pub fn validate_quantum(quantum: Ticks) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be positive, got {quantum}"),
        )])
    }
}
