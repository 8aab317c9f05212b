//! Input validation for simulation runs.
//!
//! Checks structural integrity of the configuration and job set before
//! the engine starts. Detects:
//! - Empty processor pools
//! - Non-positive, non-finite, or out-of-range quanta (quantum policies only)
//! - Negative, non-finite, or out-of-range arrival times
//! - Non-positive, non-finite, or out-of-range burst times
//! - Job sets whose combined time span outgrows the tick representation
//! - Duplicate job IDs
//!
//! The engine has no error states of its own: input that passes these
//! checks always simulates to completion with every job finished.

use std::collections::HashSet;
use std::fmt;

use crate::models::time::MAX_TIME_UNITS;
use crate::models::{Job, SimConfig};

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
    /// The processor pool is empty.
    InvalidProcessorCount,
    /// The quantum is not a positive, finite number.
    InvalidQuantum,
    /// A job arrives at a negative or non-finite time.
    InvalidArrivalTime,
    /// A job requires a non-positive or non-finite amount of CPU time.
    InvalidBurstTime,
    /// The latest arrival plus total burst time exceeds [`MAX_TIME_UNITS`].
    InvalidHorizon,
    /// Two jobs share the same ID.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validates a simulation configuration and its job set.
///
/// Checks:
/// 1. At least one processor
/// 2. A positive, finite quantum within [`MAX_TIME_UNITS`] when the
///    policy uses one
/// 3. Finite arrival times between 0 and [`MAX_TIME_UNITS`]
/// 4. Finite, positive burst times up to [`MAX_TIME_UNITS`]
/// 5. A combined time span (latest arrival plus total burst) within
///    [`MAX_TIME_UNITS`]
/// 6. No duplicate job IDs
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(config: &SimConfig, jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    if config.processor_count == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidProcessorCount,
            "Processor count must be at least 1",
        ));
    }

    if config.policy.uses_quantum() {
        if !(config.quantum.is_finite() && config.quantum > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Quantum must be a positive number, got {}", config.quantum),
            ));
        } else if config.quantum > MAX_TIME_UNITS {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!(
                    "Quantum {} exceeds the supported {} time units",
                    config.quantum, MAX_TIME_UNITS
                ),
            ));
        }
    }

    let mut job_ids = HashSet::new();
    let mut times_in_range = true;
    for job in jobs {
        if !job_ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if !(job.arrival_time.is_finite() && job.arrival_time >= 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!(
                    "Job {} has an invalid arrival time: {}",
                    job.id, job.arrival_time
                ),
            ));
            times_in_range = false;
        } else if job.arrival_time > MAX_TIME_UNITS {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!(
                    "Job {} arrival time {} exceeds the supported {} time units",
                    job.id, job.arrival_time, MAX_TIME_UNITS
                ),
            ));
            times_in_range = false;
        }

        if !(job.burst_time.is_finite() && job.burst_time > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!("Job {} has an invalid burst time: {}", job.id, job.burst_time),
            ));
            times_in_range = false;
        } else if job.burst_time > MAX_TIME_UNITS {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!(
                    "Job {} burst time {} exceeds the supported {} time units",
                    job.id, job.burst_time, MAX_TIME_UNITS
                ),
            ));
            times_in_range = false;
        }
    }

    // The engine clock never passes the latest arrival plus every burst,
    // so that sum must fit in ticks as well. Checked only once the
    // individual fields are known finite and in range.
    if times_in_range {
        let total_burst: f64 = jobs.iter().map(|job| job.burst_time).sum();
        let last_arrival = jobs
            .iter()
            .map(|job| job.arrival_time)
            .fold(0.0, f64::max);
        if total_burst + last_arrival > MAX_TIME_UNITS {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHorizon,
                format!(
                    "Job set spans {} time units, exceeding the supported {}",
                    total_burst + last_arrival,
                    MAX_TIME_UNITS
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
