//! Input validation for simulation runs.
//!
//! Checks structural integrity of the process set and the policy
//! configuration before any simulation state is built. Detects:
//! - Empty or duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive Round Robin quantum
//!
//! All problems are collected and reported together, not one at a time.

use std::collections::HashSet;

use crate::models::ProcessSpec;
use crate::policy::PolicyConfig;

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
    /// A process has an empty ID string.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process has burst time <= 0.
    NonPositiveBurst,
    /// Round Robin was configured with quantum <= 0.
    NonPositiveQuantum,
    /// Round Robin was requested without a quantum.
    MissingQuantum,
    /// A generator distribution parameter is out of range.
    InvalidDistribution,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set and policy configuration.
///
/// Checks:
/// 1. Every process has a non-empty, unique ID
/// 2. `arrival_ms >= 0` for every process
/// 3. `burst_ms > 0` for every process
/// 4. Round Robin quantum is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(specs: &[ProcessSpec], policy: &PolicyConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, spec) in specs.iter().enumerate() {
        if spec.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("process at index {index} has an empty ID"),
            ));
        } else if !seen_ids.insert(spec.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate process ID: {}", spec.id),
            ));
        }

        if spec.arrival_ms < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "process '{}' has negative arrival time {}",
                    spec.id, spec.arrival_ms
                ),
            ));
        }

        if spec.burst_ms <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("process '{}' has burst {}", spec.id, spec.burst_ms),
            ));
        }
    }

    if let PolicyConfig::RoundRobin { quantum_ms } = policy {
        if *quantum_ms <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Round Robin quantum must be positive, got {quantum_ms}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
