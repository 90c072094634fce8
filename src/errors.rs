//! Simulation error taxonomy.
//!
//! Three failure classes, all detected before or during a run and
//! returned to the caller; nothing is retried (the simulation is
//! deterministic and pure, so retrying cannot change the outcome).

use thiserror::Error;

use crate::validation::ValidationError;

/// Failures surfaced by the simulator.
#[derive(Debug, Clone, Error)]
pub enum SimError {
    /// The input process set or policy configuration is malformed.
    /// Rejected before any simulation state is touched.
    #[error("invalid input: {}", format_validation_errors(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The requested policy name is not recognized.
    #[error("unknown scheduling policy '{0}'")]
    UnknownPolicy(String),

    /// An internal consistency check failed. Indicates an engine bug,
    /// never a property of valid input.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
