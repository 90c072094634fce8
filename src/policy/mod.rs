//! Scheduling policies.
//!
//! Provides the four classical single-CPU policies behind one trait:
//!
//! | Policy | Preemptive | Dispatch order |
//! |--------|------------|----------------|
//! | FCFS | no | (arrival, id) |
//! | SRTF | on arrival | (remaining, arrival, id) |
//! | Priority | on arrival | (priority, arrival, id) |
//! | Round Robin | on quantum expiry | FIFO |
//!
//! Every dispatch order ends with the process ID, so selection is a
//! deterministic total order and equal-keyed ties never oscillate.
//! An arriving process preempts only with a *strictly* better key:
//! since keys end with `(arrival, id)`, the incumbent wins exact ties.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4.3

mod fcfs;
mod priority;
mod round_robin;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use srtf::Srtf;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::engine::ReadyQueue;
use crate::models::ProcessRecord;
use crate::validation::{ValidationError, ValidationErrorKind};
use crate::{Ms, SimError};

/// A scheduling policy: decides which ready process runs next and for
/// at most how long.
pub trait Policy: Debug {
    /// Policy name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Whether a dispatched process can lose the CPU before completing.
    fn is_preemptive(&self) -> bool;

    /// Whether a new arrival is a decision point for the running process.
    /// When true, the engine bounds every slice by the next arrival time
    /// and re-selects at that instant.
    fn preempts_on_arrival(&self) -> bool {
        false
    }

    /// Picks the queue position of the process to dispatch next.
    ///
    /// Returns `None` for an empty queue, which signals an idle CPU —
    /// not an error; the engine then jumps the clock to the next arrival.
    fn select(&self, queue: &ReadyQueue, records: &[ProcessRecord]) -> Option<usize>;

    /// Upper bound on the next slice (ms). `None` = run to completion
    /// (still subject to arrival preemption for preemptive policies).
    fn slice_limit(&self, record: &ProcessRecord) -> Option<Ms> {
        let _ = record;
        None
    }
}

/// Policy selection plus policy-specific configuration.
///
/// This is the single identifier external callers use to pick a policy;
/// only Round Robin carries a parameter (its quantum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyConfig {
    /// First-Come-First-Served, non-preemptive.
    Fcfs,
    /// Shortest-Remaining-Time-First, preemptive.
    Srtf,
    /// Preemptive priority (lower number = higher priority).
    Priority,
    /// Round Robin with a fixed quantum.
    RoundRobin {
        /// Maximum CPU slice per dispatch (ms, > 0).
        quantum_ms: Ms,
    },
}

impl PolicyConfig {
    /// Resolves a policy name (case-insensitive) into a configuration.
    ///
    /// Round Robin requires `quantum_ms`; the other policies ignore it.
    ///
    /// # Errors
    /// `SimError::UnknownPolicy` for an unrecognized name,
    /// `SimError::InvalidInput` when Round Robin is requested without a
    /// quantum.
    pub fn from_name(name: &str, quantum_ms: Option<Ms>) -> Result<Self, SimError> {
        match name.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "srtf" => Ok(Self::Srtf),
            "priority" => Ok(Self::Priority),
            "rr" | "roundrobin" | "round_robin" | "round-robin" => match quantum_ms {
                Some(quantum_ms) => Ok(Self::RoundRobin { quantum_ms }),
                None => Err(SimError::InvalidInput(vec![ValidationError::new(
                    ValidationErrorKind::MissingQuantum,
                    "Round Robin requires a quantum",
                )])),
            },
            _ => Err(SimError::UnknownPolicy(name.to_string())),
        }
    }

    /// Display name of the configured policy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Srtf => "SRTF",
            Self::Priority => "Priority",
            Self::RoundRobin { .. } => "RoundRobin",
        }
    }

    /// Instantiates the configured policy.
    pub fn build(&self) -> Box<dyn Policy> {
        match *self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Srtf => Box::new(Srtf),
            Self::Priority => Box::new(Priority),
            Self::RoundRobin { quantum_ms } => Box::new(RoundRobin::new(quantum_ms)),
        }
    }
}
