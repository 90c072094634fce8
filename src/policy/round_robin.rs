//! Round Robin.
//!
//! Plain FIFO dispatch with a fixed quantum: each dispatch runs for
//! `min(quantum, remaining)`. On quantum expiry with work left, the
//! engine re-admits the process at the back of the queue — after any
//! processes that arrived during its slice (arrivals-before-requeue,
//! the textbook convention).
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use super::Policy;
use crate::engine::ReadyQueue;
use crate::models::ProcessRecord;
use crate::Ms;

/// Quantum-bounded FIFO dispatch.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum_ms: Ms,
}

impl RoundRobin {
    /// Creates a Round Robin policy with the given quantum (ms).
    pub fn new(quantum_ms: Ms) -> Self {
        Self { quantum_ms }
    }

    /// The configured quantum (ms).
    pub fn quantum_ms(&self) -> Ms {
        self.quantum_ms
    }
}

impl Policy for RoundRobin {
    fn name(&self) -> &'static str {
        "RoundRobin"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn select(&self, queue: &ReadyQueue, _records: &[ProcessRecord]) -> Option<usize> {
        // Admission order is the dispatch order
        if queue.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    fn slice_limit(&self, _record: &ProcessRecord) -> Option<Ms> {
        Some(self.quantum_ms)
    }
}
