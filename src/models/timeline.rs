//! Execution history (timeline) model.
//!
//! The timeline records which process held the CPU during which interval.
//! Consumers render it as a Gantt chart; the metrics module uses it to
//! cross-check per-process CPU accounting.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::Ms;

/// One contiguous run of a process on the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that held the CPU.
    pub process_id: String,
    /// Slice start (ms, inclusive).
    pub start_ms: Ms,
    /// Slice end (ms, exclusive).
    pub end_ms: Ms,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: impl Into<String>, start_ms: Ms, end_ms: Ms) -> Self {
        Self {
            process_id: process_id.into(),
            start_ms,
            end_ms,
        }
    }

    /// Slice length (ms).
    pub fn duration_ms(&self) -> Ms {
        self.end_ms - self.start_ms
    }
}

/// Ordered execution history of one simulation run.
///
/// Slices are stored in chronological order and never overlap. A slice
/// that starts exactly where the previous slice of the same process
/// ended is merged into it, so a process re-selected at a decision point
/// without losing the CPU shows up as one uninterrupted run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<ExecutionSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice, merging it into the previous one when contiguous
    /// and belonging to the same process.
    pub fn push(&mut self, slice: ExecutionSlice) {
        if let Some(last) = self.slices.last_mut() {
            if last.process_id == slice.process_id && last.end_ms == slice.start_ms {
                last.end_ms = slice.end_ms;
                return;
            }
        }
        self.slices.push(slice);
    }

    /// The recorded slices, in chronological order.
    pub fn slices(&self) -> &[ExecutionSlice] {
        &self.slices
    }

    /// Number of slices after merging.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing has executed.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Latest recorded instant (ms). 0 for an empty timeline.
    pub fn makespan_ms(&self) -> Ms {
        self.slices.last().map_or(0, |s| s.end_ms)
    }

    /// Total CPU time the given process held (ms).
    pub fn busy_ms(&self, process_id: &str) -> Ms {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(ExecutionSlice::duration_ms)
            .sum()
    }
}
