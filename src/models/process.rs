//! Process model.
//!
//! A process is a unit of CPU demand: it arrives at a known instant,
//! needs a known amount of CPU time, and (for the Priority policy)
//! carries a priority number where lower = more urgent.
//!
//! # Time Representation
//! All times are in millisecond ticks relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

use crate::Ms;

/// An immutable process descriptor.
///
/// Describes what the simulation is asked to schedule. Never mutated;
/// per-run state lives in [`ProcessRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: String,
    /// Instant the process becomes eligible to run (ms, >= 0).
    pub arrival_ms: Ms,
    /// Total CPU time required (ms, > 0).
    pub burst_ms: Ms,
    /// Scheduling priority (lower = higher priority). Only the Priority
    /// policy consults this.
    pub priority: i32,
}

impl ProcessSpec {
    /// Creates a new process descriptor with priority 0.
    pub fn new(id: impl Into<String>, arrival_ms: Ms, burst_ms: Ms) -> Self {
        Self {
            id: id.into(),
            arrival_ms,
            burst_ms,
            priority: 0,
        }
    }

    /// Sets the scheduling priority (lower = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Lifecycle state of a process during one simulation run.
///
/// `Running → Ready` is reachable only under preemptive policies;
/// `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessState {
    /// Arrival time is still in the future.
    NotArrived,
    /// Arrived and waiting for the CPU.
    Ready,
    /// Currently holds the CPU.
    Running,
    /// All burst time consumed.
    Completed,
}

/// A process descriptor plus its mutable simulation state.
///
/// Created fresh for every simulation run; mutated exclusively by the
/// event loop while the run is in progress. Once `completion_ms` is set
/// the record is effectively read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// The immutable input descriptor.
    pub spec: ProcessSpec,
    /// CPU time still required (ms). Starts at `spec.burst_ms`, never
    /// increases, reaches exactly 0 at completion.
    pub remaining_ms: Ms,
    /// First instant the process was given the CPU. `None` until first
    /// dispatch, set exactly once.
    pub start_ms: Option<Ms>,
    /// Instant `remaining_ms` reached 0. `None` until completion, set
    /// exactly once.
    pub completion_ms: Option<Ms>,
    /// Current lifecycle state.
    pub state: ProcessState,
}

impl ProcessRecord {
    /// Creates a fresh record for one simulation run.
    pub fn new(spec: ProcessSpec) -> Self {
        let remaining_ms = spec.burst_ms;
        Self {
            spec,
            remaining_ms,
            start_ms: None,
            completion_ms: None,
            state: ProcessState::NotArrived,
        }
    }

    /// Marks the process dispatched at `now`, recording the first-dispatch
    /// instant if this is the first time it gets the CPU.
    pub fn dispatch(&mut self, now: Ms) {
        if self.start_ms.is_none() {
            self.start_ms = Some(now);
        }
        self.state = ProcessState::Running;
    }

    /// Consumes `slice_ms` of CPU time, clamping remaining time at 0.
    ///
    /// Returns the remaining time after the slice.
    pub fn run_for(&mut self, slice_ms: Ms) -> Ms {
        self.remaining_ms = (self.remaining_ms - slice_ms).max(0);
        self.remaining_ms
    }

    /// Marks the process completed at `now`.
    pub fn complete(&mut self, now: Ms) {
        self.completion_ms = Some(now);
        self.state = ProcessState::Completed;
    }

    /// Returns the process back to the ready state after preemption or
    /// quantum expiry.
    pub fn preempt(&mut self) {
        self.state = ProcessState::Ready;
    }

    /// Whether the process has consumed its whole burst.
    pub fn is_complete(&self) -> bool {
        self.remaining_ms == 0
    }
}
