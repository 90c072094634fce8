//! Simulation domain models.
//!
//! Provides the core data types for describing processes and recording
//! what the simulated CPU did with them.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Immutable input descriptor (id, arrival, burst, priority) |
//! | `ProcessRecord` | Spec plus mutable simulation state |
//! | `ProcessState` | NotArrived → Ready → Running → Completed lifecycle |
//! | `ExecutionSlice` | One contiguous run of a process on the CPU |
//! | `Timeline` | Ordered execution history (Gantt data) |

mod process;
mod timeline;

pub use process::{ProcessRecord, ProcessSpec, ProcessState};
pub use timeline::{ExecutionSlice, Timeline};
