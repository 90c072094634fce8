//! Discrete-event CPU scheduling simulator.
//!
//! Simulates a single CPU executing a fixed, known set of processes under
//! one of four classical policies — FCFS, SRTF, Priority, and Round Robin —
//! and derives the textbook performance metrics (waiting, turnaround,
//! response time) per process and on average.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `ProcessRecord`,
//!   `ProcessState`, `ExecutionSlice`, `Timeline`
//! - **`policy`**: The `Policy` trait and the four scheduling policies,
//!   selected via `PolicyConfig`
//! - **`engine`**: The virtual clock, event loop, and ready queue
//! - **`metrics`**: Per-process and aggregate metric computation
//! - **`validation`**: Input integrity checks (IDs, arrival/burst ranges, quantum)
//! - **`generator`**: Random process-set generation with mean/stddev targeting
//! - **`compare`**: Running several policies over the same logical input
//!
//! # Time Representation
//!
//! All times are `i64` millisecond ticks relative to the simulation epoch
//! (t=0). The clock advances from event to event; there is no fixed-step
//! loop and no wall-clock involvement. For fixed input and a fixed policy,
//! the execution history and every metric are exactly reproducible.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod compare;
pub mod engine;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod validation;

mod errors;

pub use errors::SimError;

/// Simulation time in millisecond ticks.
pub type Ms = i64;
