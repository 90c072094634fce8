//! Virtual clock and event loop.
//!
//! The simulator owns all mutable run state: the process record arena,
//! the ready queue, the timeline, and the clock. The clock is a value
//! advanced from decision point to decision point — a new arrival, a
//! completion, a quantum expiry, or an idle CPU becoming busy — never
//! wall-clock time.
//!
//! # Algorithm
//!
//! 1. Admit every process whose arrival time has been reached, in
//!    `(arrival, id)` order.
//! 2. If nothing is ready, jump the clock to the next arrival.
//! 3. Ask the policy which ready process runs and bound its slice by
//!    the quantum (Round Robin) and/or the next arrival (SRTF, Priority).
//! 4. Execute the slice, record it, admit arrivals that happened during
//!    it, then requeue or complete the process.
//!
//! Progress is guaranteed: every non-idle step consumes at least one
//! tick of a finite total burst, and idle steps strictly advance the
//! clock to an arrival.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.1

mod ready_queue;

pub use ready_queue::ReadyQueue;

use log::{debug, trace};

use crate::metrics::{MetricsCollector, SimulationReport};
use crate::models::{ExecutionSlice, ProcessRecord, ProcessSpec, ProcessState, Timeline};
use crate::policy::PolicyConfig;
use crate::validation::validate_input;
use crate::{Ms, SimError};

/// Single-CPU discrete-event simulator for one scheduling policy.
///
/// Each call to [`run`](Simulator::run) builds fresh [`ProcessRecord`]s
/// from the input descriptors, so the same `Simulator` (or the same
/// specs) can be reused across runs without shared mutable state.
///
/// # Example
///
/// ```
/// use cpu_sched::engine::Simulator;
/// use cpu_sched::models::ProcessSpec;
/// use cpu_sched::policy::PolicyConfig;
///
/// let specs = vec![
///     ProcessSpec::new("P1", 0, 5),
///     ProcessSpec::new("P2", 1, 3),
/// ];
/// let report = Simulator::new(PolicyConfig::Fcfs).run(&specs).unwrap();
/// assert_eq!(report.per_process[1].completion_ms, 8);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    config: PolicyConfig,
}

impl Simulator {
    /// Creates a simulator for the given policy configuration.
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// The configured policy.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Runs the simulation to completion and collects metrics.
    ///
    /// Empty input yields an empty report with undefined averages.
    ///
    /// # Errors
    /// `SimError::InvalidInput` for malformed descriptors or a bad
    /// quantum; `SimError::InvariantViolation` if an internal
    /// consistency check fails (an engine bug).
    pub fn run(&self, specs: &[ProcessSpec]) -> Result<SimulationReport, SimError> {
        validate_input(specs, &self.config).map_err(SimError::InvalidInput)?;
        if specs.is_empty() {
            return Ok(SimulationReport::empty());
        }

        let policy = self.config.build();
        let mut records: Vec<ProcessRecord> =
            specs.iter().cloned().map(ProcessRecord::new).collect();

        // Arrival feed in (arrival, id) order; `next_arrival` walks it.
        let mut arrival_order: Vec<usize> = (0..records.len()).collect();
        arrival_order.sort_by(|&a, &b| {
            let (ra, rb) = (&records[a].spec, &records[b].spec);
            ra.arrival_ms
                .cmp(&rb.arrival_ms)
                .then_with(|| ra.id.cmp(&rb.id))
        });
        let mut next_arrival = 0usize;

        let mut ready = ReadyQueue::new();
        let mut timeline = Timeline::new();
        let mut now: Ms = 0;
        let mut completed = 0usize;
        let total = records.len();

        debug!("starting {} run with {total} processes", policy.name());

        while completed < total {
            while next_arrival < total
                && records[arrival_order[next_arrival]].spec.arrival_ms <= now
            {
                let index = arrival_order[next_arrival];
                records[index].state = ProcessState::Ready;
                ready.push_back(index);
                trace!("t={now}: '{}' arrived", records[index].spec.id);
                next_arrival += 1;
            }

            if ready.is_empty() {
                // Idle CPU with work still pending: jump to the next arrival
                let Some(&index) = arrival_order.get(next_arrival) else {
                    return Err(SimError::InvariantViolation(format!(
                        "idle at t={now} with {} unfinished processes and no pending arrivals",
                        total - completed
                    )));
                };
                let arrival = records[index].spec.arrival_ms;
                trace!("t={now}: idle until {arrival}");
                now = arrival;
                continue;
            }

            let position = policy.select(&ready, &records).ok_or_else(|| {
                SimError::InvariantViolation(format!(
                    "{} selected nothing from a non-empty ready queue",
                    policy.name()
                ))
            })?;
            let index = ready.remove(position).ok_or_else(|| {
                SimError::InvariantViolation(format!(
                    "{} selected out-of-range queue position {position}",
                    policy.name()
                ))
            })?;

            let mut slice = records[index].remaining_ms;
            if let Some(limit) = policy.slice_limit(&records[index]) {
                slice = slice.min(limit);
            }
            if policy.preempts_on_arrival() && next_arrival < total {
                let until_arrival =
                    records[arrival_order[next_arrival]].spec.arrival_ms - now;
                slice = slice.min(until_arrival);
            }
            if slice <= 0 {
                return Err(SimError::InvariantViolation(format!(
                    "non-positive slice {slice} for '{}' at t={now}",
                    records[index].spec.id
                )));
            }

            records[index].dispatch(now);
            let remaining = records[index].run_for(slice);
            timeline.push(ExecutionSlice::new(
                records[index].spec.id.clone(),
                now,
                now + slice,
            ));
            trace!(
                "t={now}: '{}' runs {slice} ms ({remaining} ms left)",
                records[index].spec.id
            );
            now += slice;

            // Admit processes that arrived during the slice before the
            // preempted process re-enters the queue.
            while next_arrival < total
                && records[arrival_order[next_arrival]].spec.arrival_ms <= now
            {
                let arrived = arrival_order[next_arrival];
                records[arrived].state = ProcessState::Ready;
                ready.push_back(arrived);
                trace!("t={now}: '{}' arrived", records[arrived].spec.id);
                next_arrival += 1;
            }

            if records[index].is_complete() {
                records[index].complete(now);
                completed += 1;
                debug!("t={now}: '{}' completed", records[index].spec.id);
            } else {
                records[index].preempt();
                ready.push_back(index);
            }
        }

        let report = MetricsCollector::collect(&records, &timeline)?;
        debug!(
            "{} run finished at t={now} with {} processes",
            policy.name(),
            report.per_process.len()
        );
        Ok(report)
    }
}
