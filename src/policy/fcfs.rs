//! First-Come-First-Served.
//!
//! Dispatches strictly in `(arrival, id)` order; a dispatched process
//! runs to completion uninterrupted.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.1

use super::Policy;
use crate::engine::ReadyQueue;
use crate::models::ProcessRecord;

/// Non-preemptive arrival-order dispatch.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl Policy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn select(&self, queue: &ReadyQueue, records: &[ProcessRecord]) -> Option<usize> {
        queue
            .iter()
            .enumerate()
            .min_by(|&(_, a), &(_, b)| {
                let (ra, rb) = (&records[a].spec, &records[b].spec);
                ra.arrival_ms
                    .cmp(&rb.arrival_ms)
                    .then_with(|| ra.id.cmp(&rb.id))
            })
            .map(|(position, _)| position)
    }
}
