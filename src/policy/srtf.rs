//! Shortest-Remaining-Time-First.
//!
//! At every decision point the ready process with the least remaining
//! CPU time runs. A newly arrived process with strictly smaller
//! remaining time preempts the incumbent at the arrival instant; on an
//! exact tie the incumbent keeps the CPU via the `(arrival, id)`
//! tie-break. Remaining times are integer ticks, so comparisons are
//! exact and never oscillate.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.2
//! (preemptive SJF)

use super::Policy;
use crate::engine::ReadyQueue;
use crate::models::ProcessRecord;

/// Preemptive least-remaining-time dispatch.
#[derive(Debug, Clone, Copy)]
pub struct Srtf;

impl Policy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn preempts_on_arrival(&self) -> bool {
        true
    }

    fn select(&self, queue: &ReadyQueue, records: &[ProcessRecord]) -> Option<usize> {
        queue
            .iter()
            .enumerate()
            .min_by(|&(_, a), &(_, b)| {
                let (ra, rb) = (&records[a], &records[b]);
                ra.remaining_ms
                    .cmp(&rb.remaining_ms)
                    .then_with(|| ra.spec.arrival_ms.cmp(&rb.spec.arrival_ms))
                    .then_with(|| ra.spec.id.cmp(&rb.spec.id))
            })
            .map(|(position, _)| position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn make_records(list: &[(&str, i64, i64)]) -> Vec<ProcessRecord> {
        list.iter()
            .map(|&(id, arrival, burst)| ProcessRecord::new(ProcessSpec::new(id, arrival, burst)))
            .collect()
    }

    fn full_queue(n: usize) -> ReadyQueue {
        let mut queue = ReadyQueue::new();
        for i in 0..n {
            queue.push_back(i);
        }
        queue
    }

    #[test]
    fn test_least_remaining_wins() {
        let mut records = make_records(&[("P0", 0, 8), ("P1", 1, 4)]);
        records[0].run_for(1); // P0 has 7 left, P1 has 4
        let queue = full_queue(2);
        let position = Srtf.select(&queue, &records).unwrap();
        assert_eq!(queue.iter().nth(position), Some(1));
    }

    #[test]
    fn test_tie_keeps_earlier_arrival() {
        // Equal remaining time: the earlier arrival (the incumbent at a
        // preemption check) is re-selected, so ties never preempt.
        let mut records = make_records(&[("P0", 0, 6), ("P1", 3, 3)]);
        records[0].run_for(3); // both now have 3 left
        let queue = full_queue(2);
        let position = Srtf.select(&queue, &records).unwrap();
        assert_eq!(queue.iter().nth(position), Some(0));
    }

    #[test]
    fn test_full_tie_breaks_by_id() {
        let records = make_records(&[("P2", 0, 5), ("P1", 0, 5)]);
        let queue = full_queue(2);
        let position = Srtf.select(&queue, &records).unwrap();
        assert_eq!(queue.iter().nth(position), Some(1));
    }

    #[test]
    fn test_preemption_flags() {
        assert!(Srtf.is_preemptive());
        assert!(Srtf.preempts_on_arrival());
        let records = make_records(&[("P0", 0, 5)]);
        // No quantum: runs until the next event
        assert_eq!(Srtf.slice_limit(&records[0]), None);
    }
}
