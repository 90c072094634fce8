//! Preemptive priority scheduling.
//!
//! Dispatches the ready process with the lowest priority number. A new
//! arrival with a strictly better priority preempts the incumbent at
//! the arrival instant; equal priorities are served in `(arrival, id)`
//! order, so an arrival can never displace an equal-priority incumbent.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.3

use super::Policy;
use crate::engine::ReadyQueue;
use crate::models::ProcessRecord;

/// Preemptive lowest-priority-number dispatch.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl Policy for Priority {
    fn name(&self) -> &'static str {
        "Priority"
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
                let (ra, rb) = (&records[a].spec, &records[b].spec);
                ra.priority
                    .cmp(&rb.priority)
                    .then_with(|| ra.arrival_ms.cmp(&rb.arrival_ms))
                    .then_with(|| ra.id.cmp(&rb.id))
            })
            .map(|(position, _)| position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn make_records(list: &[(&str, i64, i64, i32)]) -> Vec<ProcessRecord> {
        list.iter()
            .map(|&(id, arrival, burst, priority)| {
                ProcessRecord::new(ProcessSpec::new(id, arrival, burst).with_priority(priority))
            })
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
    fn test_lower_number_wins() {
        let records = make_records(&[("P0", 0, 5, 3), ("P1", 1, 5, 1), ("P2", 2, 5, 2)]);
        let queue = full_queue(3);
        let position = Priority.select(&queue, &records).unwrap();
        assert_eq!(queue.iter().nth(position), Some(1));
    }

    #[test]
    fn test_equal_priority_breaks_by_arrival() {
        let records = make_records(&[("P0", 4, 5, 2), ("P1", 1, 5, 2)]);
        let queue = full_queue(2);
        let position = Priority.select(&queue, &records).unwrap();
        assert_eq!(queue.iter().nth(position), Some(1));
    }

    #[test]
    fn test_full_tie_breaks_by_id() {
        let records = make_records(&[("P7", 0, 5, 2), ("P3", 0, 5, 2)]);
        let queue = full_queue(2);
        let position = Priority.select(&queue, &records).unwrap();
        assert_eq!(queue.iter().nth(position), Some(1));
    }

    #[test]
    fn test_preemption_flags() {
        assert!(Priority.is_preemptive());
        assert!(Priority.preempts_on_arrival());
    }
}
