//! Ready queue: arrived, unfinished processes awaiting the CPU.
//!
//! The queue itself is a stable FIFO over record indices — admission
//! order is preserved and equal-keyed processes never swap places.
//! Which entry runs next is entirely the active policy's decision;
//! no comparator lives here.

use std::collections::VecDeque;

/// FIFO of indices into the simulation's process record arena.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    entries: VecDeque<usize>,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a process at the back of the queue.
    pub fn push_back(&mut self, record_index: usize) {
        self.entries.push_back(record_index);
    }

    /// Removes and returns the entry at the given queue position, or
    /// `None` if `position` is out of bounds.
    pub fn remove(&mut self, position: usize) -> Option<usize> {
        self.entries.remove(position)
    }

    /// Iterates over queued record indices in queue order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().copied()
    }

    /// Number of queued processes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no process is ready.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order_is_stable() {
        let mut queue = ReadyQueue::new();
        queue.push_back(2);
        queue.push_back(0);
        queue.push_back(1);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![2, 0, 1]);
    }

    #[test]
    fn test_remove_middle() {
        let mut queue = ReadyQueue::new();
        queue.push_back(5);
        queue.push_back(6);
        queue.push_back(7);
        assert_eq!(queue.remove(1), Some(6));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![5, 7]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut queue = ReadyQueue::new();
        queue.push_back(5);
        assert_eq!(queue.remove(1), None);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_requeue_goes_to_back() {
        let mut queue = ReadyQueue::new();
        queue.push_back(0);
        queue.push_back(1);
        let idx = queue.remove(0).unwrap();
        queue.push_back(2); // arrival during the slice
        queue.push_back(idx); // preempted process re-enters last
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![1, 2, 0]);
    }

    #[test]
    fn test_empty() {
        let queue = ReadyQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }
}
