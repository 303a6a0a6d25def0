//! Deadline-keyed deferred tasks, drained by the same single-threaded stepper
//! that advances the mixer. Deadlines are virtual seconds on the mixer clock;
//! a negative delay clamps to "now" and fires on the next poll. No cancel path.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Clone, Debug)]
struct Scheduled<T> {
    deadline: f64,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Scheduled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<T> Eq for Scheduled<T> {}

impl<T> PartialOrd for Scheduled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Scheduled<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .total_cmp(&other.deadline)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-heap of scheduled tasks ordered by (deadline, insertion order).
#[derive(Debug)]
pub struct TimerQueue<T> {
    heap: BinaryHeap<Reverse<Scheduled<T>>>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(cap),
            next_seq: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Schedule `task` at `now + delay` seconds. Negative delays clamp to `now`.
    pub fn schedule_in(&mut self, now: f64, delay: f64, task: T) {
        let deadline = now + delay.max(0.0);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Scheduled {
            deadline,
            seq,
            task,
        }));
    }

    /// Next pending deadline, if any.
    pub fn next_deadline(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(s)| s.deadline)
    }

    /// Drain all tasks with deadline <= now, in (deadline, insertion) order.
    pub fn pop_due(&mut self, now: f64) -> Vec<T> {
        let mut due = Vec::new();
        while self
            .heap
            .peek()
            .is_some_and(|Reverse(s)| s.deadline <= now)
        {
            if let Some(Reverse(s)) = self.heap.pop() {
                due.push(s.task);
            }
        }
        due
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
