//! `EventSchedule` — the future event list, a time-ordered min-queue.
//!
//! # Why this shape
//!
//! The run loop only ever needs the single earliest pending event, so the
//! schedule is a binary heap keyed on the event timestamp: O(log n) push,
//! O(log n) pop-minimum, nothing else.  Arbitrary removal is deliberately
//! absent — the model has no event cancellation.
//!
//! Events sharing an identical timestamp pop in insertion order via a
//! monotonically increasing sequence number.  That order is stable and
//! deterministic but implementation-defined: with continuous exponential
//! durations, exact ties have probability zero, and no model behavior may
//! depend on how they resolve.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hq_core::SimTime;

use crate::Event;

struct Entry {
    event: Event,
    seq:   u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Entry {}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Entry {
    // Reversed on (time, seq): BinaryHeap is a max-heap, we want the minimum.
    fn cmp(&self, other: &Self) -> Ordering {
        self.event
            .time
            .cmp(&other.event.time)
            .then_with(|| self.seq.cmp(&other.seq))
            .reverse()
    }
}

/// Priority queue of pending events, ordered by timestamp ascending.
#[derive(Default)]
pub struct EventSchedule {
    heap:     BinaryHeap<Entry>,
    next_seq: u64,
}

impl EventSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `event`, keyed by its timestamp.
    pub fn push(&mut self, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { event, seq });
    }

    /// Remove and return the earliest pending event, or `None` if empty.
    ///
    /// An empty schedule mid-run is an engine invariant violation (the
    /// arrival chain always keeps one future Arrival live); the caller
    /// turns `None` into a fatal error.
    pub fn pop_min(&mut self) -> Option<Event> {
        self.heap.pop().map(|entry| entry.event)
    }

    /// Timestamp of the earliest pending event, if any.
    pub fn next_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|entry| entry.event.time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
