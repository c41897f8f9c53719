//! Tick bookkeeping: millisecond delays in host ticks and a queue of actions
//! due on a later tick.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Converts a delay in milliseconds to whole host ticks, rounding up.
///
/// At 20 Hz, 1000 ms is 20 ticks and 1 ms is one tick. A zero tick rate is
/// treated as one tick per second.
pub fn ticks_from_millis(ms: u64, tick_rate: u32) -> u64 {
    (ms * u64::from(tick_rate.max(1))).div_ceil(1000)
}

// ---------------------------------------------------------------------------
// DeferredQueue
// ---------------------------------------------------------------------------

/// A queued action and when it becomes due.
#[derive(Debug)]
struct Deferred<T> {
    due_tick: u64,
    sequence: u64,
    action: T,
}

impl<T> PartialEq for Deferred<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Deferred<T> {}

impl<T> PartialOrd for Deferred<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Deferred<T> {
    /// Earliest due tick first, then scheduling order (the heap is a max-heap).
    fn cmp(&self, other: &Self) -> Ordering {
        (other.due_tick, other.sequence).cmp(&(self.due_tick, self.sequence))
    }
}

/// Actions ordered by the tick they become due on.
///
/// Actions due on the same tick come out in the order they were scheduled.
#[derive(Debug)]
pub struct DeferredQueue<T> {
    heap: BinaryHeap<Deferred<T>>,
    next_sequence: u64,
}

impl<T> DeferredQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Queues `action` to become due on `due_tick`.
    pub fn schedule(&mut self, due_tick: u64, action: T) {
        self.heap.push(Deferred {
            due_tick,
            sequence: self.next_sequence,
            action,
        });
        self.next_sequence += 1;
    }

    /// Removes and returns every action due on or before `now`.
    pub fn drain_due(&mut self, now: u64) -> Vec<T> {
        let mut due = Vec::new();
        while self.heap.peek().is_some_and(|next| next.due_tick <= now) {
            if let Some(entry) = self.heap.pop() {
                due.push(entry.action);
            }
        }
        due
    }

    /// Tick of the earliest pending action.
    pub fn next_due(&self) -> Option<u64> {
        self.heap.peek().map(|next| next.due_tick)
    }

    /// Number of pending actions.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
