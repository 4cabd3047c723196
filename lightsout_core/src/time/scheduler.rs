//! Delayed-event scheduler.
//!
//! Events are plain descriptors rather than closures: the owner pops whatever
//! is due and applies it to its own state. Cancelling everything is a single
//! clear, so nothing stale can fire after a round has ended.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use lightsout_data::Millis;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// An event that has come due.
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<E> {
    pub handle: TimerHandle,
    pub fire_at: Millis,
    pub event: E,
}

struct Entry<E> {
    fire_at: Millis,
    seq: u64,
    event: E,
}

impl<E> PartialEq for Entry<E> {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at.to_bits() == other.fire_at.to_bits() && self.seq == other.seq
    }
}

impl<E> Eq for Entry<E> {}

impl<E> PartialOrd for Entry<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// BinaryHeap is a max-heap; reverse so the earliest (then first inserted) pops first.
impl<E> Ord for Entry<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fire_at
            .total_cmp(&other.fire_at)
            .then_with(|| self.seq.cmp(&other.seq))
            .reverse()
    }
}

pub struct Scheduler<E> {
    heap: BinaryHeap<Entry<E>>,
    cancelled: HashSet<u64>,
    seq: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            cancelled: HashSet::new(),
            seq: 0,
        }
    }

    /// Schedule `event` to fire `delay_ms` after `now`.
    pub fn schedule(&mut self, now: Millis, delay_ms: u64, event: E) -> TimerHandle {
        self.schedule_at(now + delay_ms as Millis, event)
    }

    pub fn schedule_at(&mut self, fire_at: Millis, event: E) -> TimerHandle {
        let seq = self.seq;
        self.seq += 1;
        trace!(seq, fire_at, "timer scheduled");
        self.heap.push(Entry { fire_at, seq, event });
        TimerHandle(seq)
    }

    /// Cancel one pending event. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let pending = self.heap.iter().any(|e| e.seq == handle.0);
        pending && self.cancelled.insert(handle.0)
    }

    /// Drop every pending event. Idempotent.
    pub fn cancel_all(&mut self) {
        if !self.heap.is_empty() {
            trace!(dropped = self.pending(), "timers cancelled");
        }
        self.heap.clear();
        self.cancelled.clear();
    }

    /// Pop the earliest event whose fire time is at or before `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<Fired<E>> {
        self.clean_top();
        if self.heap.peek()?.fire_at > now {
            return None;
        }
        let entry = self.heap.pop()?;
        Some(Fired {
            handle: TimerHandle(entry.seq),
            fire_at: entry.fire_at,
            event: entry.event,
        })
    }

    pub fn next_deadline(&mut self) -> Option<Millis> {
        self.clean_top();
        self.heap.peek().map(|e| e.fire_at)
    }

    pub fn pending(&self) -> usize {
        self.heap.len() - self.cancelled.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }

    // Discard cancelled entries sitting at the top of the heap.
    fn clean_top(&mut self) {
        while let Some(top) = self.heap.peek() {
            if !self.cancelled.remove(&top.seq) {
                break;
            }
            self.heap.pop();
        }
    }
}
