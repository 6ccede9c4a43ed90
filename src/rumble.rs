//! Scheduled rumble zero-outs.
//!
//! A rumble call with a finite duration needs its motors cleared later without
//! blocking anyone. [`RumbleScheduler`] keeps at most one pending zero-out
//! deadline per device index, measured on the arbiter's monotonic uptime
//! clock, and the arbiter services due entries inside `tick`.
//!
//! Keying by index is what makes the schedule cancellable: a newer rumble on
//! the same index replaces the old deadline, so a stale zero-out can never
//! clear a rumble issued after it.

use std::collections::HashMap;
use std::time::Duration;

/// Pending motor-clear deadlines, keyed by device index.
#[derive(Debug, Default)]
pub struct RumbleScheduler {
    pending: HashMap<usize, Duration>,
}

impl RumbleScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a zero-out for `index` at `deadline`, replacing any pending one.
    pub fn schedule(&mut self, index: usize, deadline: Duration) {
        self.pending.insert(index, deadline);
    }

    /// Drop the pending zero-out for `index`, if any.
    pub fn cancel(&mut self, index: usize) {
        self.pending.remove(&index);
    }

    /// Drop every pending zero-out.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// `true` if `index` has a zero-out waiting.
    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.contains_key(&index)
    }

    /// Remove and return all indices whose deadline has passed, ascending.
    pub fn due(&mut self, now: Duration) -> Vec<usize> {
        let mut ready: Vec<usize> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(index, _)| *index)
            .collect();
        ready.sort_unstable();
        for index in &ready {
            self.pending.remove(index);
        }
        ready
    }
}
