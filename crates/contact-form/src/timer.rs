// File: src/timer.rs
// Purpose: One-shot success-panel hide timers

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identifies one showing of the success panel.
///
/// Every accepted submission issues a new ticket; only the newest ticket is
/// allowed to hide the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HideTicket(pub u64);

/// Deterministic timer queue driven by a virtual clock.
///
/// Native hosts and tests use this in place of the browser's `setTimeout`:
/// schedule when the view asks, then `advance` and feed the returned tickets
/// back to the controller.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Duration,
    pending: Vec<(Duration, HideTicket)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, after: Duration, ticket: HideTicket) {
        self.pending.push((self.now + after, ticket));
    }

    /// Move the clock forward and return the timers that fired, earliest first
    pub fn advance(&mut self, by: Duration) -> Vec<HideTicket> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<(Duration, HideTicket)> = Vec::new();
        self.pending.retain(|&(at, ticket)| {
            if at <= now {
                due.push((at, ticket));
                false
            } else {
                true
            }
        });
        due.sort();
        due.into_iter().map(|(_, ticket)| ticket).collect()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
