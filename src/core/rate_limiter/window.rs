//! Admission window bookkeeping
//!
//! The window is a plain value; the gate keeps it behind a single mutex so
//! `start` and `count` are always read and written together.

use std::time::Duration;
use tokio::time::Instant;

/// The current rolling interval over which admissions are counted
#[derive(Debug, Clone, Copy)]
pub(super) struct Window {
    /// When the current window began
    pub(super) start: Instant,
    /// Admissions granted since `start`
    pub(super) count: u32,
}

impl Window {
    pub(super) fn new(now: Instant) -> Self {
        Self {
            start: now,
            count: 0,
        }
    }

    pub(super) fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    pub(super) fn is_expired(&self, now: Instant, period: Duration) -> bool {
        self.elapsed(now) >= period
    }

    /// Start a fresh window at `now`. `start` never moves backwards.
    pub(super) fn reset(&mut self, now: Instant) {
        self.start = self.start.max(now);
        self.count = 0;
    }

    /// Count one admission if there is room left
    pub(super) fn admit(&mut self, capacity: u32) -> bool {
        if self.count < capacity {
            self.count += 1;
            true
        } else {
            false
        }
    }

    /// Time left until this window can be reset
    pub(super) fn remaining(&self, now: Instant, period: Duration) -> Duration {
        period.saturating_sub(self.elapsed(now))
    }

    pub(super) fn is_saturated(&self, capacity: u32) -> bool {
        self.count >= capacity
    }
}
