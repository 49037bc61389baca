//! Rate limiter types and data structures

use super::error::GateError;
use crate::config::models::rate_limit::{RateLimitConfig, TimeUnit};
use std::time::Duration;

/// Gate construction parameters
///
/// Immutable once a gate has been built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateConfig {
    /// Maximum admissions per window
    pub capacity: u32,
    /// Window length
    pub period: Duration,
}

impl GateConfig {
    /// Create a config admitting `capacity` calls per `period`
    pub fn new(capacity: u32, period: Duration) -> Self {
        Self { capacity, period }
    }

    /// Create a config admitting `capacity` calls per one `unit` of time
    pub fn per(unit: TimeUnit, capacity: u32) -> Self {
        Self::new(capacity, unit.to_duration(1))
    }

    /// Reject configurations that could never admit anything
    pub fn validate(&self) -> Result<(), GateError> {
        if self.capacity == 0 {
            return Err(GateError::InvalidConfig(
                "capacity must be greater than 0".to_string(),
            ));
        }
        if self.period.is_zero() {
            return Err(GateError::InvalidConfig(
                "period must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&RateLimitConfig> for GateConfig {
    fn from(config: &RateLimitConfig) -> Self {
        Self::new(config.capacity, config.period())
    }
}

/// Logical state of the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    /// Fewer than `capacity` admissions so far
    Open,
    /// `capacity` admissions reached, callers must wait for the window to expire
    Saturated,
}

/// Point-in-time view of a gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateStats {
    /// Configured capacity
    pub capacity: u32,
    /// Admissions counted in the stored window
    pub admitted_in_window: u32,
    /// Time since the stored window started
    pub window_elapsed: Duration,
    /// State as the next caller would observe it
    pub state: WindowState,
    /// Admissions since the gate was created
    pub total_admitted: u64,
    /// `try_acquire` calls turned away because the window was saturated
    pub total_rejected: u64,
    /// Waiters that gave up through a timeout or cancel signal
    pub total_cancelled: u64,
    /// Number of window resets
    pub resets: u64,
}
