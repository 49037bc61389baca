//! Errors raised by the admission gate

use thiserror::Error;

/// Error returned by [`RateLimitedGate`](super::RateLimitedGate) operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// The gate was constructed with a zero capacity or a zero period.
    /// No gate is produced when this is returned.
    #[error("Invalid rate limit configuration: {0}")]
    InvalidConfig(String),

    /// A waiting caller gave up before it was admitted.
    /// The window count is untouched when this is returned.
    #[error("Acquire cancelled before admission")]
    Cancelled,
}

impl GateError {
    /// Whether this error is a cancellation of a waiting caller
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GateError::Cancelled)
    }
}
