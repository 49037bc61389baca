//! Error handling for document submission

use crate::core::rate_limiter::GateError;
use thiserror::Error;

/// Failure of the submission call itself
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// Transport failure talking to the endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Document endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
}

impl SubmissionError {
    /// HTTP status returned by the endpoint, if it answered
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmissionError::Http(e) => e.status().map(|s| s.as_u16()),
            SubmissionError::Status { status, .. } => Some(*status),
        }
    }
}

/// Error returned by a gated submission
///
/// Submission failures are passed through as-is and are never reported as
/// rate limit failures.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The document could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The wait for admission was cancelled
    #[error("Rate limit error: {0}")]
    Gate(#[from] GateError),

    /// `try_*` submission found the window saturated
    #[error("Rate limit window saturated")]
    Throttled,

    /// The submission call failed after admission
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl SubmitError {
    /// Whether the caller may simply call again once capacity frees up
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, SubmitError::Gate(_) | SubmitError::Throttled)
    }
}
