//! Error handling for the client
//!
//! This module defines the crate-level error type. Component errors
//! (`GateError`, `SubmissionError`, `SubmitError`) convert into it with `?`.

#![allow(missing_docs)]

use crate::core::documents::{SubmissionError, SubmitError};
use crate::core::rate_limiter::GateError;
use thiserror::Error;

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, CrptError>;

/// Main error type for the client
#[derive(Error, Debug)]
pub enum CrptError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Admission gate errors
    #[error("Rate limit error: {0}")]
    Gate(#[from] GateError),

    /// Submission errors, carried unchanged
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Helper functions for creating specific errors
impl CrptError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error came from a cancelled wait for admission
    pub fn is_cancelled(&self) -> bool {
        match self {
            CrptError::Gate(e) => e.is_cancelled(),
            CrptError::Submit(SubmitError::Gate(e)) => e.is_cancelled(),
            _ => false,
        }
    }
}

impl From<SubmissionError> for CrptError {
    fn from(error: SubmissionError) -> Self {
        CrptError::Submit(SubmitError::Submission(error))
    }
}
