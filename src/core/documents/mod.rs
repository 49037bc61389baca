//! Document submission
//!
//! The document model, the transport that posts it, and the rate limited
//! client that puts every submission through a [`RateLimitedGate`].
//!
//! [`RateLimitedGate`]: crate::core::rate_limiter::RateLimitedGate

mod client;
mod errors;
mod submitter;
mod types;

pub use client::CrptApi;
pub use errors::{SubmissionError, SubmitError};
pub use submitter::{DocumentSubmitter, HttpDocumentSubmitter};
pub use types::Document;
