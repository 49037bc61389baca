//! # crpt-api-rs
//!
//! Rate limited client for the CRPT document creation API.
//!
//! The heart of the crate is [`RateLimitedGate`]: at most `capacity` calls are
//! admitted within each `period`, no matter how many tasks or threads try to
//! submit at once. [`CrptApi`] puts every document submission through the gate.
//!
//! ## Features
//!
//! - **Shared admission window**: one window guarded by one lock, reset lazily
//!   by whichever caller first sees it expire
//! - **Waiting without holding the lock**: blocked callers park on a reset
//!   signal and re-validate on wake
//! - **Cancellation**: drop the `acquire()` future, or use
//!   [`acquire_timeout`](RateLimitedGate::acquire_timeout) /
//!   [`acquire_until`](RateLimitedGate::acquire_until); a cancelled caller is
//!   never counted
//! - **Error transparency**: submission failures come back unchanged
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crpt_api::{CrptApi, Document, TimeUnit};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // At most 10 documents per second
//!     let api = CrptApi::new(TimeUnit::Seconds, 10)?;
//!
//!     let document = Document::new("123", "LP_INTRODUCE_GOODS")
//!         .with_participant_inn("1234567890")
//!         .with_status("draft");
//!
//!     api.create_document(&document, "signature_string").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Gate Only
//!
//! ```rust
//! use crpt_api::{GateConfig, RateLimitedGate};
//! use std::time::Duration;
//!
//! let gate = RateLimitedGate::new(GateConfig::new(2, Duration::from_secs(1))).unwrap();
//! assert!(gate.try_acquire());
//! assert!(gate.try_acquire());
//! assert!(!gate.try_acquire());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::{ClientConfig, Config, RateLimitConfig, TimeUnit};
pub use utils::error::{CrptError, Result};

pub use core::documents::{
    CrptApi, Document, DocumentSubmitter, HttpDocumentSubmitter, SubmissionError, SubmitError,
};
pub use core::rate_limiter::{GateConfig, GateError, GateStats, RateLimitedGate, WindowState};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
