//! Common test utilities for crpt-api-rs
//!
//! - Document fixtures
//! - Submitters that record when each call went through
//! - Custom assertions and helpers
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{fixtures, submitters};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let document = fixtures::DocumentFactory::create();
//!     let submitter = submitters::RecordingSubmitter::new();
//!     // ...
//! }
//! ```


// Re-export commonly used items
pub use fixtures::DocumentFactory;
pub use submitters::RecordingSubmitter;

use crpt_api::{GateConfig, RateLimitedGate};
use std::sync::Arc;
use std::time::Duration;

/// Build a shared gate admitting `capacity` calls per `period_ms`
pub fn shared_gate(capacity: u32, period_ms: u64) -> Arc<RateLimitedGate> {
    Arc::new(
        RateLimitedGate::new(GateConfig::new(capacity, Duration::from_millis(period_ms)))
            .expect("valid gate config"),
    )
}
