//! Configuration data models
//!
//! This module defines the configuration structures used by the client.

#![allow(missing_docs)]

pub mod client;
pub mod rate_limit;

// Re-export all configuration types
pub use client::*;
pub use rate_limit::*;

/// Default document creation endpoint
pub fn default_endpoint() -> String {
    "https://ismp.crpt.ru/api/v3/lk/documents/create".to_string()
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default admissions per window
pub fn default_capacity() -> u32 {
    10
}

/// Default window length, in time units
pub fn default_period_count() -> u32 {
    1
}
