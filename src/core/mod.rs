//! Core functionality for the client
//!
//! This module contains the admission gate and the document submission logic.

pub mod documents; // Document model and gated submission
pub mod rate_limiter; // Rate limiting system
