//! Integration tests for crpt-api-rs
//!
//! These tests drive the public API only: the gate on its own, the document
//! client in front of an in-process submitter or a mock HTTP endpoint, and
//! configuration loading.

pub mod client_tests;
pub mod config_tests;
