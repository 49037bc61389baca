//! Utility modules for the client
//!
//! - **error**: crate-level error type and result alias
//! - **logging**: log level parsing and subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging & monitoring

pub use error::{CrptError, Result};
pub use logging::{LogFormat, LogLevel, LoggingUtils};
