//! Logging utilities
//!
//! Log level parsing and `tracing-subscriber` initialization.

pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use types::{LogFormat, LogLevel};
pub use utils::LoggingUtils;
