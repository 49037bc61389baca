//! Rate Limiting Implementation
//!
//! Provides a concurrency-safe admission gate: at most `capacity` callers are
//! admitted per rolling `period`, no matter how many tasks or threads race for it.

mod error;
mod gate;
mod types;
mod window;


// Re-export public types
pub use error::GateError;
pub use gate::RateLimitedGate;
pub use types::{GateConfig, GateStats, WindowState};
