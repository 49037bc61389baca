//! Document API client configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Document creation endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Admission limits for submissions
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Merge client configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if other.endpoint != default_endpoint() {
            self.endpoint = other.endpoint;
        }
        if other.timeout_secs != default_timeout() {
            self.timeout_secs = other.timeout_secs;
        }
        self.rate_limit = self.rate_limit.merge(other.rate_limit);
        self
    }
}
