//! Configuration management for the client
//!
//! This module handles loading, validation, and merging of client configuration.
//! Values come from a YAML file, from `CRPT_*` environment variables, or both.

pub mod models;

pub use models::*;

use crate::core::rate_limiter::GateConfig;
use crate::utils::error::{CrptError, Result};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Client configuration
    pub client: ClientConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let config = Self::from_yaml(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let client: ClientConfig = serde_yaml::from_str(content)?;

        let config = Self { client };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut client = ClientConfig::default();

        if let Ok(endpoint) = env::var("CRPT_ENDPOINT") {
            client.endpoint = endpoint;
        }
        if let Ok(timeout) = env::var("CRPT_TIMEOUT_SECS") {
            client.timeout_secs = timeout
                .parse()
                .map_err(|e| CrptError::Config(format!("Invalid timeout: {}", e)))?;
        }
        if let Ok(capacity) = env::var("CRPT_RATE_LIMIT_CAPACITY") {
            client.rate_limit.capacity = capacity
                .parse()
                .map_err(|e| CrptError::Config(format!("Invalid rate limit capacity: {}", e)))?;
        }
        if let Ok(unit) = env::var("CRPT_RATE_LIMIT_TIME_UNIT") {
            client.rate_limit.time_unit = unit.parse()?;
        }
        if let Ok(count) = env::var("CRPT_RATE_LIMIT_PERIOD_COUNT") {
            client.rate_limit.period_count = count
                .parse()
                .map_err(|e| CrptError::Config(format!("Invalid rate limit period: {}", e)))?;
        }

        let config = Self { client };
        config.validate()?;
        Ok(config)
    }

    /// Get client configuration
    pub fn client(&self) -> &ClientConfig {
        &self.client
    }

    /// Get rate limit configuration
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.client.rate_limit
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        if self.client.endpoint.trim().is_empty() {
            return Err(CrptError::Config("Endpoint must not be empty".to_string()));
        }
        if !self.client.endpoint.starts_with("http://")
            && !self.client.endpoint.starts_with("https://")
        {
            return Err(CrptError::Config(format!(
                "Endpoint must be an http(s) URL: {}",
                self.client.endpoint
            )));
        }
        if self.client.timeout_secs == 0 {
            return Err(CrptError::Config(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        GateConfig::from(self.rate_limit())
            .validate()
            .map_err(|e| CrptError::Config(format!("Rate limit config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.client = self.client.merge(other.client);
        self
    }
}
