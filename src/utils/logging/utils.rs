//! Logging setup

use super::types::{LogFormat, LogLevel};
use crate::utils::error::{CrptError, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Logging utilities
pub struct LoggingUtils;

impl LoggingUtils {
    /// Install the global `tracing` subscriber, writing to stdout.
    ///
    /// `RUST_LOG` takes precedence over `log_level` when it is set.
    pub fn init_logger(log_level: Option<LogLevel>, format: LogFormat) -> Result<()> {
        let subscriber = Self::build_subscriber(log_level, format, std::io::stdout);
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CrptError::Config(format!("Failed to initialize logging: {}", e)))
    }

    /// Build a subscriber without installing it
    pub fn build_subscriber<W>(
        log_level: Option<LogLevel>,
        format: LogFormat,
        writer: W,
    ) -> Box<dyn Subscriber + Send + Sync>
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let level = log_level.unwrap_or_default();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(false)
            .with_thread_ids(true)
            .with_line_number(true);

        match format {
            LogFormat::Text => Box::new(builder.finish()),
            LogFormat::Json => Box::new(builder.json().finish()),
        }
    }
}
