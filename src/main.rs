//! crpt-submit - submit documents through the rate limited client
//!
//! Reads a document from a JSON file and submits it one or more times
//! concurrently; the shared gate keeps the request rate within the limit.

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use crpt_api::utils::logging::{LogFormat, LogLevel, LoggingUtils};
use crpt_api::{Config, CrptApi, Document};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "crpt-submit", version, about)]
struct Cli {
    /// YAML configuration file; falls back to CRPT_* environment variables
    #[arg(short, long, env = "CRPT_CONFIG")]
    config: Option<PathBuf>,

    /// JSON file holding the document to submit
    #[arg(short, long)]
    document: PathBuf,

    /// Signature passed along with the document
    #[arg(short, long, default_value = "")]
    signature: String,

    /// Number of concurrent submissions of the document
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CRPT_LOG_LEVEL", default_value = "info")]
    log_level: LogLevel,

    /// Log output format (text, json)
    #[arg(long, env = "CRPT_LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,
}

async fn run(cli: Cli) -> anyhow::Result<usize> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };

    let raw = tokio::fs::read(&cli.document)
        .await
        .with_context(|| format!("Failed to read document {:?}", cli.document))?;
    let document: Document = serde_json::from_slice(&raw).context("Failed to parse document")?;

    let api = CrptApi::from_config(&config)?;
    info!(
        "Submitting document {} x{} ({} per {:?})",
        document.doc_id,
        cli.count,
        api.gate().capacity(),
        api.gate().period()
    );

    let submissions = (0..cli.count).map(|_| api.create_document(&document, &cli.signature));
    let results = futures::future::join_all(submissions).await;

    let mut failed = 0;
    for (i, result) in results.into_iter().enumerate() {
        if let Err(e) = result {
            error!("Submission {} failed: {}", i + 1, e);
            failed += 1;
        }
    }

    let stats = api.gate().stats();
    info!(
        "Done: {} admitted, {} failed, {} window resets",
        stats.total_admitted, failed, stats.resets
    );
    Ok(failed)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = LoggingUtils::init_logger(Some(cli.log_level), cli.log_format) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
