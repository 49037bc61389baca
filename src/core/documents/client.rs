//! Rate limited document client

use super::errors::SubmitError;
use super::submitter::{DocumentSubmitter, HttpDocumentSubmitter};
use super::types::Document;
use crate::config::Config;
use crate::config::models::TimeUnit;
use crate::core::rate_limiter::{GateConfig, RateLimitedGate};
use crate::utils::error::Result;
use bytes::Bytes;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Document client that admits at most `capacity` submissions per period
///
/// Cloning is cheap; clones share the same gate, so the limit holds across
/// all of them.
#[derive(Debug)]
pub struct CrptApi<S = HttpDocumentSubmitter> {
    gate: Arc<RateLimitedGate>,
    submitter: Arc<S>,
}

impl<S> Clone for CrptApi<S> {
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
            submitter: self.submitter.clone(),
        }
    }
}

impl CrptApi<HttpDocumentSubmitter> {
    /// Create a client posting to the default endpoint, admitting
    /// `request_limit` submissions per one `time_unit`
    pub fn new(time_unit: TimeUnit, request_limit: u32) -> Result<Self> {
        let gate = RateLimitedGate::new(GateConfig::per(time_unit, request_limit))?;
        let submitter = HttpDocumentSubmitter::new(
            crate::config::models::default_endpoint(),
            Duration::from_secs(crate::config::models::default_timeout()),
        )?;
        Ok(Self::with_submitter(Arc::new(gate), submitter))
    }

    /// Create a client from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let gate = RateLimitedGate::from_config(config.rate_limit())?;
        let submitter = HttpDocumentSubmitter::from_config(config.client())?;
        info!("Document client targeting {}", submitter.endpoint());
        Ok(Self::with_submitter(Arc::new(gate), submitter))
    }
}

impl<S: DocumentSubmitter> CrptApi<S> {
    /// Create a client around an existing gate and submitter
    pub fn with_submitter(gate: Arc<RateLimitedGate>, submitter: S) -> Self {
        Self {
            gate,
            submitter: Arc::new(submitter),
        }
    }

    /// Wait for admission, then submit `payload`.
    ///
    /// The admitted slot stays consumed whether or not the submission
    /// succeeds. Submission errors are returned unchanged.
    pub async fn gated_submit(&self, payload: Bytes) -> std::result::Result<(), SubmitError> {
        self.gate.acquire().await;
        self.submit_admitted(payload).await
    }

    /// Like [`gated_submit`](Self::gated_submit), giving up if admission takes
    /// longer than `wait`
    pub async fn gated_submit_timeout(
        &self,
        payload: Bytes,
        wait: Duration,
    ) -> std::result::Result<(), SubmitError> {
        self.gate.acquire_timeout(wait).await?;
        self.submit_admitted(payload).await
    }

    /// Submit only if the window has room right now
    pub async fn try_submit(&self, payload: Bytes) -> std::result::Result<(), SubmitError> {
        if !self.gate.try_acquire() {
            debug!("Submission throttled, window saturated");
            return Err(SubmitError::Throttled);
        }
        self.submit_admitted(payload).await
    }

    /// Serialize `document` and submit it through the gate.
    ///
    /// `signature` is accepted for interface compatibility; signing is left to
    /// the endpoint integration and the value is not sent.
    pub async fn create_document(
        &self,
        document: &Document,
        signature: &str,
    ) -> std::result::Result<(), SubmitError> {
        let payload = document.to_payload()?;
        debug!(
            "Creating document {} ({}), signature of {} bytes",
            document.doc_id,
            document.doc_type,
            signature.len()
        );
        self.gated_submit(payload).await
    }

    /// Shared admission gate
    pub fn gate(&self) -> &Arc<RateLimitedGate> {
        &self.gate
    }

    /// Underlying submitter
    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    async fn submit_admitted(&self, payload: Bytes) -> std::result::Result<(), SubmitError> {
        self.submitter.submit(payload).await.map_err(|e| {
            warn!("Document submission failed: {}", e);
            SubmitError::Submission(e)
        })
    }
}
