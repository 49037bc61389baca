//! Document submission transport

use super::errors::SubmissionError;
use crate::config::models::ClientConfig;
use crate::utils::error::Result as CrptResult;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Sends one serialized document to the remote endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentSubmitter: Send + Sync {
    /// Submit a serialized payload
    async fn submit(&self, payload: Bytes) -> Result<(), SubmissionError>;
}

#[async_trait]
impl<S> DocumentSubmitter for Arc<S>
where
    S: DocumentSubmitter + ?Sized,
{
    async fn submit(&self, payload: Bytes) -> Result<(), SubmissionError> {
        (**self).submit(payload).await
    }
}

/// Submits documents over HTTP as `application/json` POST requests
#[derive(Debug, Clone)]
pub struct HttpDocumentSubmitter {
    client: Client,
    endpoint: String,
}

impl HttpDocumentSubmitter {
    /// Create a submitter posting to `endpoint`.
    ///
    /// A client that cannot be built is reported as `CrptError::HttpClient`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> CrptResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("crpt-api-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, endpoint))
    }

    /// Create a submitter from client configuration
    pub fn from_config(config: &ClientConfig) -> CrptResult<Self> {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    /// Reuse an existing HTTP client
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint documents are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DocumentSubmitter for HttpDocumentSubmitter {
    async fn submit(&self, payload: Bytes) -> Result<(), SubmissionError> {
        debug!("Posting {} byte document to {}", payload.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        // Always drain the body so the connection can be reused
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SubmissionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Document accepted with status {}", status);
        Ok(())
    }
}
