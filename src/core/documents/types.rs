//! Document data model

use serde::{Deserialize, Serialize};

/// A document submitted to the creation endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Taxpayer number of the participant submitting the document
    #[serde(default)]
    pub participant_inn: String,
    /// Document identifier
    pub doc_id: String,
    /// Document status, e.g. `draft`
    #[serde(default)]
    pub doc_status: String,
    /// Document type, e.g. `LP_INTRODUCE_GOODS`
    pub doc_type: String,
    /// Whether the goods are imported
    #[serde(default)]
    pub import_request: bool,
    /// Taxpayer number of the goods owner
    #[serde(default)]
    pub owner_inn: String,
}

impl Document {
    /// Create a new document
    pub fn new(doc_id: impl Into<String>, doc_type: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            doc_type: doc_type.into(),
            ..Default::default()
        }
    }

    pub fn with_participant_inn(mut self, inn: impl Into<String>) -> Self {
        self.participant_inn = inn.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.doc_status = status.into();
        self
    }

    pub fn with_import_request(mut self, import_request: bool) -> Self {
        self.import_request = import_request;
        self
    }

    pub fn with_owner_inn(mut self, inn: impl Into<String>) -> Self {
        self.owner_inn = inn.into();
        self
    }

    /// JSON request body for this document
    pub fn to_payload(&self) -> Result<bytes::Bytes, serde_json::Error> {
        serde_json::to_vec(self).map(bytes::Bytes::from)
    }
}
