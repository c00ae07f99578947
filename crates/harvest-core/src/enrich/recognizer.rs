use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("Recognition failed: {0}")]
    Failed(String),
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type RecognitionResult<T> = Result<T, RecognitionError>;

/// A labeled span as produced by a named-entity model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub label: String,
    pub text: String,
}

impl EntitySpan {
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Named-entity recognition model.
///
/// Implementations are built once at startup and shared read-only between
/// requests.
#[async_trait::async_trait]
pub trait EntityRecognizer: Send + Sync {
    fn name(&self) -> &str;

    async fn recognize(&self, text: &str) -> RecognitionResult<Vec<EntitySpan>>;
}

/// Recognizes nothing. Records pass through enrichment untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRecognizer;

#[async_trait::async_trait]
impl EntityRecognizer for NullRecognizer {
    fn name(&self) -> &str {
        "null"
    }

    async fn recognize(&self, _text: &str) -> RecognitionResult<Vec<EntitySpan>> {
        Ok(Vec::new())
    }
}

#[derive(Debug, Serialize)]
struct RecognizeRequest<'a> {
    text: &'a str,
}

/// Client for an NER model served over HTTP.
///
/// Sends `{"text": ...}` and expects a JSON array of `{"label", "text"}`.
pub struct RemoteRecognizer {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteRecognizer {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> RecognitionResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl EntityRecognizer for RemoteRecognizer {
    fn name(&self) -> &str {
        "remote"
    }

    async fn recognize(&self, text: &str) -> RecognitionResult<Vec<EntitySpan>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RecognizeRequest { text })
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    RecognitionError::ModelUnavailable(self.endpoint.clone())
                } else {
                    RecognitionError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecognitionError::Failed(format!(
                "model server returned {status}"
            )));
        }

        Ok(response.json::<Vec<EntitySpan>>().await?)
    }
}
