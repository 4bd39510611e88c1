//! HTTP client for a local NER service.
//!
//! Speaks the spaCy-server convention: POST /ent with `{"text": ...}`,
//! response is a flat array of entity spans.

use serde::{Deserialize, Serialize};

use super::{CollaboratorError, NamedEntity, NerClient};
use crate::config;

/// HTTP-backed NER collaborator.
pub struct HttpNerClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpNerClient {
    /// Create a client pointing at an NER service instance.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default local NER service with the standard timeout.
    pub fn default_local() -> Self {
        Self::new(config::DEFAULT_NER_URL, config::COLLABORATOR_TIMEOUT_SECS)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Request body for POST /ent
#[derive(Serialize)]
struct EntRequest<'a> {
    text: &'a str,
}

/// One span in the /ent response. Extra fields (offsets, etc.) are ignored.
#[derive(Deserialize)]
struct EntSpan {
    text: String,
    label: String,
}

impl NerClient for HttpNerClient {
    fn entities(&self, text: &str) -> Result<Vec<NamedEntity>, CollaboratorError> {
        let url = format!("{}/ent", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&EntRequest { text })
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    CollaboratorError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    CollaboratorError::Timeout(self.timeout_secs)
                } else {
                    CollaboratorError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(CollaboratorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let spans: Vec<EntSpan> = response
            .json()
            .map_err(|e| CollaboratorError::ResponseParsing(e.to_string()))?;

        Ok(spans
            .into_iter()
            .map(|s| NamedEntity {
                text: s.text,
                label: s.label,
            })
            .collect())
    }
}
