//! HTTP client for a local sentiment classification service.
//!
//! Speaks the inference-endpoint convention: POST /classify with
//! `{"inputs": ...}`, response is a candidate list ordered by score;
//! the top candidate is the classification.

use serde::{Deserialize, Serialize};

use super::{CollaboratorError, SentimentClient, SentimentScore};
use crate::config;

/// HTTP-backed sentiment collaborator.
pub struct HttpSentimentClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpSentimentClient {
    /// Create a client pointing at a sentiment service instance.
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

    /// Default local sentiment service with the standard timeout.
    pub fn default_local() -> Self {
        Self::new(
            config::DEFAULT_SENTIMENT_URL,
            config::COLLABORATOR_TIMEOUT_SECS,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Request body for POST /classify
#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

/// One candidate label in the /classify response.
#[derive(Deserialize)]
struct Candidate {
    label: String,
    score: f32,
}

impl SentimentClient for HttpSentimentClient {
    fn classify(&self, text: &str) -> Result<SentimentScore, CollaboratorError> {
        // Classifier behavior on empty input is undefined; reject here
        // rather than let the service produce an arbitrary label.
        if text.trim().is_empty() {
            return Err(CollaboratorError::EmptyInput);
        }

        let url = format!("{}/classify", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&ClassifyRequest { inputs: text })
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

        let candidates: Vec<Candidate> = response
            .json()
            .map_err(|e| CollaboratorError::ResponseParsing(e.to_string()))?;

        let top = candidates.into_iter().next().ok_or_else(|| {
            CollaboratorError::ResponseParsing("empty candidate list".to_string())
        })?;

        Ok(SentimentScore {
            label: top.label,
            score: top.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = HttpSentimentClient::new("http://localhost:8001/", 5);
        assert_eq!(client.base_url(), "http://localhost:8001");
    }

    #[test]
    fn default_local_uses_config_endpoint() {
        let client = HttpSentimentClient::default_local();
        assert_eq!(client.base_url(), crate::config::DEFAULT_SENTIMENT_URL);
    }

    #[test]
    fn empty_input_is_rejected_without_a_request() {
        // Points at a dead port; the guard must fire before any I/O.
        let client = HttpSentimentClient::new("http://127.0.0.1:9", 1);
        let err = client.classify("   ").unwrap_err();
        assert!(matches!(err, CollaboratorError::EmptyInput));
    }
}
