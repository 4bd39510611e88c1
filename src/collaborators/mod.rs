//! External analysis collaborators: named-entity recognition and
//! sentiment classification.
//!
//! Two traits define the collaborator seams. The pipeline only ever sees
//! the traits, so every stage is testable with fakes and no process-wide
//! model state exists.

pub mod http_ner;
pub mod http_sentiment;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("Connection to {0} failed")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Collaborator returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Refusing to classify empty input")]
    EmptyInput,
}

/// One entity span recognized by the NER collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub text: String,
    pub label: String,
}

/// Label and confidence score from the sentiment collaborator.
/// Score is in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub label: String,
    pub score: f32,
}

/// Named-entity recognition over free text.
///
/// One call per transcript. The label vocabulary is the collaborator's
/// own tagging scheme; the pipeline filters for the labels it needs.
pub trait NerClient: Send + Sync {
    fn entities(&self, text: &str) -> Result<Vec<NamedEntity>, CollaboratorError>;
}

/// Single-label sentiment classification over free text.
///
/// Behavior on empty input is undefined; callers must not pass it
/// (implementations may reject it with `CollaboratorError::EmptyInput`).
pub trait SentimentClient: Send + Sync {
    fn classify(&self, text: &str) -> Result<SentimentScore, CollaboratorError>;
}
