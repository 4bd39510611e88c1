//! The transcript analysis pipeline.
//!
//! Stages run in a fixed, synchronous order per transcript:
//! split turns → extract timeframes (NER) → extract clinical facts →
//! synthesize patient summary → classify sentiment/intent → compose SOAP
//! note. Every stage is a pure function except the two collaborator calls.

pub mod types;
pub mod transcript;
pub mod entities;
pub mod facts;
pub mod summary;
pub mod sentiment;
pub mod soap;
pub mod analyzer;
pub mod batch;

use thiserror::Error;

use crate::collaborators::CollaboratorError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("NER collaborator failed: {0}")]
    Ner(#[source] CollaboratorError),

    #[error("Sentiment collaborator failed: {0}")]
    Sentiment(#[source] CollaboratorError),

    #[error("Failed to read transcript {path}")]
    TranscriptRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
