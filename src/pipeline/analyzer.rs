//! TranscriptAnalyzer — runs the full pipeline over one transcript.

use std::time::Instant;

use crate::collaborators::{NerClient, SentimentClient};

use super::types::AnalysisReport;
use super::{entities, facts, sentiment, soap, summary, transcript, PipelineError};

/// Per-transcript pipeline orchestrator.
///
/// Both collaborators are injected at construction, so the analyzer owns
/// no process-wide state and every stage is testable with fakes. One
/// analyzer can process any number of transcripts; nothing is cached
/// between calls.
pub struct TranscriptAnalyzer {
    ner: Box<dyn NerClient>,
    sentiment: Box<dyn SentimentClient>,
}

impl TranscriptAnalyzer {
    pub fn new(ner: Box<dyn NerClient>, sentiment: Box<dyn SentimentClient>) -> Self {
        Self { ner, sentiment }
    }

    /// Analyze one transcript into the full structured report.
    ///
    /// Stages run synchronously in dependency order. No-match conditions
    /// degrade to documented defaults; collaborator failures propagate.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport, PipelineError> {
        let start = Instant::now();

        let turns = transcript::split_turns(text);
        let timeframes = entities::extract_timeframes(self.ner.as_ref(), text)?;
        let medical_details = facts::extract_clinical_facts(text, timeframes);
        let patient_summary = summary::synthesize_summary(&medical_details, text);
        let sentiment_analysis =
            sentiment::classify_sentiment_intent(self.sentiment.as_ref(), &turns)?;
        let soap_note = soap::compose_soap_note(&patient_summary, text);

        tracing::debug!(
            turns = turns.len(),
            symptoms = medical_details.symptoms.len(),
            treatments = medical_details.treatments.len(),
            diagnoses = medical_details.diagnoses.len(),
            timeframes = medical_details.timeframes.len(),
            intent = %sentiment_analysis.intent,
            duration_ms = start.elapsed().as_millis() as u64,
            "Transcript analysis complete"
        );

        Ok(AnalysisReport {
            medical_details,
            summary: patient_summary,
            sentiment_analysis,
            soap_note,
        })
    }
}
