//! Timeframe extraction via the NER collaborator.

use std::collections::BTreeSet;

use crate::collaborators::NerClient;

use super::PipelineError;

/// Entity labels retained as timeframes.
const TEMPORAL_LABELS: &[&str] = &["DATE", "TIME"];

/// Extract deduplicated timeframe mentions from a transcript.
///
/// One collaborator call per transcript; only DATE/TIME spans are kept.
/// Geographic, organization, and person entities are dropped here —
/// patient identity is resolved by the summary stage, not by NER.
/// A collaborator failure propagates; it is never defaulted away.
pub fn extract_timeframes(
    ner: &dyn NerClient,
    text: &str,
) -> Result<BTreeSet<String>, PipelineError> {
    if text.trim().is_empty() {
        return Ok(BTreeSet::new());
    }

    let entities = ner.entities(text).map_err(PipelineError::Ner)?;

    Ok(entities
        .into_iter()
        .filter(|e| TEMPORAL_LABELS.contains(&e.label.as_str()))
        .map(|e| e.text)
        .collect())
}
