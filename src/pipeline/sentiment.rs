//! Patient sentiment mapping and rule-based intent detection.
//!
//! The collaborator judges the emotional tone of the patient's combined
//! utterances; intent comes from a priority-ordered keyword table, first
//! matching row wins.

use crate::collaborators::SentimentClient;

use super::transcript;
use super::types::{Intent, SentimentLabel, SentimentResult, Turn};
use super::PipelineError;

/// Priority-ordered intent rules over the lower-cased patient text.
const INTENT_RULES: &[(&[&str], Intent)] = &[
    (&["worry", "anxious", "concern"], Intent::SeekingReassurance),
    (&["better", "improving", "helped"], Intent::ReportingImprovement),
    (&["pain", "symptom"], Intent::ReportingSymptoms),
];

/// Classify the patient's sentiment and intent from their turns.
///
/// With no patient utterances (including tag-less transcripts) the
/// collaborator is never invoked and the neutral/informational default
/// with zero confidence is returned. A collaborator failure propagates.
pub fn classify_sentiment_intent(
    client: &dyn SentimentClient,
    turns: &[Turn],
) -> Result<SentimentResult, PipelineError> {
    let combined = transcript::patient_text(turns);
    if combined.trim().is_empty() {
        return Ok(SentimentResult::default());
    }

    let score = client.classify(&combined).map_err(PipelineError::Sentiment)?;

    Ok(SentimentResult {
        sentiment: map_label(&score.label),
        intent: detect_intent(&combined),
        confidence: score.score,
    })
}

/// Map the collaborator's raw label onto the clinical vocabulary.
/// Anything outside POSITIVE/NEGATIVE is Neutral.
fn map_label(raw: &str) -> SentimentLabel {
    match raw {
        "POSITIVE" => SentimentLabel::Reassured,
        "NEGATIVE" => SentimentLabel::Anxious,
        _ => SentimentLabel::Neutral,
    }
}

fn detect_intent(combined: &str) -> Intent {
    let lower = combined.to_lowercase();
    for (triggers, intent) in INTENT_RULES {
        if triggers.iter().any(|t| lower.contains(t)) {
            return *intent;
        }
    }
    Intent::ProvidingInformation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testutil::{FailingSentiment, FakeSentiment};
    use crate::pipeline::transcript::split_turns;

    fn classify(text: &str, label: &'static str, score: f32) -> SentimentResult {
        let turns = split_turns(text);
        classify_sentiment_intent(&FakeSentiment { label, score }, &turns).unwrap()
    }

    #[test]
    fn positive_label_maps_to_reassured() {
        let result = classify("Patient: All good.", "POSITIVE", 0.97);
        assert_eq!(result.sentiment, SentimentLabel::Reassured);
        assert_eq!(result.confidence, 0.97);
    }

    #[test]
    fn negative_label_maps_to_anxious() {
        let result = classify("Patient: It hurts.", "NEGATIVE", 0.88);
        assert_eq!(result.sentiment, SentimentLabel::Anxious);
    }

    #[test]
    fn unfamiliar_label_maps_to_neutral() {
        let result = classify("Patient: It is Tuesday.", "LABEL_1", 0.5);
        assert_eq!(result.sentiment, SentimentLabel::Neutral);
    }

    #[test]
    fn worry_outranks_every_other_intent() {
        let result = classify(
            "Patient: I'm doing better but I worry about the pain.",
            "NEGATIVE",
            0.9,
        );
        assert_eq!(result.intent, Intent::SeekingReassurance);
    }

    #[test]
    fn better_with_discomfort_reports_improvement() {
        // "discomfort" is not an intent trigger, so "better" decides.
        let result = classify(
            "Patient: I'm doing better, but I still have some discomfort now and then.",
            "POSITIVE",
            0.95,
        );
        assert_eq!(result.intent, Intent::ReportingImprovement);
    }

    #[test]
    fn pain_alone_reports_symptoms() {
        let result = classify("Patient: The pain is constant.", "NEGATIVE", 0.9);
        assert_eq!(result.intent, Intent::ReportingSymptoms);
    }

    #[test]
    fn no_trigger_provides_information() {
        let result = classify("Patient: I was driving home at noon.", "LABEL_1", 0.6);
        assert_eq!(result.intent, Intent::ProvidingInformation);
    }

    #[test]
    fn no_patient_turns_returns_default_without_collaborator_call() {
        let turns = split_turns("Physician: Anyone there?");
        let result = classify_sentiment_intent(&FailingSentiment, &turns).unwrap();
        assert_eq!(result, SentimentResult::default());
    }

    #[test]
    fn tagless_transcript_behaves_like_empty() {
        let turns = split_turns("just free text with no speaker tags");
        let result = classify_sentiment_intent(&FailingSentiment, &turns).unwrap();
        assert_eq!(result, SentimentResult::default());
    }

    #[test]
    fn collaborator_failure_propagates() {
        let turns = split_turns("Patient: Hello.");
        let err = classify_sentiment_intent(&FailingSentiment, &turns).unwrap_err();
        assert!(matches!(err, PipelineError::Sentiment(_)));
    }

    #[test]
    fn only_patient_turns_feed_the_collaborator() {
        // Physician mentions worry; patient does not. Intent must come
        // from patient text only.
        let result = classify(
            "Physician: Any worry or concern?\nPatient: None at all.",
            "POSITIVE",
            0.8,
        );
        assert_eq!(result.intent, Intent::ProvidingInformation);
    }
}
