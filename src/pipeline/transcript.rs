//! Transcript splitting into speaker-tagged turns.

use super::types::{Speaker, Turn};

const PHYSICIAN_TAG: &str = "Physician:";
const PATIENT_TAG: &str = "Patient:";

/// Split raw transcript text into an ordered sequence of turns.
///
/// A line whose trimmed form starts with "Physician:" or "Patient:"
/// (exact case) yields one turn with the remainder trimmed. Other lines
/// yield nothing here but stay in the raw text for keyword scanning.
/// Zero turns is a valid result, not an error.
pub fn split_turns(text: &str) -> Vec<Turn> {
    let mut turns = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(PHYSICIAN_TAG) {
            turns.push(Turn {
                speaker: Speaker::Physician,
                text: rest.trim().to_string(),
            });
        } else if let Some(rest) = line.strip_prefix(PATIENT_TAG) {
            turns.push(Turn {
                speaker: Speaker::Patient,
                text: rest.trim().to_string(),
            });
        }
    }

    turns
}

/// Combine all patient turn texts into one space-joined string.
/// Empty when the transcript has no patient turns.
pub fn patient_text(turns: &[Turn]) -> String {
    turns
        .iter()
        .filter(|t| t.speaker == Speaker::Patient)
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testutil::sample_transcript;

    #[test]
    fn splits_tagged_lines_in_order() {
        let turns = split_turns("Physician: How are you?\nPatient: Doing better.\n");
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].speaker, Speaker::Physician);
        assert_eq!(turns[0].text, "How are you?");
        assert_eq!(turns[1].speaker, Speaker::Patient);
        assert_eq!(turns[1].text, "Doing better.");
    }

    #[test]
    fn untagged_lines_are_skipped() {
        let text = "Visit notes, 3rd of March\nPatient: I feel fine.\n(recording ends)";
        let turns = split_turns(text);
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].speaker, Speaker::Patient);
    }

    #[test]
    fn tag_match_is_case_sensitive() {
        let turns = split_turns("patient: lowercase tag\nPATIENT: shouted tag");
        assert!(turns.is_empty());
    }

    #[test]
    fn leading_whitespace_before_tag_is_tolerated() {
        let turns = split_turns("   Patient:   spaced out   ");
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].text, "spaced out");
    }

    #[test]
    fn empty_transcript_yields_no_turns() {
        assert!(split_turns("").is_empty());
        assert!(split_turns("\n\n\n").is_empty());
    }

    #[test]
    fn patient_text_joins_with_single_spaces() {
        let turns = split_turns("Patient: First.\nPhysician: Question?\nPatient: Second.");
        assert_eq!(patient_text(&turns), "First. Second.");
    }

    #[test]
    fn patient_text_is_empty_without_patient_turns() {
        let turns = split_turns("Physician: Monologue.");
        assert_eq!(patient_text(&turns), "");
    }

    #[test]
    fn sample_transcript_alternates_speakers() {
        let turns = split_turns(sample_transcript());
        assert_eq!(turns.len(), 13);
        assert_eq!(turns[0].speaker, Speaker::Physician);
        assert_eq!(turns[1].speaker, Speaker::Patient);
        assert!(patient_text(&turns).contains("whiplash injury"));
    }
}
