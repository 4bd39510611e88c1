//! Clinical fact extraction via a declarative keyword rule table.
//!
//! The table is the single extensibility point: new clinical facts are
//! added as new rows, never as new code paths. One generic matcher
//! evaluates every row against the lower-cased transcript.

use std::collections::BTreeSet;

use super::types::ClinicalFacts;

/// Which fact set a rule feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactField {
    Symptom,
    Treatment,
    Diagnosis,
}

/// One keyword rule: any trigger substring produces the tag.
#[derive(Debug)]
pub struct FactRule {
    pub triggers: &'static [&'static str],
    pub tag: &'static str,
    pub field: FactField,
}

/// Fixed clinical vocabulary. Triggers are matched as case-insensitive
/// substrings of the full transcript text, not per turn.
pub const FACT_RULES: &[FactRule] = &[
    FactRule {
        triggers: &["pain", "discomfort"],
        tag: "Pain/Discomfort",
        field: FactField::Symptom,
    },
    FactRule {
        triggers: &["neck"],
        tag: "Neck pain",
        field: FactField::Symptom,
    },
    FactRule {
        triggers: &["back"],
        tag: "Back pain",
        field: FactField::Symptom,
    },
    FactRule {
        triggers: &["hit my head"],
        tag: "Head impact",
        field: FactField::Symptom,
    },
    FactRule {
        triggers: &["physiotherapy"],
        tag: "Physiotherapy sessions",
        field: FactField::Treatment,
    },
    FactRule {
        triggers: &["painkiller"],
        tag: "Painkillers",
        field: FactField::Treatment,
    },
    FactRule {
        triggers: &["whiplash"],
        tag: "Whiplash injury",
        field: FactField::Diagnosis,
    },
];

/// Evaluate the rule table against a transcript and merge in the NER
/// timeframes. Rules are independent and non-exclusive; each fires at
/// most once regardless of repeat occurrences (set semantics).
pub fn extract_clinical_facts(text: &str, timeframes: BTreeSet<String>) -> ClinicalFacts {
    let lower = text.to_lowercase();
    let mut facts = ClinicalFacts {
        timeframes,
        ..ClinicalFacts::default()
    };

    for rule in FACT_RULES {
        if rule.triggers.iter().any(|t| lower.contains(t)) {
            let field = match rule.field {
                FactField::Symptom => &mut facts.symptoms,
                FactField::Treatment => &mut facts.treatments,
                FactField::Diagnosis => &mut facts.diagnoses,
            };
            field.insert(rule.tag.to_string());
        }
    }

    facts
}

/// True when a tag belongs to the fixed rule-table vocabulary.
pub fn is_known_tag(tag: &str) -> bool {
    FACT_RULES.iter().any(|r| r.tag == tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testutil::sample_transcript;

    fn extract(text: &str) -> ClinicalFacts {
        extract_clinical_facts(text, BTreeSet::new())
    }

    #[test]
    fn accident_transcript_fires_every_expected_rule() {
        let facts = extract(sample_transcript());

        for symptom in ["Pain/Discomfort", "Neck pain", "Back pain", "Head impact"] {
            assert!(facts.symptoms.contains(symptom), "missing symptom {symptom}");
        }
        for treatment in ["Physiotherapy sessions", "Painkillers"] {
            assert!(
                facts.treatments.contains(treatment),
                "missing treatment {treatment}"
            );
        }
        assert!(facts.diagnoses.contains("Whiplash injury"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let facts = extract("Patient: WHIPLASH after the crash, NECK hurts.");
        assert!(facts.diagnoses.contains("Whiplash injury"));
        assert!(facts.symptoms.contains("Neck pain"));
    }

    #[test]
    fn repeated_triggers_fire_once() {
        let once = extract("pain");
        let thrice = extract("pain pain pain");
        assert_eq!(once, thrice);
        assert_eq!(once.symptoms.len(), 1);
    }

    #[test]
    fn either_trigger_of_a_pair_fires_the_rule() {
        assert!(extract("mild discomfort").symptoms.contains("Pain/Discomfort"));
        assert!(extract("sharp pain").symptoms.contains("Pain/Discomfort"));
    }

    #[test]
    fn empty_text_yields_empty_sets() {
        let facts = extract("");
        assert!(facts.symptoms.is_empty());
        assert!(facts.treatments.is_empty());
        assert!(facts.diagnoses.is_empty());
        assert!(facts.timeframes.is_empty());
    }

    #[test]
    fn timeframes_pass_through_untouched() {
        let mut timeframes = BTreeSet::new();
        timeframes.insert("September 1st".to_string());
        let facts = extract_clinical_facts("no triggers here at all", timeframes);
        assert!(facts.timeframes.contains("September 1st"));
    }

    #[test]
    fn every_extracted_tag_belongs_to_the_vocabulary() {
        let facts = extract(sample_transcript());
        for tag in facts
            .symptoms
            .iter()
            .chain(facts.treatments.iter())
            .chain(facts.diagnoses.iter())
        {
            assert!(is_known_tag(tag), "tag {tag} not in rule table");
            assert!(!tag.is_empty());
        }
    }

    #[test]
    fn rule_table_tags_are_unique_and_non_empty() {
        let mut seen = BTreeSet::new();
        for rule in FACT_RULES {
            assert!(!rule.tag.is_empty());
            assert!(!rule.triggers.is_empty());
            assert!(seen.insert(rule.tag), "duplicate tag {}", rule.tag);
        }
    }
}
