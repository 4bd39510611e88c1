//! SOAP note composition from the patient summary and transcript cues.

use super::types::{
    PatientSummary, SoapAssessment, SoapNote, SoapObjective, SoapPlan, SoapSubjective,
};

/// Compose the four-section clinical note.
///
/// Keyword checks run against the lower-cased transcript except the
/// "September" month mention, which is matched case-sensitively.
pub fn compose_soap_note(summary: &PatientSummary, text: &str) -> SoapNote {
    let lower = text.to_lowercase();

    let mut history = String::from("Unknown");
    if lower.contains("car accident") {
        history = String::from("Patient involved in a car accident");
        if text.contains("September") {
            history.push_str(" in September");
        }
    }

    let physical_exam = if lower.contains("physical examination") {
        "Physical examination mentioned, details not provided"
    } else {
        "Unknown"
    };

    // Legacy rule: painkillers append to whatever the treatment field
    // currently holds, including the bare "Unknown" default. Downstream
    // consumers match on that exact string, so it stays.
    let mut treatment = String::from("Unknown");
    if lower.contains("physiotherapy") {
        treatment = String::from("Continue physiotherapy");
    }
    if lower.contains("painkiller") {
        treatment.push_str(", use painkillers as needed");
    }

    let chief_complaint = summary
        .symptoms
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    SoapNote {
        subjective: SoapSubjective {
            chief_complaint,
            history,
        },
        objective: SoapObjective {
            physical_exam: physical_exam.to_string(),
            observations: "Based on patient's statements".to_string(),
        },
        assessment: SoapAssessment {
            diagnosis: summary.diagnosis.clone(),
            severity: "Improving based on patient statements".to_string(),
        },
        plan: SoapPlan {
            treatment,
            follow_up: "As needed based on symptom progression".to_string(),
        },
    }
}
