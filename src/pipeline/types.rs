//! Core types for the transcript analysis pipeline.
//!
//! These types model the full lifecycle:
//! Transcript → Turns → Clinical Facts → Summary → Sentiment → SOAP Note.
//!
//! Deduplicated tag sets are `BTreeSet` so iteration and serialization
//! order is always lexical; every scalar derived from a set (the summary
//! diagnosis) is therefore deterministic.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════
// Transcript Turns
// ═══════════════════════════════════════════

/// Who produced a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speaker {
    Physician,
    Patient,
    /// Fallback for tags the splitter does not recognize.
    Unknown,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Physician => "Physician",
            Self::Patient => "Patient",
            Self::Unknown => "Unknown",
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Physician" => Self::Physician,
            "Patient" => Self::Patient,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One speaker-attributed line of a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

// ═══════════════════════════════════════════
// Clinical Facts
// ═══════════════════════════════════════════

/// Deduplicated clinical fact sets extracted from one transcript.
///
/// Symptom/treatment/diagnosis tags come only from the fixed rule table
/// in `facts.rs`; timeframes are free-form NER spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalFacts {
    pub symptoms: BTreeSet<String>,
    pub treatments: BTreeSet<String>,
    pub diagnoses: BTreeSet<String>,
    pub timeframes: BTreeSet<String>,
}

// ═══════════════════════════════════════════
// Patient Summary
// ═══════════════════════════════════════════

/// Patient-level synthesis of the extracted facts plus transcript cues.
///
/// `diagnosis` is deliberately a scalar: the lexically first diagnosis
/// tag, or "Not specified" when none was extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub name: String,
    pub symptoms: BTreeSet<String>,
    pub diagnosis: String,
    pub treatment: BTreeSet<String>,
    pub status: String,
    pub prognosis: String,
}

impl Default for PatientSummary {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            symptoms: BTreeSet::new(),
            diagnosis: "Not specified".to_string(),
            treatment: BTreeSet::new(),
            status: "Unknown".to_string(),
            prognosis: "Unknown".to_string(),
        }
    }
}

// ═══════════════════════════════════════════
// Sentiment & Intent
// ═══════════════════════════════════════════

/// Clinical sentiment vocabulary mapped from the collaborator's raw label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Reassured,
    Anxious,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reassured => "Reassured",
            Self::Anxious => "Anxious",
            Self::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Communicative intent inferred from patient utterances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    #[serde(rename = "Seeking reassurance")]
    SeekingReassurance,
    #[serde(rename = "Reporting improvement")]
    ReportingImprovement,
    #[serde(rename = "Reporting symptoms")]
    ReportingSymptoms,
    #[serde(rename = "Providing information")]
    ProvidingInformation,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SeekingReassurance => "Seeking reassurance",
            Self::ReportingImprovement => "Reporting improvement",
            Self::ReportingSymptoms => "Reporting symptoms",
            Self::ProvidingInformation => "Providing information",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sentiment and intent judgment over the patient's combined utterances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    pub intent: Intent,
    /// Collaborator confidence for the mapped label, passed through
    /// verbatim. Zero when no patient utterances exist.
    pub confidence: f32,
}

impl Default for SentimentResult {
    fn default() -> Self {
        Self {
            sentiment: SentimentLabel::Neutral,
            intent: Intent::ProvidingInformation,
            confidence: 0.0,
        }
    }
}

// ═══════════════════════════════════════════
// SOAP Note
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapSubjective {
    pub chief_complaint: String,
    pub history: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapObjective {
    pub physical_exam: String,
    pub observations: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapAssessment {
    pub diagnosis: String,
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapPlan {
    pub treatment: String,
    pub follow_up: String,
}

/// Four-section clinical note. Fields the transcript never resolves
/// hold "Unknown".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapNote {
    pub subjective: SoapSubjective,
    pub objective: SoapObjective,
    pub assessment: SoapAssessment,
    pub plan: SoapPlan,
}

// ═══════════════════════════════════════════
// Analysis Report (pipeline output)
// ═══════════════════════════════════════════

/// Complete structured output for one transcript. Serializes to the
/// four-key JSON object consumers receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub medical_details: ClinicalFacts,
    pub summary: PatientSummary,
    pub sentiment_analysis: SentimentResult,
    pub soap_note: SoapNote,
}

impl AnalysisReport {
    /// Pretty-printed JSON, the download/export shape.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ═══════════════════════════════════════════
// Batch Results
// ═══════════════════════════════════════════

/// One batch element: the full report tagged with its source filename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub filename: String,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

/// One row of the five-column batch review table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRow {
    pub filename: String,
    pub patient: String,
    pub diagnosis: String,
    pub sentiment: String,
    pub status: String,
}
