//! Batch processing: the pipeline applied independently per transcript.
//!
//! Transcripts share no mutable state, so the fold below is sequential
//! only for simplicity; each element is an independent pure
//! transformation of its input.

use std::fs;
use std::path::Path;
use std::time::Instant;

use uuid::Uuid;

use super::analyzer::TranscriptAnalyzer;
use super::types::{BatchEntry, BatchRow};
use super::PipelineError;

/// Fresh id for one batch run, used only for log correlation.
pub fn new_batch_id() -> String {
    Uuid::new_v4().to_string()
}

/// Run the analyzer over each (filename, text) pair.
///
/// Output order matches input order, one entry per transcript. A
/// collaborator failure aborts the batch: the remaining transcripts
/// would hit the same unavailable service, and partial results must
/// never be silently padded with defaults.
pub fn process_batch(
    analyzer: &TranscriptAnalyzer,
    inputs: &[(String, String)],
) -> Result<Vec<BatchEntry>, PipelineError> {
    let batch_id = new_batch_id();
    let start = Instant::now();

    let mut entries = Vec::with_capacity(inputs.len());
    for (filename, text) in inputs {
        let report = analyzer.analyze(text)?;
        entries.push(BatchEntry {
            filename: filename.clone(),
            report,
        });
    }

    tracing::info!(
        batch_id = %batch_id,
        transcripts = entries.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Batch processing complete"
    );

    Ok(entries)
}

/// Read UTF-8 transcript files into (filename, text) pairs.
/// The filename tag is the file stem, without directory or extension.
pub fn load_transcript_files<P: AsRef<Path>>(
    paths: &[P],
) -> Result<Vec<(String, String)>, PipelineError> {
    let mut inputs = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PipelineError::TranscriptRead {
            path: path.display().to_string(),
            source,
        })?;
        let filename = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        inputs.push((filename, text));
    }

    Ok(inputs)
}

/// Project a batch into the five-column review table.
pub fn summary_rows(entries: &[BatchEntry]) -> Vec<BatchRow> {
    entries
        .iter()
        .map(|e| BatchRow {
            filename: e.filename.clone(),
            patient: e.report.summary.name.clone(),
            diagnosis: e.report.summary.diagnosis.clone(),
            sentiment: e.report.sentiment_analysis.sentiment.as_str().to_string(),
            status: e.report.summary.status.clone(),
        })
        .collect()
}
