//! Motif counting over parsed FASTA records.
//!
//! Matching is case-insensitive and counts non-overlapping occurrences,
//! scanning left to right and resuming after each match: `AA` occurs
//! twice in `AAAA`, not three times.

use std::fmt;
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::fasta::{parse_fasta_file, FastaError, HeaderlessPolicy};
use crate::model::{AnalysisResult, AnalysisSummary, SequenceRecord};

/// Errors that can occur during motif analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid motif: the motif must contain at least one character")]
    InvalidMotif,

    #[error(transparent)]
    Fasta(#[from] FastaError),
}

/// Result type for analysis operations.
pub type AnalyzeResult<T> = Result<T, AnalysisError>;

/// A validated, upper-cased motif.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif(String);

impl Motif {
    /// Normalizes `raw` to upper case. Surrounding whitespace is removed
    /// and an empty result is rejected.
    pub fn new(raw: &str) -> AnalyzeResult<Self> {
        let motif = raw.trim();
        if motif.is_empty() {
            return Err(AnalysisError::InvalidMotif);
        }
        Ok(Self(motif.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Never true for a constructed motif.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Counts non-overlapping, case-insensitive occurrences of `motif`.
pub fn count_motif(sequence: &str, motif: &Motif) -> usize {
    sequence.to_uppercase().matches(motif.as_str()).count()
}

/// Occurrences per possible start position.
///
/// Returns exactly 0 when the sequence is shorter than the motif.
pub fn motif_frequency(count: usize, sequence_length: usize, motif_length: usize) -> f64 {
    if sequence_length < motif_length {
        return 0.0;
    }
    count as f64 / (sequence_length - motif_length + 1) as f64
}

/// Analyzes a single record. Anonymous records get an empty id.
pub fn analyze_record(record: &SequenceRecord, motif: &Motif) -> AnalysisResult {
    let sequence_length = record.len();
    let count = count_motif(record.sequence(), motif);

    AnalysisResult {
        sequence_id: record.id().unwrap_or_default().to_string(),
        sequence_length,
        motif: motif.to_string(),
        count,
        frequency: motif_frequency(count, sequence_length, motif.len()),
    }
}

/// Analyzes every record, one result per record in input order.
pub fn analyze_records(records: &[SequenceRecord], motif: &Motif) -> Vec<AnalysisResult> {
    records
        .iter()
        .map(|record| {
            let result = analyze_record(record, motif);
            debug!(
                "{}: {} x {} in {} bp",
                result.sequence_id, result.count, result.motif, result.sequence_length
            );
            result
        })
        .collect()
}

/// Validates the motif, then parses `path` and analyzes its records.
///
/// An invalid motif is reported before the file is touched.
pub fn analyze_fasta<P: AsRef<Path>>(
    path: P,
    motif: &str,
    policy: HeaderlessPolicy,
) -> AnalyzeResult<Vec<AnalysisResult>> {
    let motif = Motif::new(motif)?;
    analyze_fasta_with(path, &motif, policy)
}

/// Parses `path` and analyzes its records for an already validated motif.
pub fn analyze_fasta_with<P: AsRef<Path>>(
    path: P,
    motif: &Motif,
    policy: HeaderlessPolicy,
) -> AnalyzeResult<Vec<AnalysisResult>> {
    let records = parse_fasta_file(&path, policy)?;
    let results = analyze_records(&records, motif);

    let summary = summarize(&results);
    info!(
        "Found {} occurrence(s) of {} in {} sequence(s) from {}",
        summary.total_occurrences,
        motif,
        summary.total_sequences,
        path.as_ref().display()
    );
    Ok(results)
}

/// Totals over `results`.
pub fn summarize(results: &[AnalysisResult]) -> AnalysisSummary {
    AnalysisSummary::from_results(results)
}
