//! Data model for the motif scanner.
//!
//! This module contains all data structures for representing:
//! - Parsed FASTA records
//! - Per-sequence motif analysis results and their summary
//! - Chart viewer state

use serde::Serialize;

/// A single FASTA record with its identifier and sequence.
///
/// The identifier is `None` only for the anonymous record produced from a
/// file without any header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    id: Option<String>,
    sequence: String,
}

impl SequenceRecord {
    /// Creates a record with an identifier.
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            sequence: sequence.into(),
        }
    }

    /// Creates a record without an identifier.
    pub fn anonymous(sequence: impl Into<String>) -> Self {
        Self {
            id: None,
            sequence: sequence.into(),
        }
    }

    /// The header text (without '>'), if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The sequence body, case preserved.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Returns the length of the sequence in characters.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Motif statistics for one sequence.
///
/// Field order is the column order of the CSV export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub sequence_id: String,
    pub sequence_length: usize,
    /// Upper-cased motif
    pub motif: String,
    /// Non-overlapping occurrences
    pub count: usize,
    /// `count / (sequence_length - motif_length + 1)`, or 0 when the
    /// sequence is shorter than the motif
    pub frequency: f64,
}

/// Totals over a result collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub total_sequences: usize,
    pub total_occurrences: usize,
}

impl AnalysisSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        Self {
            total_sequences: results.len(),
            total_occurrences: results.iter().map(|r| r.count).sum(),
        }
    }
}

/// Input mode of the chart viewer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerMode {
    #[default]
    Normal,
    /// Typing a `:` command; holds the text typed so far
    Command(String),
}

/// State of the interactive chart viewer.
#[derive(Debug, Clone)]
pub struct ViewerState {
    pub results: Vec<AnalysisResult>,
    pub motif: String,
    /// Index of the first bar on screen
    pub first_bar: usize,
    /// Number of bars that fit on screen
    pub visible_bars: usize,
    pub mode: ViewerMode,
    pub show_help: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl ViewerState {
    pub fn new(results: Vec<AnalysisResult>, motif: impl Into<String>) -> Self {
        let status_message = if results.is_empty() {
            Some("No sequences to display".to_string())
        } else {
            None
        };
        Self {
            results,
            motif: motif.into(),
            first_bar: 0,
            visible_bars: 1,
            mode: ViewerMode::Normal,
            show_help: false,
            should_quit: false,
            status_message,
        }
    }

    /// Bars currently on screen.
    pub fn visible_results(&self) -> &[AnalysisResult] {
        let start = self.first_bar.min(self.results.len());
        let end = (start + self.visible_bars).min(self.results.len());
        &self.results[start..end]
    }

    /// Largest valid value for `first_bar`.
    fn max_first_bar(&self) -> usize {
        self.results.len().saturating_sub(self.visible_bars)
    }

    pub fn scroll_left(&mut self, n: usize) {
        self.first_bar = self.first_bar.saturating_sub(n);
    }

    pub fn scroll_right(&mut self, n: usize) {
        self.first_bar = (self.first_bar + n).min(self.max_first_bar());
    }

    pub fn scroll_to_start(&mut self) {
        self.first_bar = 0;
    }

    pub fn scroll_to_end(&mut self) {
        self.first_bar = self.max_first_bar();
    }

    /// Updates how many bars fit, keeping the view inside the results.
    pub fn update_visible_bars(&mut self, visible_bars: usize) {
        self.visible_bars = visible_bars.max(1);
        self.first_bar = self.first_bar.min(self.max_first_bar());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, count: usize) -> AnalysisResult {
        AnalysisResult {
            sequence_id: id.to_string(),
            sequence_length: 10,
            motif: "ATG".to_string(),
            count,
            frequency: 0.0,
        }
    }

    #[test]
    fn test_record_accessors() {
        let record = SequenceRecord::new("seq1", "acGT");
        assert_eq!(record.id(), Some("seq1"));
        assert_eq!(record.sequence(), "acGT");
        assert_eq!(record.len(), 4);

        // Length counts characters, not bytes
        assert_eq!(SequenceRecord::new("u", "ACGTé").len(), 5);

        let anon = SequenceRecord::anonymous("");
        assert_eq!(anon.id(), None);
        assert!(anon.is_empty());
    }

    #[test]
    fn test_summary() {
        let results = vec![result("a", 3), result("b", 1), result("c", 0)];
        let summary = AnalysisSummary::from_results(&results);
        assert_eq!(summary.total_sequences, 3);
        assert_eq!(summary.total_occurrences, 4);
        assert_eq!(AnalysisSummary::from_results(&[]), AnalysisSummary::default());
    }

    #[test]
    fn test_viewer_scrolling() {
        let results: Vec<_> = (0..10).map(|i| result(&format!("s{}", i), i)).collect();
        let mut state = ViewerState::new(results, "ATG");
        state.update_visible_bars(4);

        state.scroll_right(3);
        assert_eq!(state.first_bar, 3);
        state.scroll_right(100);
        assert_eq!(state.first_bar, 6);
        assert_eq!(state.visible_results().len(), 4);
        assert_eq!(state.visible_results()[0].sequence_id, "s6");

        state.scroll_left(2);
        assert_eq!(state.first_bar, 4);
        state.scroll_to_start();
        assert_eq!(state.first_bar, 0);
        state.scroll_to_end();
        assert_eq!(state.first_bar, 6);

        // Growing the window pulls the view back in range
        state.update_visible_bars(20);
        assert_eq!(state.first_bar, 0);
        assert_eq!(state.visible_results().len(), 10);
    }

    #[test]
    fn test_viewer_empty() {
        let mut state = ViewerState::new(Vec::new(), "ATG");
        assert!(state.status_message.is_some());
        state.update_visible_bars(0);
        assert_eq!(state.visible_bars, 1);
        state.scroll_right(1);
        assert_eq!(state.first_bar, 0);
        assert!(state.visible_results().is_empty());
    }
}
