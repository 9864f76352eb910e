//! One analysis run: validate, parse, count, then hand results to the
//! output ports.
//!
//! Nothing is written until the motif is valid, the input has been read
//! and the chart has been rendered. If saving the chart fails, the CSV
//! written just before it is removed, so a failed run leaves no output.

use std::fs;
use std::path::PathBuf;

use log::{info, warn};
use thiserror::Error;

use crate::analysis::{analyze_fasta_with, summarize, AnalysisError, Motif};
use crate::config::RunConfig;
use crate::model::{AnalysisResult, AnalysisSummary};
use crate::output::{write_text, ChartRenderer, OutputError, ResultWriter};

/// Errors that can stop a run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub motif: Motif,
    pub results: Vec<AnalysisResult>,
    pub summary: AnalysisSummary,
    pub csv_path: PathBuf,
    pub chart_path: PathBuf,
}

/// Runs the analysis described by `config` and writes both outputs.
pub fn run(
    config: &RunConfig,
    writer: &dyn ResultWriter,
    chart: &dyn ChartRenderer,
) -> Result<RunReport, RunError> {
    let motif = Motif::new(&config.motif)?;
    info!("Analyzing {} for motif {}", config.input.display(), motif);

    let results = analyze_fasta_with(&config.input, &motif, config.headerless)?;
    let summary = summarize(&results);
    let chart_text = chart.render_chart(&results, motif.as_str())?;

    let csv_path = config.csv_path(&motif);
    writer.write_results(&results, &csv_path)?;

    let chart_path = config.chart_path(&motif);
    if let Err(err) = write_text(&chart_path, &chart_text) {
        if let Err(remove_err) = fs::remove_file(&csv_path) {
            warn!("Could not remove {}: {}", csv_path.display(), remove_err);
        }
        return Err(err.into());
    }
    info!("Wrote bar chart to {}", chart_path.display());

    Ok(RunReport {
        motif,
        results,
        summary,
        csv_path,
        chart_path,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::Path;

    use super::*;
    use crate::fasta::FastaError;
    use crate::output::{CsvResultWriter, OutputResult};

    /// Records what each port received.
    #[derive(Default)]
    struct Recorder {
        rows: RefCell<Vec<AnalysisResult>>,
        chart_motif: RefCell<Option<String>>,
        fail_chart: bool,
    }

    impl ResultWriter for Recorder {
        fn write_results(&self, results: &[AnalysisResult], _path: &Path) -> OutputResult<()> {
            self.rows.borrow_mut().extend_from_slice(results);
            Ok(())
        }
    }

    impl ChartRenderer for Recorder {
        fn render_chart(&self, _results: &[AnalysisResult], motif: &str) -> OutputResult<String> {
            if self.fail_chart {
                return Err(OutputError::Io {
                    path: PathBuf::from("chart"),
                    source: std::io::Error::other("no room for bars"),
                });
            }
            *self.chart_motif.borrow_mut() = Some(motif.to_string());
            Ok(format!("chart of {}\n", motif))
        }
    }

    fn fasta_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, content.as_bytes()).unwrap();
        file
    }

    const SAMPLE: &str = ">seq1\nATGATGATG\n>seq2\nGGGATGCCC\n";

    #[test]
    fn test_run_feeds_ports() {
        let input = fasta_file(SAMPLE);
        let out = tempfile::tempdir().unwrap();
        let config = RunConfig::new(input.path(), "atg").with_output_dir(out.path());
        let recorder = Recorder::default();

        let report = run(&config, &recorder, &recorder).unwrap();

        assert_eq!(report.summary.total_sequences, 2);
        assert_eq!(report.summary.total_occurrences, 4);
        assert_eq!(report.csv_path, out.path().join("motif_analysis_ATG.csv"));
        assert_eq!(*recorder.rows.borrow(), report.results);
        assert_eq!(recorder.chart_motif.borrow().as_deref(), Some("ATG"));
        assert_eq!(fs::read_to_string(&report.chart_path).unwrap(), "chart of ATG\n");
    }

    #[test]
    fn test_invalid_motif_writes_nothing() {
        let config = RunConfig::new("missing.fa", "");
        let recorder = Recorder::default();

        let err = run(&config, &recorder, &recorder).unwrap_err();

        assert!(matches!(err, RunError::Analysis(AnalysisError::InvalidMotif)));
        assert!(recorder.rows.borrow().is_empty());
        assert!(recorder.chart_motif.borrow().is_none());
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let config = RunConfig::new("missing.fa", "ATG");
        let recorder = Recorder::default();

        let err = run(&config, &recorder, &recorder).unwrap_err();

        assert!(matches!(
            err,
            RunError::Analysis(AnalysisError::Fasta(FastaError::FileAccess { .. }))
        ));
        assert!(err.to_string().contains("missing.fa"));
        assert!(recorder.chart_motif.borrow().is_none());
    }

    #[test]
    fn test_chart_rendered_before_table() {
        let input = fasta_file(SAMPLE);
        let out = tempfile::tempdir().unwrap();
        let config = RunConfig::new(input.path(), "ATG").with_output_dir(out.path());
        let recorder = Recorder {
            fail_chart: true,
            ..Recorder::default()
        };

        let err = run(&config, &recorder, &recorder).unwrap_err();

        assert!(matches!(err, RunError::Output(OutputError::Io { .. })));
        assert!(recorder.rows.borrow().is_empty());
    }

    #[test]
    fn test_failed_chart_save_removes_table() {
        let input = fasta_file(SAMPLE);
        let out = tempfile::tempdir().unwrap();
        let config = RunConfig::new(input.path(), "ATG").with_output_dir(out.path());
        let motif = Motif::new("ATG").unwrap();
        // A directory where the chart file should go
        fs::create_dir_all(config.chart_path(&motif)).unwrap();
        let recorder = Recorder::default();

        let err = run(&config, &CsvResultWriter, &recorder).unwrap_err();

        assert!(matches!(err, RunError::Output(OutputError::Io { .. })));
        assert!(!config.csv_path(&motif).exists());
    }
}
