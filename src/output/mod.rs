//! Output collaborators for analysis results.
//!
//! Two ports, each a single-method trait, so the counting core never
//! depends on a concrete format:
//! - [`ResultWriter`]: tabular export (CSV adapter in [`csv`])
//! - [`ChartRenderer`]: bar chart of counts per sequence (text adapter in [`chart`]),
//!   saved with [`write_text`]

pub mod chart;
pub mod csv;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::AnalysisResult;

pub use self::chart::TextBarChart;
pub use self::csv::CsvResultWriter;

/// Errors that can occur while writing outputs.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Writes a result table to `path`.
pub trait ResultWriter {
    fn write_results(&self, results: &[AnalysisResult], path: &Path) -> OutputResult<()>;
}

/// Renders a bar chart of motif counts, ready to be saved with [`write_text`].
pub trait ChartRenderer {
    fn render_chart(&self, results: &[AnalysisResult], motif: &str) -> OutputResult<String>;
}

/// Writes `text` to `path`, creating parent directories.
pub fn write_text(path: &Path, text: &str) -> OutputResult<()> {
    ensure_parent_dir(path)?;
    fs::write(path, text).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates the parent directory of `path` if needed.
pub(crate) fn ensure_parent_dir(path: &Path) -> OutputResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| OutputError::Io {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_text_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/chart.txt");

        write_text(&path, "bars\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "bars\n");
    }

    #[test]
    fn test_write_text_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten with a file
        let err = write_text(dir.path(), "bars").unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }
}
