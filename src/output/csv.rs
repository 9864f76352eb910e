//! CSV export of analysis results.

use std::fs::File;
use std::path::Path;

use ::csv::WriterBuilder;
use log::info;

use super::{ensure_parent_dir, OutputError, OutputResult, ResultWriter};
use crate::model::AnalysisResult;

/// Column names, in the field order of [`AnalysisResult`].
pub const CSV_HEADER: [&str; 5] = ["sequence_id", "sequence_length", "motif", "count", "frequency"];

/// Writes one row per result under a fixed header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvResultWriter;

impl ResultWriter for CsvResultWriter {
    fn write_results(&self, results: &[AnalysisResult], path: &Path) -> OutputResult<()> {
        ensure_parent_dir(path)?;
        let io_err = |source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        // Header is written by hand so an empty result set still gets one
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(CSV_HEADER)?;
        for result in results {
            writer.serialize(result)?;
        }
        writer.flush().map_err(io_err)?;

        info!("Wrote {} row(s) to {}", results.len(), path.display());
        Ok(())
    }
}
