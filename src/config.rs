//! Run configuration and output locations.

use std::path::{Path, PathBuf};

use crate::analysis::Motif;
use crate::fasta::HeaderlessPolicy;

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// Everything one analysis run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    /// Motif as typed by the user; validated when the run starts
    pub motif: String,
    pub output_dir: PathBuf,
    pub headerless: HeaderlessPolicy,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>, motif: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            motif: motif.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            headerless: HeaderlessPolicy::default(),
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_headerless(mut self, policy: HeaderlessPolicy) -> Self {
        self.headerless = policy;
        self
    }

    /// `<output_dir>/motif_analysis_<MOTIF>.csv`
    pub fn csv_path(&self, motif: &Motif) -> PathBuf {
        output_file(&self.output_dir, "motif_analysis", motif, "csv")
    }

    /// `<output_dir>/motif_histogram_<MOTIF>.txt`
    pub fn chart_path(&self, motif: &Motif) -> PathBuf {
        output_file(&self.output_dir, "motif_histogram", motif, "txt")
    }
}

fn output_file(dir: &Path, stem: &str, motif: &Motif, extension: &str) -> PathBuf {
    dir.join(format!("{}_{}.{}", stem, motif, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("in.fa", "atg");
        assert_eq!(config.output_dir, PathBuf::from("results"));
        assert_eq!(config.headerless, HeaderlessPolicy::Ignore);
    }

    #[test]
    fn test_output_paths() {
        let config = RunConfig::new("in.fa", "atg").with_output_dir("out/run1");
        let motif = Motif::new(&config.motif).unwrap();

        assert_eq!(config.csv_path(&motif), PathBuf::from("out/run1/motif_analysis_ATG.csv"));
        assert_eq!(config.chart_path(&motif), PathBuf::from("out/run1/motif_histogram_ATG.txt"));
    }
}
