//! motifscan - count a nucleotide motif in FASTA sequences.
//!
//! ## Usage
//!
//! ```bash
//! motifscan <fasta_file> <motif> [output_dir]
//! motifscan sequences.fasta ATG results --view
//! ```
//!
//! Writes `motif_analysis_<MOTIF>.csv` and `motif_histogram_<MOTIF>.txt`
//! into the output directory (default: `results`).

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use motifscan::config::{RunConfig, DEFAULT_OUTPUT_DIR};
use motifscan::controller::run_viewer;
use motifscan::fasta::HeaderlessPolicy;
use motifscan::output::{CsvResultWriter, TextBarChart};
use motifscan::pipeline::{run, RunReport};

/// Handling of input without any `>` header line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeaderlessArg {
    /// Report no sequences
    Ignore,
    /// Read the whole file as one unnamed sequence
    Anonymous,
}

impl From<HeaderlessArg> for HeaderlessPolicy {
    fn from(arg: HeaderlessArg) -> Self {
        match arg {
            HeaderlessArg::Ignore => HeaderlessPolicy::Ignore,
            HeaderlessArg::Anonymous => HeaderlessPolicy::Anonymous,
        }
    }
}

/// motifscan - count motif occurrences in FASTA sequences
///
/// Counts non-overlapping, case-insensitive occurrences of MOTIF in every
/// sequence of FASTA_FILE and writes a CSV table and a text bar chart.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// FASTA file to analyze
    #[arg(value_name = "FASTA_FILE")]
    file: PathBuf,

    /// Motif to count (e.g. ATG)
    motif: String,

    /// Directory for the CSV table and chart
    #[arg(value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// What to do when the file has no header line
    #[arg(long = "headerless", value_enum, default_value = "ignore")]
    headerless: HeaderlessArg,

    /// Open an interactive bar chart after writing the outputs
    #[arg(long = "view")]
    view: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

/// Prints the run summary to stdout.
fn print_report(config: &RunConfig, report: &RunReport) {
    println!("Analyzing {} for motif: {}", config.input.display(), report.motif);
    println!("\nAnalysis Summary:");
    println!("Total sequences: {}", report.summary.total_sequences);
    println!("Total motif occurrences: {}", report.summary.total_occurrences);
    println!("\nSequence Details:");
    for result in &report.results {
        println!(
            "  {}: {} occurrences (length: {} bp)",
            result.sequence_id, result.count, result.sequence_length
        );
    }
    println!("Results saved to {}", report.csv_path.display());
    println!("Histogram saved to {}", report.chart_path.display());
    println!("\nAnalysis complete!");
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let config = RunConfig::new(&args.file, &args.motif)
        .with_output_dir(&args.output_dir)
        .with_headerless(args.headerless.into());

    let report = run(&config, &CsvResultWriter, &TextBarChart::default())
        .with_context(|| format!("Motif analysis of {} failed", config.input.display()))?;

    print_report(&config, &report);

    if args.view {
        run_viewer(report.results, report.motif.as_str())?;
    }

    Ok(())
}
