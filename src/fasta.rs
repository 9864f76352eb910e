//! FASTA file parser.
//!
//! This module handles reading and parsing FASTA format files.
//! It supports both single-line and multi-line sequences.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! TGCATGCATGCA...
//! ```
//!
//! The whole header line (minus the `>`) is kept as the identifier.
//! Blank lines are skipped and never end a record.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::model::SequenceRecord;

/// Errors that can occur during FASTA parsing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to read file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// What to do with input that contains no header line at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderlessPolicy {
    /// Produce no records.
    #[default]
    Ignore,
    /// Treat every non-blank line as one record without identifier.
    Anonymous,
}

impl fmt::Display for HeaderlessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderlessPolicy::Ignore => write!(f, "ignore"),
            HeaderlessPolicy::Anonymous => write!(f, "anonymous"),
        }
    }
}

/// Parses a FASTA file and returns its records in file order.
///
/// The file is read into memory in a single call before parsing.
///
/// # Examples
///
/// ```no_run
/// use motifscan::fasta::{parse_fasta_file, HeaderlessPolicy};
///
/// let records = parse_fasta_file("sequences.fasta", HeaderlessPolicy::Ignore).unwrap();
/// println!("Loaded {} sequences", records.len());
/// ```
pub fn parse_fasta_file<P: AsRef<Path>>(
    path: P,
    policy: HeaderlessPolicy,
) -> FastaResult<Vec<SequenceRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| FastaError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(parse_fasta_str(&content, policy))
}

/// Parses FASTA content from a string.
///
/// Lines before the first header are dropped when the input has headers.
/// When it has none, `policy` decides between no records and a single
/// anonymous record.
pub fn parse_fasta_str(content: &str, policy: HeaderlessPolicy) -> Vec<SequenceRecord> {
    let mut records = Vec::new();
    let mut current_id: Option<String> = None;
    let mut current_seq = String::new();
    let mut orphan_lines = 0usize;

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            match current_id.take() {
                Some(id) => records.push(SequenceRecord::new(id, std::mem::take(&mut current_seq))),
                None if orphan_lines > 0 => {
                    warn!(
                        "Discarding {} sequence line(s) found before the first header",
                        orphan_lines
                    );
                    current_seq.clear();
                }
                None => {}
            }
            current_id = Some(header.trim().to_string());
        } else {
            if current_id.is_none() {
                orphan_lines += 1;
            }
            current_seq.push_str(line);
        }
    }

    match current_id {
        Some(id) => records.push(SequenceRecord::new(id, current_seq)),
        None if orphan_lines > 0 => match policy {
            HeaderlessPolicy::Anonymous => {
                warn!("No FASTA header found, reading input as one unnamed sequence");
                records.push(SequenceRecord::anonymous(current_seq));
            }
            HeaderlessPolicy::Ignore => {
                warn!(
                    "No FASTA header found, ignoring {} sequence line(s)",
                    orphan_lines
                );
            }
        },
        None => {}
    }

    debug!("Parsed {} FASTA record(s)", records.len());
    records
}
