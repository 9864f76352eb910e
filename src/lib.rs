//! # motifscan - FASTA motif counter
//!
//! Counts the non-overlapping, case-insensitive occurrences of a short
//! nucleotide motif in every sequence of a FASTA file, then writes a CSV
//! table and a bar chart of the counts.
//!
//! ## Architecture
//!
//! - `fasta`: FASTA parsing into ordered records
//! - `analysis`: motif validation, counting and frequencies
//! - `model`: records, results and viewer state
//! - `output`: tabular and chart output ports with CSV and text adapters
//! - `config` / `pipeline`: one end-to-end run
//! - `event`, `ui`, `controller`: interactive terminal chart viewer

pub mod analysis;
pub mod config;
pub mod controller;
pub mod event;
pub mod fasta;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod ui;
