//! # GeneMelody - DNA Analysis and Sonification
//!
//! A library for analyzing DNA sequences and rendering them as music.
//! It cleans raw or FASTA-formatted input, computes base composition
//! statistics, scans for known biological motifs, finds open reading
//! frames, and can emit the sequence as a Standard MIDI File melody.
//!
//! ## Features
//!
//! - **Sequence Cleaning**: tolerant normalization of pasted text or FASTA
//! - **Composition Analysis**: base counts, GC/AT content, molecular weight
//! - **Motif Scanning**: overlapping matches against a curated motif table
//! - **ORF Finding**: three forward reading frames, ATG to first in-frame stop
//! - **Multiple Output Formats**: plain-text report, TSV, and MIDI
//!
//! ## Quick Start
//!
//! ```rust
//! use genemelody_core::{MelodyAnalyzer, config::MelodyConfig};
//!
//! let analyzer = MelodyAnalyzer::new(MelodyConfig { quiet: true, ..Default::default() });
//!
//! let results = analyzer.analyze_sequence(
//!     "ATGAAATAGGAATTC",
//!     Some("MySequence".to_string()),
//! );
//!
//! println!("Found {} motifs and {} ORFs", results.motifs.len(), results.orfs.len());
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options for analysis and rendering
//! - [`engine`]: Main analysis pipeline
//! - [`sequence`]: Sequence cleaning and FASTA I/O
//! - [`composition`]: Base composition statistics
//! - [`motif`]: Motif scanning
//! - [`orf`]: Open reading frame detection
//! - [`results`]: Bundled analysis results
//! - [`output`]: Output formatting for report, TSV, and MIDI
//! - [`constants`]: Shared tables and tuning constants
//! - [`types`]: Core data types and the error enum
//!
//! ## Output Formats
//!
//! The library supports multiple output formats configured via
//! [`config::OutputFormat`]:
//!
//! - **Report**: human-readable analysis summary
//! - **TSV**: tab-separated motif and ORF coordinates
//! - **MIDI**: one note per base, pitch mapped A=60, T=62, C=64, G=67
//!
//! ## Error Handling
//!
//! Analysis itself is infallible: any input, including the empty string,
//! yields a (possibly degenerate) result. Fallible operations at the I/O
//! and rendering boundary return [`Result<T, MelodyError>`](types::MelodyError):
//!
//! - File and FASTA parsing errors
//! - Invalid instrument program numbers for MIDI output
//! - Invalid tempo values

pub mod composition;
pub mod config;
pub mod constants;
pub mod engine;
pub mod motif;
pub mod orf;
pub mod output;
pub mod results;
pub mod sequence;
pub mod types;

pub use engine::MelodyAnalyzer;
