//! Output formatting for analysis results.
//!
//! Writers for converting [`MelodyResults`] into the supported output
//! formats.
//!
//! ## Supported Formats
//!
//! - **Report**: plain-text analysis summary
//! - **TSV**: tab-separated motif and ORF coordinates
//! - **MIDI**: Standard MIDI File melody rendering
//!
//! ## Examples
//!
//! ### Write a report to stdout
//!
//! ```rust
//! use genemelody_core::{config::MelodyConfig, MelodyAnalyzer};
//! use genemelody_core::output::write_results;
//! use std::io::stdout;
//!
//! let config = MelodyConfig { quiet: true, ..Default::default() };
//! let analyzer = MelodyAnalyzer::new(config.clone());
//! let results = analyzer.analyze_sequence("ATGAAATAG", None);
//!
//! write_results(&mut stdout(), &results, &config)?;
//! # Ok::<(), genemelody_core::types::MelodyError>(())
//! ```

use std::io::Write;

use crate::{config::MelodyConfig, config::OutputFormat, results::MelodyResults, types::MelodyError};

mod formats {
    pub mod midi;
    pub mod report;
    pub mod tsv;
}

use formats::{midi::write_midi_format, report::write_report_format, tsv::write_tsv_format};

/// Writes analysis results in the format selected by the configuration.
///
/// This is the main entry point for output formatting. It delegates to
/// format-specific writers; the MIDI writer additionally consumes the
/// configured tempo and instrument.
///
/// # Errors
///
/// Returns [`MelodyError`] if writing fails or, for MIDI output, if the
/// configured instrument program or tempo is invalid.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &MelodyResults,
    config: &MelodyConfig,
) -> Result<(), MelodyError> {
    match config.output_format {
        OutputFormat::Report => write_report_format(writer, results),
        OutputFormat::Tsv => write_tsv_format(writer, results),
        OutputFormat::Midi => write_midi_format(writer, results, config.bpm, config.instrument),
    }
}
