use crate::constants::{DEFAULT_BPM, DEFAULT_PROGRAM};

/// Output format options for analysis results.
///
/// # Formats
///
/// - **Report**: human-readable plain-text analysis summary
/// - **Tsv**: tab-separated motif and ORF coordinates
/// - **Midi**: Standard MIDI File rendering of the sequence melody
///
/// # Examples
///
/// ```rust
/// use genemelody_core::config::{MelodyConfig, OutputFormat};
///
/// let config = MelodyConfig {
///     output_format: OutputFormat::Midi,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain-text analysis report with composition, motifs, and ORF summary.
    Report,

    /// Tab-separated coordinates of motif hits and ORFs.
    ///
    /// Lightweight and easy to parse for downstream tooling.
    Tsv,

    /// Binary Standard MIDI File, one note per base.
    Midi,
}

/// Configuration settings for GeneMelody analysis and rendering.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use genemelody_core::config::MelodyConfig;
///
/// let config = MelodyConfig::default();
/// assert_eq!(config.bpm, 120);
/// assert_eq!(config.instrument, 81);
/// ```
///
/// ## Custom tempo and instrument
///
/// ```rust
/// use genemelody_core::config::{MelodyConfig, OutputFormat};
///
/// let config = MelodyConfig {
///     output_format: OutputFormat::Midi,
///     bpm: 90,
///     instrument: 40, // Violin
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct MelodyConfig {
    /// Suppress informational output during processing.
    ///
    /// When `true`, prevents progress messages from being printed to stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Output format for analysis results.
    ///
    /// **Default**: [`OutputFormat::Report`]
    pub output_format: OutputFormat,

    /// Tempo in beats per minute for MIDI rendering.
    ///
    /// Must be at least 1. Converted to a MIDI `set_tempo` event as
    /// `60_000_000 / bpm` microseconds per beat.
    ///
    /// **Default**: `120`
    pub bpm: u32,

    /// General MIDI program number for MIDI rendering.
    ///
    /// Validated against the fixed instrument table at write time.
    ///
    /// **Default**: `81` (Lead Synth)
    pub instrument: u8,
}

impl Default for MelodyConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            output_format: OutputFormat::Report,
            bpm: DEFAULT_BPM,
            instrument: DEFAULT_PROGRAM,
        }
    }
}
