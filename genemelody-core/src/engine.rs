use std::fs;
use std::path::Path;

use crate::composition::analyze_composition;
use crate::config::MelodyConfig;
use crate::motif::scan_motifs;
use crate::orf::{find_orfs, summarize_orfs};
use crate::results::{MelodyResults, SequenceInfo};
use crate::sequence::{read_fasta_file, Sequence};
use crate::types::MelodyError;

/// High-level analyzer running the full GeneMelody pipeline.
///
/// Cleans the input, then runs the three independent analysis passes
/// (composition, motif scan, ORF scan) and bundles them into
/// [`MelodyResults`]. The analysis itself is infallible: any text input,
/// including the empty string, produces a result. Errors arise only at the
/// file and FASTA parsing boundary.
///
/// # Examples
///
/// ## Analyze a sequence string
///
/// ```rust
/// use genemelody_core::{config::MelodyConfig, MelodyAnalyzer};
///
/// let analyzer = MelodyAnalyzer::new(MelodyConfig { quiet: true, ..Default::default() });
/// let results = analyzer.analyze_sequence("ATGAAATAG", Some("demo".to_string()));
///
/// assert_eq!(results.sequence_info.header, "demo");
/// assert_eq!(results.orfs.len(), 1);
/// ```
///
/// ## Analyze a FASTA file
///
/// ```rust,no_run
/// use genemelody_core::{config::MelodyConfig, MelodyAnalyzer};
///
/// let analyzer = MelodyAnalyzer::new(MelodyConfig::default());
/// let results = analyzer.analyze_fasta_file("input.fasta")?;
///
/// for result in &results {
///     println!("{}: {} motifs, {}", result.sequence_info.header,
///              result.motifs.len(), result.orf_summary);
/// }
/// # Ok::<(), genemelody_core::types::MelodyError>(())
/// ```
#[derive(Debug)]
pub struct MelodyAnalyzer {
    /// Configuration options for analysis and rendering
    pub config: MelodyConfig,
}

impl MelodyAnalyzer {
    /// Creates a new analyzer with the specified configuration.
    #[must_use]
    pub const fn new(config: MelodyConfig) -> Self {
        Self { config }
    }

    /// Analyzes a sequence from a text blob.
    ///
    /// FASTA-style `>` header lines are stripped before cleaning, so pasted
    /// FASTA fragments work as well as bare sequence text. The header
    /// defaults to `GeneMelody_Seq_1` when not supplied.
    #[must_use]
    pub fn analyze_sequence(&self, raw: &str, header: Option<String>) -> MelodyResults {
        let header = header.unwrap_or_else(|| "GeneMelody_Seq_1".to_string());
        let sequence = Sequence::from_fasta_text(raw);
        self.analyze_cleaned(sequence, header, None)
    }

    /// Analyzes a sequence from raw bytes, as read from a FASTA record.
    #[must_use]
    pub fn analyze_sequence_bytes(
        &self,
        sequence: &[u8],
        header: String,
        description: Option<String>,
    ) -> MelodyResults {
        let cleaned = Sequence::clean(&String::from_utf8_lossy(sequence));
        self.analyze_cleaned(cleaned, header, description)
    }

    /// Analyzes every record in a FASTA file.
    ///
    /// # Errors
    ///
    /// Returns [`MelodyError`] if the file cannot be read or the FASTA
    /// format is invalid.
    pub fn analyze_fasta_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<MelodyResults>, MelodyError> {
        let sequences = read_fasta_file(path)?;

        let mut results = Vec::new();
        for (header, description, seq_bytes) in sequences {
            results.push(self.analyze_sequence_bytes(&seq_bytes, header, description));
        }
        Ok(results)
    }

    /// Analyzes an input file, detecting FASTA versus plain text.
    ///
    /// Content starting with `>` is parsed as FASTA (one result per
    /// record); anything else is treated as a single raw sequence.
    ///
    /// # Errors
    ///
    /// Returns [`MelodyError`] if the file cannot be read or FASTA parsing
    /// fails.
    pub fn analyze_input_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<MelodyResults>, MelodyError> {
        let content = fs::read_to_string(path)?;
        self.analyze_input_text(&content)
    }

    /// Analyzes input text, detecting FASTA versus plain sequence text.
    ///
    /// # Errors
    ///
    /// Returns [`MelodyError::ParseError`] when FASTA-looking input fails to
    /// parse.
    pub fn analyze_input_text(&self, content: &str) -> Result<Vec<MelodyResults>, MelodyError> {
        if content.trim_start().starts_with('>') {
            let records = crate::sequence::read_fasta_records(content.as_bytes())?;
            Ok(records
                .into_iter()
                .map(|(header, description, seq)| {
                    self.analyze_sequence_bytes(&seq, header, description)
                })
                .collect())
        } else {
            Ok(vec![self.analyze_sequence(content, None)])
        }
    }

    /// Runs the three analysis passes over an already-cleaned sequence.
    fn analyze_cleaned(
        &self,
        sequence: Sequence,
        header: String,
        description: Option<String>,
    ) -> MelodyResults {
        let composition = analyze_composition(&sequence);
        let motifs = scan_motifs(&sequence);
        let orfs = find_orfs(&sequence);
        let orf_summary = summarize_orfs(&orfs);

        if !self.config.quiet {
            eprintln!(
                "Analyzing {} ({} bp after cleaning, {:.2}% GC)...",
                header, composition.total, composition.gc_percent
            );
        }

        MelodyResults {
            sequence_info: SequenceInfo {
                length: composition.total,
                gc_content: composition.gc_percent / 100.0,
                header,
                description,
            },
            sequence,
            composition,
            motifs,
            orfs,
            orf_summary,
        }
    }
}
