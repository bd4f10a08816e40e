use crate::composition::CompositionStats;
use crate::sequence::Sequence;
use crate::types::{MotifHit, OpenReadingFrame, OrfSummary};

/// Complete analysis results for one input sequence.
///
/// Contains the cleaned sequence itself (the melody source), descriptive
/// statistics, motif hits, and ORF data. Everything is computed fresh per
/// input; nothing is shared across invocations.
///
/// # Examples
///
/// ```rust
/// use genemelody_core::{config::MelodyConfig, MelodyAnalyzer};
///
/// let analyzer = MelodyAnalyzer::new(MelodyConfig { quiet: true, ..Default::default() });
/// let results = analyzer.analyze_sequence("ATGAAATAGGAATTC", None);
///
/// println!("Sequence: {}", results.sequence_info.header);
/// println!("Length: {} bp", results.sequence_info.length);
/// println!("Motifs: {}", results.motifs.len());
/// println!("{}", results.orf_summary);
/// ```
#[derive(Debug, Clone)]
pub struct MelodyResults {
    /// The cleaned sequence the analysis ran over.
    pub sequence: Sequence,

    /// Metadata about the analyzed sequence.
    pub sequence_info: SequenceInfo,

    /// Base composition and physical-property statistics.
    pub composition: CompositionStats,

    /// Motif hits sorted by position.
    pub motifs: Vec<MotifHit>,

    /// ORFs in frame-then-position order.
    pub orfs: Vec<OpenReadingFrame>,

    /// Count and longest-ORF summary derived from `orfs`.
    pub orf_summary: OrfSummary,
}

/// Information about a processed sequence.
#[derive(Debug, Clone)]
pub struct SequenceInfo {
    /// Length of the cleaned sequence in bases.
    pub length: usize,

    /// GC content as a fraction (0.0 to 1.0).
    ///
    /// Multiply by 100 to get percentage.
    pub gc_content: f64,

    /// Sequence identifier, from the FASTA header when available.
    pub header: String,

    /// Full sequence description from the FASTA header.
    pub description: Option<String>,
}
