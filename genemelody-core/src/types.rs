use std::fmt;

use thiserror::Error;

/// A single motif occurrence in a cleaned sequence.
///
/// Positions are 1-based. Overlapping occurrences of the same motif are
/// reported individually, so several hits may share a motif string.
///
/// # Examples
///
/// ```rust
/// use genemelody_core::types::MotifHit;
///
/// let hit = MotifHit {
///     motif: "GAATTC",
///     start: 7,
///     meaning: "EcoRI restriction site (GAATTC).",
/// };
/// assert_eq!(hit.start, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotifHit {
    /// The motif string as it appears in the motif table
    pub motif: &'static str,
    /// 1-based start position of the match
    pub start: usize,
    /// Fixed descriptive meaning from the motif table
    pub meaning: &'static str,
}

impl fmt::Display for MotifHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}: {}", self.motif, self.start, self.meaning)
    }
}

/// An open reading frame found in one of the three forward frames.
///
/// `start` points at the A of the ATG start codon and `end` at the last base
/// of the stop codon, both 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenReadingFrame {
    /// Reading frame offset (0, 1, or 2)
    pub frame: usize,
    /// 1-based start position of the ATG codon
    pub start: usize,
    /// 1-based end position, inclusive of the full stop codon
    pub end: usize,
    /// Length in nucleotides, stop codon included
    pub length_nt: usize,
    /// Length in amino acids (`length_nt / 3`)
    pub length_aa: usize,
}

impl fmt::Display for OpenReadingFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame {} start {} end {} ({} nt / {} aa)",
            self.frame, self.start, self.end, self.length_nt, self.length_aa
        )
    }
}

/// Aggregate view over the ORFs found in a sequence.
///
/// `longest` is the entry with maximum nucleotide length; when several ORFs
/// tie, the one encountered first in frame-then-position order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrfSummary {
    /// Total number of ORFs found across all three frames
    pub total: usize,
    /// Longest ORF by nucleotide length, `None` when no ORFs were found
    pub longest: Option<OpenReadingFrame>,
}

impl fmt::Display for OrfSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.longest {
            Some(longest) => {
                writeln!(f, "Total ORFs: {}", self.total)?;
                write!(f, "Longest ORF: {longest}")
            }
            None => write!(f, "No ORFs found."),
        }
    }
}

/// Error types for the I/O and configuration boundary.
///
/// The analysis routines themselves never fail: an empty or fully invalid
/// input sequence is a valid degenerate case, not an error.
#[derive(Error, Debug)]
pub enum MelodyError {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing FASTA input
    #[error("Parse error: {0}")]
    ParseError(String),
    /// MIDI program number outside the fixed instrument table
    #[error("Invalid instrument program: {0} (valid: 0, 40, 41, 56, 60, 73, 81, 89)")]
    InvalidInstrument(u8),
    /// Tempo that cannot be rendered as a MIDI tempo event
    #[error("Invalid tempo: {0} BPM")]
    InvalidTempo(u32),
    /// Output request that the selected format cannot satisfy
    #[error("Invalid output request: {0}")]
    InvalidOutput(String),
}
