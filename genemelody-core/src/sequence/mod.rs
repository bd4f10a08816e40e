//! Sequence cleaning and input handling.
//!
//! Raw input text is reduced to the four-letter DNA alphabet before any
//! analysis runs. Cleaning never fails: input with no valid bases simply
//! produces the empty sequence, which every downstream routine treats as a
//! valid degenerate case.
//!
//! ## Examples
//!
//! ```rust
//! use genemelody_core::sequence::Sequence;
//!
//! let sequence = Sequence::clean("atg  aaa-tag\n123");
//! assert_eq!(sequence.as_str(), "ATGAAATAG");
//! ```

use std::fmt;

pub mod io;

pub use io::{read_fasta_file, read_fasta_records, FastaRecord};

/// A cleaned DNA sequence over the alphabet {A, T, C, G}.
///
/// Immutable once built. Construction uppercases the input and silently
/// drops every character outside the alphabet, so a `Sequence` is always
/// safe to index bytewise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence(String);

impl Sequence {
    /// Cleans arbitrary text down to the four-letter alphabet.
    ///
    /// Case-folds to uppercase and keeps only A, T, C, and G, preserving the
    /// relative order of retained characters. Whitespace, digits, ambiguity
    /// codes, and anything else are dropped without error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genemelody_core::sequence::Sequence;
    ///
    /// assert_eq!(Sequence::clean("acgt").as_str(), "ACGT");
    /// assert_eq!(Sequence::clean("A C-G\t1T").as_str(), "ACGT");
    /// assert!(Sequence::clean("xyz 123").is_empty());
    /// ```
    #[must_use]
    pub fn clean(raw: &str) -> Self {
        let cleaned = raw
            .chars()
            .filter_map(|c| {
                let upper = c.to_ascii_uppercase();
                matches!(upper, 'A' | 'T' | 'C' | 'G').then_some(upper)
            })
            .collect();
        Self(cleaned)
    }

    /// Cleans FASTA-formatted text: header lines are excluded entirely
    /// before character filtering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use genemelody_core::sequence::Sequence;
    ///
    /// let fasta = ">seq1 a GC-rich fragment\nGGCC\nttaa\n";
    /// assert_eq!(Sequence::from_fasta_text(fasta).as_str(), "GGCCTTAA");
    /// ```
    #[must_use]
    pub fn from_fasta_text(raw: &str) -> Self {
        Self::clean(&strip_fasta_headers(raw))
    }

    /// The cleaned sequence as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The cleaned sequence as raw bytes (always ASCII A/T/C/G).
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Sequence length in bases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no valid bases survived cleaning.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterator over the bases of the sequence.
    pub fn bases(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Removes FASTA header lines (lines beginning with `>`) from raw text.
///
/// Header stripping happens upstream of character filtering so that header
/// text cannot contribute bases to the cleaned sequence.
#[must_use]
pub fn strip_fasta_headers(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.starts_with('>'))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_uppercases_and_filters() {
        let sequence = Sequence::clean("atcg ATCG nN- 42");
        assert_eq!(sequence.as_str(), "ATCGATCG");
    }

    #[test]
    fn test_clean_preserves_order() {
        let sequence = Sequence::clean("a1t2c3g4");
        assert_eq!(sequence.as_str(), "ATCG");
    }

    #[test]
    fn test_clean_empty_and_fully_invalid() {
        assert!(Sequence::clean("").is_empty());
        assert!(Sequence::clean("xyz \n\t 987 !?").is_empty());
        assert_eq!(Sequence::clean("").len(), 0);
    }

    #[test]
    fn test_clean_is_idempotent() {
        let once = Sequence::clean("aTg cCc GgG ttt");
        let twice = Sequence::clean(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_clean_output_alphabet() {
        let sequence = Sequence::clean("The quick brown fox jumps over the lazy dog");
        assert!(sequence.bases().all(|c| matches!(c, 'A' | 'T' | 'C' | 'G')));
    }

    #[test]
    fn test_strip_fasta_headers() {
        let raw = ">seq1 description with acgt in it\nATCG\n>seq2\nGGCC";
        let stripped = strip_fasta_headers(raw);
        assert_eq!(stripped, "ATCG\nGGCC");
    }

    #[test]
    fn test_from_fasta_text_excludes_header_bases() {
        // The header contains valid bases that must not leak into the sequence
        let fasta = ">GATTACA promoter\nTTTT\n";
        assert_eq!(Sequence::from_fasta_text(fasta).as_str(), "TTTT");
    }

    #[test]
    fn test_display_and_as_ref() {
        let sequence = Sequence::clean("atg");
        assert_eq!(format!("{sequence}"), "ATG");
        assert_eq!(sequence.as_ref(), "ATG");
        assert_eq!(sequence.as_bytes(), b"ATG");
    }
}
