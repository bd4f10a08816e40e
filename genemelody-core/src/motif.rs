//! Motif scanning against the fixed signature table.
//!
//! Every motif in [`MOTIF_MEANINGS`] is searched for in the cleaned
//! sequence. The search for a motif resumes one position after each match
//! rather than past it, so overlapping self-matches are all reported.

use crate::constants::MOTIF_MEANINGS;
use crate::sequence::Sequence;
use crate::types::MotifHit;

/// Scans a cleaned sequence for every motif in the fixed table.
///
/// Hits are returned sorted ascending by 1-based start position. The sort is
/// stable, so when two motifs of different lengths start at the same index
/// the one earlier in the table comes first.
///
/// # Examples
///
/// ```rust
/// use genemelody_core::motif::scan_motifs;
/// use genemelody_core::sequence::Sequence;
///
/// let hits = scan_motifs(&Sequence::clean("GAATTCGAATTC"));
/// let positions: Vec<usize> = hits.iter().map(|h| h.start).collect();
/// assert_eq!(positions, vec![1, 7]);
/// ```
#[must_use]
pub fn scan_motifs(sequence: &Sequence) -> Vec<MotifHit> {
    scan_motifs_in_table(sequence, &MOTIF_MEANINGS)
}

/// Scans against an explicit motif table, in table order.
///
/// Split out from [`scan_motifs`] so the overlap semantics can be exercised
/// with small synthetic tables.
#[must_use]
pub fn scan_motifs_in_table(
    sequence: &Sequence,
    table: &[(&'static str, &'static str)],
) -> Vec<MotifHit> {
    let seq = sequence.as_str();
    let mut hits = Vec::new();

    for &(motif, meaning) in table {
        let mut from = 0;
        while let Some(offset) = seq[from..].find(motif) {
            let index = from + offset;
            hits.push(MotifHit {
                motif,
                start: index + 1,
                meaning,
            });
            // Resume one past the match start, not past the whole match, so
            // overlapping occurrences are captured.
            from = index + 1;
        }
    }

    hits.sort_by_key(|hit| hit.start);
    hits
}
