//! Open-reading-frame detection across the three forward frames.
//!
//! Within each frame the outer scan advances codon by codon. Every in-frame
//! ATG is tried as a candidate start, including ATGs inside an already
//! reported ORF, so nested and overlapping ORFs are all emitted. Reverse
//! strand frames are not scanned.

use crate::constants::{CODON_LENGTH, READING_FRAMES, START_CODON};
use crate::sequence::Sequence;
use crate::types::{OpenReadingFrame, OrfSummary};

/// Test whether a codon is one of the three stop codons.
#[must_use]
pub fn is_stop_codon(codon: &[u8]) -> bool {
    matches!(codon, b"TAA" | b"TAG" | b"TGA")
}

/// Finds every ORF in the three forward reading frames.
///
/// An ORF runs from an ATG codon to the first in-frame stop codon, stop
/// included. Results come out in frame-then-position order. An ATG with no
/// in-frame stop before the sequence end emits nothing.
///
/// # Examples
///
/// ```rust
/// use genemelody_core::orf::find_orfs;
/// use genemelody_core::sequence::Sequence;
///
/// let orfs = find_orfs(&Sequence::clean("ATGAAATAG"));
/// assert_eq!(orfs.len(), 1);
/// assert_eq!(orfs[0].start, 1);
/// assert_eq!(orfs[0].end, 9);
/// assert_eq!(orfs[0].length_aa, 3);
/// ```
#[must_use]
pub fn find_orfs(sequence: &Sequence) -> Vec<OpenReadingFrame> {
    let seq = sequence.as_bytes();
    let n = seq.len();
    let mut orfs = Vec::new();

    for frame in 0..READING_FRAMES {
        let mut i = frame;
        while i + CODON_LENGTH <= n {
            if &seq[i..i + CODON_LENGTH] == START_CODON.as_bytes() {
                let mut j = i + CODON_LENGTH;
                while j + CODON_LENGTH <= n {
                    if is_stop_codon(&seq[j..j + CODON_LENGTH]) {
                        let length_nt = j + CODON_LENGTH - i;
                        orfs.push(OpenReadingFrame {
                            frame,
                            start: i + 1,
                            end: j + CODON_LENGTH,
                            length_nt,
                            length_aa: length_nt / CODON_LENGTH,
                        });
                        break;
                    }
                    j += CODON_LENGTH;
                }
            }
            // Advance codon by codon, not past the ORF just found: every
            // in-frame ATG is an independent candidate start.
            i += CODON_LENGTH;
        }
    }

    orfs
}

/// Derives the summary over a set of ORFs.
///
/// The longest ORF is selected by nucleotide length; ties go to the entry
/// encountered first in the `find_orfs` iteration order.
#[must_use]
pub fn summarize_orfs(orfs: &[OpenReadingFrame]) -> OrfSummary {
    let longest = orfs
        .iter()
        .copied()
        .reduce(|best, candidate| {
            if candidate.length_nt > best.length_nt {
                candidate
            } else {
                best
            }
        });

    OrfSummary {
        total: orfs.len(),
        longest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orfs_for(raw: &str) -> Vec<OpenReadingFrame> {
        find_orfs(&Sequence::clean(raw))
    }

    #[test]
    fn test_simple_orf_frame_zero() {
        let orfs = orfs_for("ATGAAATAG");
        assert_eq!(orfs.len(), 1);
        assert_eq!(
            orfs[0],
            OpenReadingFrame {
                frame: 0,
                start: 1,
                end: 9,
                length_nt: 9,
                length_aa: 3,
            }
        );
    }

    #[test]
    fn test_orf_in_offset_frame() {
        // Leading C shifts ATG...TAA into frame 1
        let orfs = orfs_for("CATGAAATAA");
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].frame, 1);
        assert_eq!(orfs[0].start, 2);
        assert_eq!(orfs[0].end, 10);
    }

    #[test]
    fn test_start_without_stop_emits_nothing() {
        assert!(orfs_for("ATGAAAAAA").is_empty());
        assert!(orfs_for("ATG").is_empty());
    }

    #[test]
    fn test_stop_out_of_frame_is_ignored() {
        // TAG present but not in frame with the ATG
        assert!(orfs_for("ATGAATAGA").is_empty());
    }

    #[test]
    fn test_nested_starts_each_reported() {
        // ATG ATG AAA TAG: both ATGs reach the same stop
        let orfs = orfs_for("ATGATGAAATAG");
        assert_eq!(orfs.len(), 2);
        assert_eq!(orfs[0].start, 1);
        assert_eq!(orfs[0].length_nt, 12);
        assert_eq!(orfs[1].start, 4);
        assert_eq!(orfs[1].length_nt, 9);
    }

    #[test]
    fn test_all_three_stop_codons() {
        for stop in ["TAA", "TAG", "TGA"] {
            let orfs = orfs_for(&format!("ATGCCC{stop}"));
            assert_eq!(orfs.len(), 1, "stop codon {stop} not recognized");
            assert_eq!(orfs[0].length_nt, 9);
        }
    }

    #[test]
    fn test_empty_sequence_yields_no_orfs() {
        assert!(orfs_for("").is_empty());
    }

    #[test]
    fn test_frames_scanned_in_order() {
        // One ORF in frame 0 and one in frame 2, frame 0 listed first
        let orfs = orfs_for("ATGAAATAGCCATGCCCTAGCC");
        assert!(orfs.len() >= 2);
        assert!(orfs.windows(2).all(|w| w[0].frame <= w[1].frame));
    }

    #[test]
    fn test_summary_empty() {
        let summary = summarize_orfs(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.longest.is_none());
    }

    #[test]
    fn test_summary_longest() {
        let orfs = orfs_for("ATGATGAAATAG");
        let summary = summarize_orfs(&orfs);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.longest.unwrap().length_nt, 12);
        assert_eq!(summary.longest.unwrap().start, 1);
    }

    #[test]
    fn test_summary_tie_goes_to_first_encountered() {
        // Two 9 nt ORFs in frame 0; the lower start position wins
        let orfs = orfs_for("ATGAAATAGATGCCCTGA");
        let summary = summarize_orfs(&orfs);
        assert_eq!(summary.total, 2);
        assert_eq!(orfs[0].length_nt, orfs[1].length_nt);
        assert_eq!(summary.longest.unwrap().start, 1);
    }

    #[test]
    fn test_tie_across_frames_prefers_lower_frame() {
        let first = OpenReadingFrame {
            frame: 0,
            start: 4,
            end: 12,
            length_nt: 9,
            length_aa: 3,
        };
        let second = OpenReadingFrame {
            frame: 2,
            start: 3,
            end: 11,
            length_nt: 9,
            length_aa: 3,
        };
        let summary = summarize_orfs(&[first, second]);
        assert_eq!(summary.longest.unwrap(), first);
    }
}
