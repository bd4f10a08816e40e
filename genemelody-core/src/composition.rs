//! Base composition statistics.
//!
//! Pure functions over a cleaned [`Sequence`]: per-base counts, GC/AT
//! percentages, the AT:GC ratio, and a molecular-weight estimate. The empty
//! sequence is a valid degenerate input that yields zero counts, zero
//! percentages, and an infinite ratio.

use crate::constants::AVG_NUCLEOTIDE_MASS_DA;
use crate::sequence::Sequence;

/// Occurrence counts for each of the four bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseCounts {
    /// Number of A bases
    pub a: usize,
    /// Number of T bases
    pub t: usize,
    /// Number of C bases
    pub c: usize,
    /// Number of G bases
    pub g: usize,
}

impl BaseCounts {
    /// Sum of all four counts, always equal to the sequence length.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.a + self.t + self.c + self.g
    }

    /// Combined G and C count.
    #[must_use]
    pub const fn gc(&self) -> usize {
        self.g + self.c
    }

    /// Combined A and T count.
    #[must_use]
    pub const fn at(&self) -> usize {
        self.a + self.t
    }
}

/// Descriptive statistics derived from a cleaned sequence.
///
/// # Examples
///
/// ```rust
/// use genemelody_core::composition::analyze_composition;
/// use genemelody_core::sequence::Sequence;
///
/// let stats = analyze_composition(&Sequence::clean("GGCCAATT"));
/// assert_eq!(stats.total, 8);
/// assert!((stats.gc_percent - 50.0).abs() < 1e-9);
/// assert!((stats.at_gc_ratio - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionStats {
    /// Per-base occurrence counts
    pub counts: BaseCounts,
    /// Sequence length in bases
    pub total: usize,
    /// GC content as a percentage of sequence length
    pub gc_percent: f64,
    /// AT content as a percentage of sequence length
    pub at_percent: f64,
    /// AT:GC ratio, `f64::INFINITY` when the GC count is zero
    pub at_gc_ratio: f64,
    /// Estimated molecular weight in Daltons (length x 330.0)
    pub mw_da: f64,
    /// Estimated molecular weight in kilodaltons
    pub mw_kda: f64,
}

/// Computes composition statistics for a cleaned sequence.
///
/// The divisor is clamped to 1 for the empty sequence so the percentages
/// come out as 0 rather than NaN; callers must treat a zero-length input as
/// degenerate. The ratio uses an infinity sentinel when no G or C is
/// present. Both conventions are preserved from the original tool on
/// purpose.
#[must_use]
pub fn analyze_composition(sequence: &Sequence) -> CompositionStats {
    let mut counts = BaseCounts::default();
    for base in sequence.bases() {
        match base {
            'A' => counts.a += 1,
            'T' => counts.t += 1,
            'C' => counts.c += 1,
            'G' => counts.g += 1,
            _ => unreachable!("cleaned sequences contain only A/T/C/G"),
        }
    }

    let total = sequence.len();
    let divisor = total.max(1) as f64;
    let gc = counts.gc() as f64;
    let at = counts.at() as f64;

    let at_gc_ratio = if counts.gc() > 0 { at / gc } else { f64::INFINITY };
    let mw_da = total as f64 * AVG_NUCLEOTIDE_MASS_DA;

    CompositionStats {
        counts,
        total,
        gc_percent: gc / divisor * 100.0,
        at_percent: at / divisor * 100.0,
        at_gc_ratio,
        mw_da,
        mw_kda: mw_da / 1000.0,
    }
}
