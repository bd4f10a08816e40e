/// Version string for GeneMelody
pub const VERSION: &str = "0.1.0";

/// Length of a codon in bases
pub const CODON_LENGTH: usize = 3;

/// Number of forward reading frames to analyze
pub const READING_FRAMES: usize = 3;

/// The start codon recognized by the ORF finder
pub const START_CODON: &str = "ATG";

/// Stop codons recognized by the ORF finder
pub const STOP_CODONS: [&str; 3] = ["TAA", "TAG", "TGA"];

/// Average mass of a single nucleotide in Daltons, used for the
/// molecular-weight estimate
pub const AVG_NUCLEOTIDE_MASS_DA: f64 = 330.0;

/// MIDI pitch assigned to each base (A, T, C, G)
pub const BASE_NOTE_MAP: [(char, u8); 4] = [('A', 60), ('T', 62), ('C', 64), ('G', 67)];

/// General MIDI programs selectable for melody rendering
pub const INSTRUMENTS: [(u8, &str); 8] = [
    (0, "Acoustic Grand Piano"),
    (40, "Violin"),
    (41, "Viola"),
    (56, "Trumpet"),
    (60, "French Horn"),
    (73, "Flute"),
    (81, "Lead Synth"),
    (89, "New Age Pad"),
];

/// Ticks per quarter note in generated MIDI files
pub const TICKS_PER_BEAT: u16 = 480;

/// Velocity for every note-on/note-off event
pub const NOTE_VELOCITY: u8 = 100;

/// Duration of each note in ticks
pub const NOTE_DURATION_TICKS: u32 = 200;

/// Microseconds per minute, for BPM to MIDI tempo conversion
pub const MICROSECONDS_PER_MINUTE: u32 = 60_000_000;

/// Default tempo in beats per minute
pub const DEFAULT_BPM: u32 = 120;

/// Default General MIDI program (Lead Synth)
pub const DEFAULT_PROGRAM: u8 = 81;

/// Known biological signatures and their meanings.
///
/// Iteration order is significant: the motif scanner visits motifs in table
/// order, and that order breaks ties between hits at the same position.
pub const MOTIF_MEANINGS: [(&str, &str); 23] = [
    // TATA box variants
    ("TATAAA", "TATA box (variant: TATAAA) — promoter element near TSS."),
    ("TATATA", "TATA box (variant: TATATA) — promoter element near TSS."),
    ("TATATT", "TATA box (variant: TATATT) — promoter element near TSS."),
    ("TATAAT", "TATA box (variant: TATAAT) — promoter element near TSS."),
    ("TATGAA", "TATA-like box (variant: TATGAA) — promoter element near TSS."),
    // CAAT box variants
    ("CAAT", "CAAT box — TF-binding site (often ~50–200 bp upstream of TSS)."),
    ("CCAAT", "CAAT box (CCAAT) — TF-binding site (~50–200 bp upstream of TSS)."),
    ("CAATT", "CAAT box (CAATT) — TF-binding site (~50–200 bp upstream of TSS)."),
    ("CCATT", "CAAT box (CCATT) — TF-binding site (~50–200 bp upstream of TSS)."),
    // GC box variants
    ("GGGCGG", "GC box (GGGCGG) — GC-rich TF-binding site."),
    ("GGGAGG", "GC box (GGGAGG) — GC-rich TF-binding site."),
    ("GGGCCG", "GC box (GGGCCG) — GC-rich TF-binding site."),
    ("GCGGGG", "GC box (GCGGGG) — GC-rich TF-binding site."),
    // Palindromic restriction sites
    ("GAATTC", "EcoRI restriction site (GAATTC)."),
    ("GGATCC", "BamHI restriction site (GGATCC)."),
    ("AAGCTT", "HindIII restriction site (AAGCTT)."),
    ("CTGCAG", "PstI restriction site (CTGCAG)."),
    ("CCCGGG", "SmaI restriction site (CCCGGG)."),
    ("GCGGCCGC", "NotI restriction site (GCGGCCGC)."),
    ("TCTAGA", "XbaI restriction site (TCTAGA)."),
    ("GCTAGC", "NheI restriction site (GCTAGC)."),
    ("GGTACC", "KpnI restriction site (GGTACC)."),
    ("GAGCTC", "SacI restriction site (GAGCTC)."),
];

/// Look up the MIDI pitch for a base, `None` for characters outside the
/// four-letter alphabet.
#[must_use]
pub fn note_for_base(base: char) -> Option<u8> {
    BASE_NOTE_MAP
        .iter()
        .find(|&&(b, _)| b == base)
        .map(|&(_, note)| note)
}

/// Look up the display name for a General MIDI program number.
///
/// Returns `None` for programs outside the fixed instrument table.
#[must_use]
pub fn instrument_name(program: u8) -> Option<&'static str> {
    INSTRUMENTS
        .iter()
        .find(|&&(p, _)| p == program)
        .map(|&(_, name)| name)
}
