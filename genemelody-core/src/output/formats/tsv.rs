use std::io::Write;

use crate::{constants::VERSION, results::MelodyResults, types::MelodyError};

/// Write results as tab-separated motif and ORF coordinates
pub fn write_tsv_format<W: Write>(
    writer: &mut W,
    results: &MelodyResults,
) -> Result<(), MelodyError> {
    writeln!(writer, "# GeneMelody v{VERSION}")?;
    writeln!(
        writer,
        "# Sequence: {};length={};gc={:.2}",
        results.sequence_info.header,
        results.sequence_info.length,
        results.sequence_info.gc_content * 100.0
    )?;
    writeln!(writer, "# motif\tsequence\tposition\tmeaning")?;
    writeln!(writer, "# orf\tframe\tstart\tend\tlength_nt\tlength_aa")?;

    for hit in &results.motifs {
        writeln!(writer, "motif\t{}\t{}\t{}", hit.motif, hit.start, hit.meaning)?;
    }

    for orf in &results.orfs {
        writeln!(
            writer,
            "orf\t{}\t{}\t{}\t{}\t{}",
            orf.frame, orf.start, orf.end, orf.length_nt, orf.length_aa
        )?;
    }

    Ok(())
}
