use std::io::Write;

use crate::{results::MelodyResults, types::MelodyError};

/// Renders a finite or infinite AT:GC ratio for display.
fn format_ratio(ratio: f64) -> String {
    if ratio.is_infinite() {
        "∞".to_string()
    } else {
        format!("{ratio:.3}")
    }
}

/// Write results as a plain-text analysis report
pub fn write_report_format<W: Write>(
    writer: &mut W,
    results: &MelodyResults,
) -> Result<(), MelodyError> {
    let stats = &results.composition;

    writeln!(writer, "DNA Sequence Analysis: {}", results.sequence_info.header)?;
    if let Some(desc) = &results.sequence_info.description {
        writeln!(writer, "Description: {desc}")?;
    }
    writeln!(writer, "Length: {} bp", stats.total)?;
    writeln!(
        writer,
        "Base counts: A={} T={} C={} G={}",
        stats.counts.a, stats.counts.t, stats.counts.c, stats.counts.g
    )?;
    writeln!(writer, "GC%: {:.2}%", stats.gc_percent)?;
    writeln!(writer, "AT%: {:.2}%", stats.at_percent)?;
    writeln!(writer, "AT/GC ratio: {}", format_ratio(stats.at_gc_ratio))?;
    writeln!(
        writer,
        "Molecular weight: {:.0} Da ({:.2} kDa)",
        stats.mw_da, stats.mw_kda
    )?;
    writeln!(writer)?;

    writeln!(writer, "Motifs Found:")?;
    if results.motifs.is_empty() {
        writeln!(writer, "None")?;
    } else {
        for hit in &results.motifs {
            writeln!(writer, "  {hit}")?;
        }
    }
    writeln!(writer)?;

    writeln!(writer, "ORF Summary:")?;
    writeln!(writer, "{}", results.orf_summary)?;

    Ok(())
}
