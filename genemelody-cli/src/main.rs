//! # GeneMelody CLI - DNA Analysis and Sonification
//!
//! A command-line interface for analyzing DNA sequences and rendering them
//! as music.
//!
//! ## Usage
//!
//! ```bash
//! # Basic analysis report
//! genemelody -i sequence.fasta
//!
//! # Tab-separated motif and ORF coordinates
//! genemelody -i sequence.fasta -f tsv -o hits.tsv
//!
//! # Render the sequence as a MIDI melody
//! genemelody -i sequence.fasta -f midi -o melody.mid -b 90 -n 40
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input FASTA or plain-text file (default: stdin)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-f, --format <FORMAT>`: Output format: report, tsv, midi (default: report)
//! - `-b, --bpm <BPM>`: Tempo for MIDI output (default: 120)
//! - `-n, --instrument <PROGRAM>`: General MIDI program for MIDI output
//!   (default: 81, Lead Synth)
//! - `-q, --quiet`: Suppress progress messages
//!
//! ## Examples
//!
//! ### Analyze a pasted sequence from stdin
//!
//! ```bash
//! echo "ATGAAATAGGAATTC" | genemelody
//! ```
//!
//! ### Violin melody at a slow tempo
//!
//! ```bash
//! genemelody -i gene.fasta -f midi -n 40 -b 60 -o gene.mid
//! ```

use clap::{Arg, ArgAction, Command};
use genemelody_core::config::{MelodyConfig, OutputFormat};
use genemelody_core::constants::INSTRUMENTS;
use genemelody_core::output::write_results;
use genemelody_core::MelodyAnalyzer;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

/// Main entry point for the GeneMelody CLI application.
///
/// Parses command-line arguments, configures the analyzer, analyzes input
/// sequences, and writes results in the requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("genemelody")
        .version(env!("CARGO_PKG_VERSION"))
        .about("DNA sequence analysis and MIDI melody generation")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Input FASTA or plain-text file (default: stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: report, tsv, midi")
                .default_value("report"),
        )
        .arg(
            Arg::new("bpm")
                .short('b')
                .long("bpm")
                .value_name("BPM")
                .help("Tempo in beats per minute for MIDI output")
                .default_value("120"),
        )
        .arg(
            Arg::new("instrument")
                .short('n')
                .long("instrument")
                .value_name("PROGRAM")
                .help("General MIDI program for MIDI output")
                .default_value("81"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .get_matches();

    let mut options = MelodyConfig {
        quiet: matches.get_flag("quiet"),
        ..Default::default()
    };

    options.output_format = match matches.get_one::<String>("format").unwrap().as_str() {
        "report" => OutputFormat::Report,
        "tsv" => OutputFormat::Tsv,
        "midi" => OutputFormat::Midi,
        other => return Err(format!("Invalid output format: {other}").into()),
    };

    let bpm: u32 = matches
        .get_one::<String>("bpm")
        .unwrap()
        .parse()
        .map_err(|_| "Invalid BPM value")?;
    if bpm == 0 {
        return Err("BPM must be at least 1".into());
    }
    options.bpm = bpm;

    let instrument: u8 = matches
        .get_one::<String>("instrument")
        .unwrap()
        .parse()
        .map_err(|_| "Invalid instrument program number")?;
    if genemelody_core::constants::instrument_name(instrument).is_none() {
        let known: Vec<String> = INSTRUMENTS
            .iter()
            .map(|(program, name)| format!("{program} ({name})"))
            .collect();
        return Err(format!(
            "Unknown instrument program {instrument}; choose one of: {}",
            known.join(", ")
        )
        .into());
    }
    options.instrument = instrument;

    let analyzer = MelodyAnalyzer::new(options);
    let results = if let Some(input_file) = matches.get_one::<String>("input") {
        analyzer.analyze_input_file(input_file)?
    } else {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        analyzer.analyze_input_text(&content)?
    };

    // A MIDI file holds one melody; refuse ambiguous multi-record input.
    if analyzer.config.output_format == OutputFormat::Midi && results.len() > 1 {
        return Err(format!(
            "MIDI output supports a single sequence, but the input holds {} records",
            results.len()
        )
        .into());
    }

    // Write output
    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    for result in &results {
        write_results(&mut writer, result, &analyzer.config)?;
    }
    writer.flush()?;

    if !analyzer.config.quiet {
        eprintln!(
            "Analysis complete! Found {} motifs and {} ORFs in {} sequences.",
            results.iter().map(|r| r.motifs.len()).sum::<usize>(),
            results.iter().map(|r| r.orfs.len()).sum::<usize>(),
            results.len()
        );
    }

    Ok(())
}
