#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Runs the GeneMelody CLI against an input file and returns the raw bytes
/// written to the output file.
pub fn run_genemelody(
    input_file: &Path,
    output_file: &Path,
    format: &str,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("genemelody")?;
    cmd.arg("-i")
        .arg(input_file)
        .arg("-o")
        .arg(output_file)
        .arg("-f")
        .arg(format)
        .arg("-q");

    cmd.assert().success();
    Ok(std::fs::read(output_file)?)
}

/// Runs the CLI with arbitrary extra arguments, feeding the sequence on stdin,
/// and returns stdout as a string.
pub fn run_genemelody_stdin(
    sequence: &str,
    extra_args: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("genemelody")?;
    cmd.arg("-q").args(extra_args).write_stdin(sequence);

    let output = cmd.assert().success().get_output().stdout.clone();
    Ok(String::from_utf8(output)?)
}

/// Writes a single-record FASTA fixture.
pub fn write_fasta(
    path: &Path,
    header: &str,
    sequence: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, format!(">{header}\n{sequence}\n"))?;
    Ok(())
}
