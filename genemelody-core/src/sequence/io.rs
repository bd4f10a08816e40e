use std::fs::File;
use std::io::Read;
use std::path::Path;

use bio::io::fasta;

use crate::types::MelodyError;

/// One FASTA record: id, optional description, raw sequence bytes.
pub type FastaRecord = (String, Option<String>, Vec<u8>);

/// Reads all FASTA records from any byte source.
pub fn read_fasta_records<R: Read>(reader: R) -> Result<Vec<FastaRecord>, MelodyError> {
    let reader = fasta::Reader::new(reader);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| MelodyError::ParseError(e.to_string()))?;
        let id = record.id().to_string();
        let description = record.desc().map(String::from);
        let seq = record.seq().to_vec();
        sequences.push((id, description, seq));
    }

    Ok(sequences)
}

/// Reads all FASTA records from a file on disk.
pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, MelodyError> {
    let file = File::open(path)?;
    read_fasta_records(file)
}
