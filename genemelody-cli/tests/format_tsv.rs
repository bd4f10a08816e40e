mod common;
use crate::common::{run_genemelody, run_genemelody_stdin, write_fasta};
use tempfile::TempDir;

#[test]
fn tsv_format_rows_and_headers() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("seq.fasta");
    let output = dir.path().join("seq.tsv");
    write_fasta(&input, "tsv_seq", "ATGAAATAGGAATTC").unwrap();

    let bytes = run_genemelody(&input, &output, "tsv").unwrap();
    let tsv = String::from_utf8(bytes).unwrap();

    assert!(tsv.starts_with("# GeneMelody v"));
    assert!(tsv.contains("# Sequence: tsv_seq;length=15;gc=26.67"));
    assert!(tsv.contains("motif\tGAATTC\t10\t"));
    assert!(tsv.contains("orf\t0\t1\t9\t9\t3"));
}

#[test]
fn tsv_overlapping_motif_hits_are_all_reported() {
    let stdout = run_genemelody_stdin("GAATTCGAATTC", &["-f", "tsv"]).unwrap();
    let motif_rows: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("motif\t"))
        .collect();
    assert_eq!(motif_rows.len(), 2);
    assert!(motif_rows[0].contains("\t1\t"));
    assert!(motif_rows[1].contains("\t7\t"));
}

#[test]
fn tsv_empty_input_yields_comment_lines_only() {
    let stdout = run_genemelody_stdin("", &["-f", "tsv"]).unwrap();
    assert!(!stdout.is_empty());
    assert!(stdout.lines().all(|line| line.starts_with('#')));
}
