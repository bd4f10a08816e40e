mod common;
use crate::common::{run_genemelody, run_genemelody_stdin, write_fasta};
use tempfile::TempDir;

#[test]
fn report_format_from_fasta_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("seq.fasta");
    let output = dir.path().join("seq.txt");
    write_fasta(&input, "test_seq demo record", "ATGAAATAGGAATTC").unwrap();

    let bytes = run_genemelody(&input, &output, "report").unwrap();
    let report = String::from_utf8(bytes).unwrap();

    assert!(report.contains("DNA Sequence Analysis: test_seq"));
    assert!(report.contains("Description: demo record"));
    assert!(report.contains("Length: 15 bp"));
    assert!(report.contains("Base counts: A=7 T=4 C=1 G=3"));
    assert!(report.contains("GC%: 26.67%"));
    assert!(report.contains("AT%: 73.33%"));
    assert!(report.contains("GAATTC at position 10"));
    assert!(report.contains("Total ORFs: 1"));
    assert!(report.contains("Longest ORF: frame 0 start 1 end 9 (9 nt / 3 aa)"));
}

#[test]
fn report_is_the_default_format() {
    let stdout = run_genemelody_stdin("ATGAAATAG", &[]).unwrap();
    assert!(stdout.contains("DNA Sequence Analysis: GeneMelody_Seq_1"));
    assert!(stdout.contains("Total ORFs: 1"));
}

#[test]
fn report_handles_messy_plain_text_input() {
    let stdout = run_genemelody_stdin("atg aaa\ntag 123!\n", &["-f", "report"]).unwrap();
    assert!(stdout.contains("Length: 9 bp"));
    assert!(stdout.contains("Total ORFs: 1"));
}

#[test]
fn report_multi_record_fasta_emits_one_report_per_record() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("multi.fasta");
    let output = dir.path().join("multi.txt");
    std::fs::write(&input, ">seq1\nATGAAATAG\n>seq2\nGAATTC\n").unwrap();

    let bytes = run_genemelody(&input, &output, "report").unwrap();
    let report = String::from_utf8(bytes).unwrap();

    assert!(report.contains("DNA Sequence Analysis: seq1"));
    assert!(report.contains("DNA Sequence Analysis: seq2"));
}

#[test]
fn report_infinite_ratio_for_gc_free_sequence() {
    let stdout = run_genemelody_stdin("ATATATAT", &[]).unwrap();
    assert!(stdout.contains("AT/GC ratio: ∞"));
}
