use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::layout::LayoutError;

const SYSTEM_A_LOG: &str = "\
=== RUN   TestBenchGetVerify
TestBenchGetVerify          1000       120.5 us/gen          42 ms/total       340.2 us/ver
TestBenchGetVerify          1000       121.5 us/gen          43 ms/total       341.2 us/ver
--- PASS: TestBenchGetVerify (1.20s)
TestBenchGetVerify          1000       122.5 us/gen
TestBenchGetVerify          1000       123.5 us/gen          44 ms/total       342.2 us/ver
PASS
";

#[test]
fn test_extract_text_skips_noise() {
    let table = LayoutTable::builtin();
    let extraction = extract_text(SYSTEM_A_LOG, &table, SourceSystem::SystemA, "get-verify").unwrap();

    assert_eq!(extraction.stats.lines_read, 7);
    assert_eq!(extraction.stats.lines_matched, 4);
    assert_eq!(extraction.stats.records_extracted, 3);
    assert_eq!(extraction.stats.lines_skipped, 1);
    assert_eq!(
        extraction.series.project("verify_latency").unwrap(),
        vec![340.2, 341.2, 342.2]
    );
}

#[test]
fn test_extract_text_unknown_metric_set() {
    let table = LayoutTable::builtin();
    let err = extract_text("", &table, SourceSystem::SystemB, "put-scale").unwrap_err();
    assert!(matches!(err, PipelineError::Layout(LayoutError::UnknownLayout { .. })));
}

#[test]
fn test_extract_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"bench_get_verify 10 95.0 us 1 x 210.1 us\n\xff\xfe garbage\n")
        .unwrap();

    let table = LayoutTable::builtin();
    let extraction =
        extract_file(file.path(), &table, SourceSystem::SystemB, "get-verify").unwrap();
    assert_eq!(extraction.series.len(), 1);
    assert_eq!(extraction.series.records()[0].values(), &[95.0, 210.1]);
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = extract_file(&path, &LayoutTable::builtin(), SourceSystem::SystemA, "get-verify")
        .unwrap_err();
    assert!(matches!(err, PipelineError::MissingInput(p) if p == path));
}
