//! Integration tests for benchplot
//!
//! These tests run the full pipeline from raw log files to rendered plot source.

use benchplot::layout::{LayoutDef, LayoutTable};
use benchplot::pipeline::{extract_file, extract_text, PipelineError};
use benchplot::render::{PlotSpec, RenderError};
use benchplot::series::ComparisonSet;
use benchplot::system::SourceSystem;
use std::fs;
use tempfile::tempdir;

const SYSTEM_A_VERIFY: &str = "\
go test -v -count=1 -timeout=0 -run TestBenchGetVerify ./kt
=== RUN   TestBenchGetVerify
TestBenchGetVerify          2000          51.2 us/gen           103 ms/total          88.9 us/ver
TestBenchGetVerify          2000          52.4 us/gen           105 ms/total          92.1 us/ver
TestBenchGetVerify          2000          53.9 us/gen           108 ms/total          95.7 us/ver
--- PASS: TestBenchGetVerify (12.41s)
PASS
ok      github.com/example/kt   12.603s
";

const SYSTEM_B_VERIFY: &str = "\
     Running benches/verify.rs
bench_get_verify            2000         140.0 us/gen           280 ms/total         310.5 us/ver
bench_get_verify            2000         171.3 us/gen
bench_get_verify            2000         205.8 us/gen           412 ms/total         402.0 us/ver
";

const GET_SCALE: &str = "\
=== RUN   TestBenchGetScale
TestBenchGetScale     100000     1 nCli     48210.7 op/s     18.2 us/p50     30.4 us/p90     35.12345 us/p99
TestBenchGetScale     100000     2 nCli     90112.2 op/s     19.0 us/p50     31.9 us/p90     41.0 us/p99
TestBenchGetScale     100000     4 nCli
--- PASS: TestBenchGetScale (30.02s)
";

#[test]
fn test_versions_plot_from_files() {
    let dir = tempdir().unwrap();
    let a_path = dir.path().join("verify-a.txt");
    let b_path = dir.path().join("verify-b.txt");
    fs::write(&a_path, SYSTEM_A_VERIFY).unwrap();
    fs::write(&b_path, SYSTEM_B_VERIFY).unwrap();

    let table = LayoutTable::builtin();
    let a = extract_file(&a_path, &table, SourceSystem::SystemA, "get-verify").unwrap();
    let b = extract_file(&b_path, &table, SourceSystem::SystemB, "get-verify").unwrap();

    assert_eq!(a.stats.records_extracted, 3);
    assert_eq!(b.stats.records_extracted, 2);
    assert_eq!(b.stats.lines_skipped, 1);

    let set = ComparisonSet::new(a.series, b.series);
    let spec = PlotSpec::versions().unwrap();

    let gen_plot = spec.render_comparison(&set, "gen_latency", ["A", "B"]).unwrap();
    let expected = r"\begin{tikzpicture}
\begin{axis}[
    xlabel={Num versions},
    ylabel={Get Generate Latency (\si{\micro\second}/op)},
    grid=major,
    legend pos=north west,
]
\addplot[mark=x, blue] coordinates {
    (1, 51.200)
    (2, 52.400)
    (3, 53.900)
};
\addplot[mark=*, red] coordinates {
    (1, 140.000)
    (2, 205.800)
};
\legend{A,B}
\end{axis}
\end{tikzpicture}";
    assert_eq!(gen_plot, expected);

    let ver = spec.render_comparison(&set, "verify_latency", ["A", "B"]).unwrap();
    assert!(ver.contains(r"ylabel={Get Verify Latency (\si{\micro\second}/op)},"));
    assert!(ver.contains("    (3, 95.700)\n};"));
    assert!(ver.contains("    (2, 402.000)\n};"));
}

#[test]
fn test_scale_plot() {
    let table = LayoutTable::builtin();
    let extraction = extract_text(GET_SCALE, &table, SourceSystem::SystemA, "get-scale").unwrap();
    assert_eq!(extraction.series.len(), 2);

    let plot = PlotSpec::scale()
        .unwrap()
        .render_scatter(&extraction.series, "p99_latency", "throughput", Some("Throughput"))
        .unwrap();

    assert!(plot.contains(r"xlabel={p99 Latency (\si{\micro\second})},"));
    assert!(plot.contains("ylabel={Throughput (op/s)},"));
    assert!(plot.contains("coordinates {\n    (35.123, 48211)\n    (41.000, 90112)\n};"));
}

#[test]
fn test_put_scale_plot_has_no_legend() {
    let log = "\
TestBenchPutScale     100000     1 nCli     20110.3 op/s     40.0 us/p50     52.1 us/p90     60.25 us/p99
TestBenchPutScale     100000     2 nCli     38990.0 op/s     41.7 us/p50     55.0 us/p90     71.5 us/p99
";
    let extraction =
        extract_text(log, &LayoutTable::builtin(), SourceSystem::SystemA, "put-scale").unwrap();

    let plot = PlotSpec::scale_without_legend()
        .unwrap()
        .render_scatter(&extraction.series, "p99_latency", "throughput", None)
        .unwrap();

    assert!(!plot.contains(r"\legend"));
    assert!(plot.contains("coordinates {\n    (60.250, 20110)\n    (71.500, 38990)\n};"));
    assert!(plot.ends_with("\\end{axis}\n\\end{tikzpicture}"));
}

#[test]
fn test_interleaved_noise_keeps_relative_order() {
    let log = "\
bench_get_verify 1 1.0 us 0 x 10.0 us
unrelated line
bench_get_verify 1 2.0 us 0 x 20.0 us
    --- more noise ---
bench_get_verify 1 3.0 us 0 x 30.0 us";

    let extraction =
        extract_text(log, &LayoutTable::builtin(), SourceSystem::SystemB, "get-verify").unwrap();
    let coords = extraction.series.indexed("verify_latency").unwrap();
    assert_eq!(
        coords.to_string(),
        "(1, 10.000)\n    (2, 20.000)\n    (3, 30.000)"
    );
}

#[test]
fn test_configured_layout_end_to_end() {
    let def: LayoutDef = toml::from_str(
        r#"
        system = "system-b"
        metric_set = "get-size"
        prefix = "bench_get_size"
        sample = "bench_get_size 100 1536 B"
        markers = [{ column = 3, token = "B" }]
        fields = [{ name = "proof_size", column = 2, kind = "count", label = "Proof size (B)" }]
        "#,
    )
    .unwrap();

    let mut table = LayoutTable::builtin();
    table.merge(vec![def], None).unwrap();

    let log = "bench_get_size 100 1536 B\nbench_get_size 100 1600 KiB\nbench_get_size 100 1702.4 B\n";
    let extraction = extract_text(log, &table, SourceSystem::SystemB, "get-size").unwrap();
    assert_eq!(extraction.stats.lines_skipped, 1);
    assert_eq!(
        extraction.series.indexed("proof_size").unwrap().to_string(),
        "(1, 1536)\n    (2, 1702)"
    );
}

#[test]
fn test_empty_series_is_fatal() {
    let table = LayoutTable::builtin();
    let a = extract_text(SYSTEM_A_VERIFY, &table, SourceSystem::SystemA, "get-verify").unwrap();
    let b = extract_text("no rows here", &table, SourceSystem::SystemB, "get-verify").unwrap();

    let set = ComparisonSet::new(a.series, b.series);
    let err = PlotSpec::versions()
        .unwrap()
        .render_comparison(&set, "gen_latency", ["A", "B"])
        .unwrap_err();
    assert!(matches!(err, RenderError::EmptySeries(SourceSystem::SystemB)));
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempdir().unwrap();
    let err = extract_file(
        &dir.path().join("nope.txt"),
        &LayoutTable::builtin(),
        SourceSystem::SystemA,
        "get-verify",
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::MissingInput(_)));
    assert!(err.to_string().contains("nope.txt"));
}
