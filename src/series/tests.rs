use super::*;

fn verify_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("gen_latency", 2, MetricKind::Continuous),
        FieldSpec::new("verify_latency", 6, MetricKind::Continuous),
    ]
}

fn series(source: SourceSystem, rows: &[(f64, f64)]) -> Series {
    let records = rows
        .iter()
        .enumerate()
        .map(|(i, (g, v))| Record::new(source, i * 3 + 1, vec![*g, *v]))
        .collect();
    Series::new(source, verify_fields(), records)
}

#[test]
fn test_indexed_positions_ignore_line_numbers() {
    let s = series(SourceSystem::SystemA, &[(120.5, 340.2), (121.0, 350.0)]);
    let coords = s.indexed("gen_latency").unwrap();
    assert_eq!(
        coords.points(),
        &[Coordinate::new(1.0, 120.5), Coordinate::new(2.0, 121.0)]
    );
    assert_eq!(coords.to_string(), "(1, 120.500)\n    (2, 121.000)");
}

#[test]
fn test_projection_of_compound_records() {
    let s = series(SourceSystem::SystemB, &[(95.0, 210.1), (96.0, 211.0)]);
    assert_eq!(s.project("gen_latency").unwrap(), vec![95.0, 96.0]);
    assert_eq!(s.project("verify_latency").unwrap(), vec![210.1, 211.0]);
}

#[test]
fn test_unknown_field() {
    let s = series(SourceSystem::SystemA, &[(1.0, 2.0)]);
    match s.project("throughput").unwrap_err() {
        RenderError::UnknownField { field, available } => {
            assert_eq!(field, "throughput");
            assert_eq!(available, "gen_latency, verify_latency");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_scatter_uses_field_kinds() {
    let fields = vec![
        FieldSpec::new("clients", 2, MetricKind::Count),
        FieldSpec::new("throughput", 4, MetricKind::Count),
        FieldSpec::new("p99_latency", 10, MetricKind::Continuous),
    ];
    let records = vec![
        Record::new(SourceSystem::SystemA, 1, vec![1.0, 48210.7, 35.12345]),
        Record::new(SourceSystem::SystemA, 2, vec![2.0, 90112.2, 41.0]),
    ];
    let s = Series::new(SourceSystem::SystemA, fields, records);

    let coords = s.scatter("p99_latency", "throughput").unwrap();
    assert_eq!(coords.to_string(), "(35.123, 48211)\n    (41.000, 90112)");
}

#[test]
fn test_comparison_keeps_unequal_lengths() {
    let a = series(SourceSystem::SystemA, &[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
    let b = series(SourceSystem::SystemB, &[(7.0, 8.0)]);
    let set = ComparisonSet::new(a, b);

    let (ca, cb) = set.indexed("verify_latency").unwrap();
    assert_eq!(ca.len(), 3);
    assert_eq!(cb.len(), 1);
    assert_eq!(cb.to_string(), "(1, 8.000)");
}

#[test]
fn test_empty_list_displays_nothing() {
    let s = Series::new(SourceSystem::SystemA, verify_fields(), Vec::new());
    let coords = s.indexed("gen_latency").unwrap();
    assert!(coords.is_empty());
    assert_eq!(coords.to_string(), "");
}
