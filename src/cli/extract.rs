use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use benchplot::extract::ExtractionStats;
use benchplot::pipeline::{extract_file, Extraction};
use benchplot::system::SourceSystem;

use super::output::write_output;
use super::{Config, FormatArg};

#[derive(Serialize)]
struct ExtractReport<'a> {
    source: SourceSystem,
    metric_set: &'a str,
    table_version: u32,
    stats: &'a ExtractionStats,
    records: Vec<RecordRow>,
}

#[derive(Serialize)]
struct RecordRow {
    index: usize,
    line: usize,
    values: BTreeMap<String, f64>,
}

/// Dump the series extracted from a log
pub fn run(
    config: &Config,
    system: &str,
    metric_set: &str,
    input: PathBuf,
    format: FormatArg,
    output: Option<PathBuf>,
) -> Result<()> {
    let system: SourceSystem = system.parse()?;
    let table = config.layout_table()?;

    let extraction = extract_file(&input, &table, system, metric_set)
        .with_context(|| format!("Extraction from {} failed", input.display()))?;

    let content = match format {
        FormatArg::Json => {
            let report = ExtractReport {
                source: system,
                metric_set,
                table_version: table.version(),
                stats: &extraction.stats,
                records: rows(&extraction),
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize series")?
        }
        FormatArg::Csv => to_csv(&extraction)?,
    };

    write_output(output.as_ref(), &content)
}

fn rows(extraction: &Extraction) -> Vec<RecordRow> {
    let fields = extraction.series.fields();
    extraction
        .series
        .records()
        .iter()
        .enumerate()
        .map(|(i, record)| RecordRow {
            index: i + 1,
            line: record.line_number(),
            values: fields
                .iter()
                .map(|f| f.name.clone())
                .zip(record.values().iter().copied())
                .collect(),
        })
        .collect()
}

fn to_csv(extraction: &Extraction) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["index".to_string(), "line".to_string()];
    header.extend(extraction.series.fields().iter().map(|f| f.name.clone()));
    writer.write_record(&header)?;

    for (i, record) in extraction.series.records().iter().enumerate() {
        let mut row = vec![(i + 1).to_string(), record.line_number().to_string()];
        row.extend(record.values().iter().map(|v| v.to_string()));
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}
