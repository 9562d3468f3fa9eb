use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use benchplot::layout::MetricKind;
use benchplot::pipeline::extract_file;
use benchplot::series::{ComparisonSet, Series};
use benchplot::system::SourceSystem;

use super::output::write_output;
use super::Config;

/// Render per-version plots comparing both systems
pub fn run(
    config: &Config,
    system_a_log: PathBuf,
    system_b_log: PathBuf,
    metric_set: &str,
    fields: Vec<String>,
    legends: [Option<String>; 2],
    output: Option<PathBuf>,
) -> Result<()> {
    let table = config.layout_table()?;
    let spec = config.versions_spec()?;

    let a = extract_file(&system_a_log, &table, SourceSystem::SystemA, metric_set)
        .with_context(|| format!("Extraction from {} failed", system_a_log.display()))?;
    let b = extract_file(&system_b_log, &table, SourceSystem::SystemB, metric_set)
        .with_context(|| format!("Extraction from {} failed", system_b_log.display()))?;

    let fields = if fields.is_empty() {
        latency_fields(&a.series)
    } else {
        fields
    };
    if fields.is_empty() {
        anyhow::bail!("Metric set '{}' has no latency fields to plot", metric_set);
    }

    let [legend_a, legend_b] = legends;
    let legend_a = legend_a.unwrap_or_else(|| config.legend(SourceSystem::SystemA));
    let legend_b = legend_b.unwrap_or_else(|| config.legend(SourceSystem::SystemB));

    let set = ComparisonSet::new(a.series, b.series);
    let mut plots = Vec::with_capacity(fields.len());
    for field in &fields {
        let plot = spec
            .render_comparison(&set, field, [legend_a.as_str(), legend_b.as_str()])
            .with_context(|| format!("Failed to render '{}' plot", field))?;
        plots.push((field.as_str(), plot));
    }

    info!(
        "Rendered {} version plot(s): {} vs {} versions",
        plots.len(),
        set.a().len(),
        set.b().len()
    );

    write_output(output.as_ref(), &assemble(plots))
}

/// Continuous fields of a series, in layout order
fn latency_fields(series: &Series) -> Vec<String> {
    series
        .fields()
        .iter()
        .filter(|f| f.kind == MetricKind::Continuous)
        .map(|f| f.name.clone())
        .collect()
}

/// Join rendered plots; several plots are headed by their field and separated by `---`
fn assemble(mut plots: Vec<(&str, String)>) -> String {
    if plots.len() == 1 {
        return plots.remove(0).1;
    }
    plots
        .iter()
        .map(|(field, plot)| format!("{} plot:\n{}", field, plot))
        .collect::<Vec<_>>()
        .join("\n---\n")
}
