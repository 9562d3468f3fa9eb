use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use benchplot::pipeline::extract_file;
use benchplot::system::SourceSystem;

use super::output::write_output;
use super::Config;

/// Render a latency-vs-throughput scatter plot
pub fn run(
    config: &Config,
    input: PathBuf,
    system: &str,
    metric_set: &str,
    [x_field, y_field]: [&str; 2],
    legend: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    let system: SourceSystem = system.parse()?;
    let table = config.layout_table()?;
    let legend = legend.filter(|l| !l.is_empty());
    let spec = config.scale_spec(legend.is_some())?;

    let extraction = extract_file(&input, &table, system, metric_set)
        .with_context(|| format!("Extraction from {} failed", input.display()))?;

    let plot = spec
        .render_scatter(&extraction.series, x_field, y_field, legend)
        .with_context(|| format!("Failed to render {} vs {} plot", y_field, x_field))?;

    info!(
        "Rendered scale plot with {} points from {}",
        extraction.series.len(),
        input.display()
    );
    write_output(output.as_ref(), &plot)
}
