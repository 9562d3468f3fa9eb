use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use benchplot::filter::{LineFilter, LogLine};
use benchplot::pipeline::read_log;
use benchplot::system::SourceSystem;

use super::output::write_output;
use super::Config;

/// Print the benchmark rows of a log
pub fn run(
    config: &Config,
    system: &str,
    prefix: Option<String>,
    input: PathBuf,
    output: Option<PathBuf>,
) -> Result<()> {
    let system: SourceSystem = system.parse()?;
    let table = config.layout_table()?;
    let prefix = prefix.unwrap_or_else(|| system.family_prefix().to_string());

    let filter = LineFilter::for_system(&table.prefix_registry(), system, &prefix)?;
    let text = read_log(&input).with_context(|| format!("Failed to load {}", input.display()))?;
    let lines = filter.select_text(&text);

    info!(
        "Selected {} '{}' rows from {} ({})",
        lines.len(),
        filter.prefix(),
        input.display(),
        system
    );

    write_output(output.as_ref(), &join_lines(&lines))
}

/// Selected rows, one per line
fn join_lines(lines: &[LogLine]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
