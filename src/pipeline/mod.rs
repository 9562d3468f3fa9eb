//! # Extraction Pipeline
//!
//! Chains the stages for one input: read the log, select the rows of the
//! requested layout, extract records, and hand back the finished [`Series`].
//!
//! Every call is a pure function of its input and the [`LayoutTable`]. The input
//! file is read to completion in a single pass and closed before extraction
//! starts.

mod error;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use log::info;

pub use error::PipelineError;

use crate::extract::{ExtractionStats, FieldExtractor};
use crate::filter::{log_lines, LineFilter};
use crate::layout::LayoutTable;
use crate::series::Series;
use crate::system::SourceSystem;

/// Result of one extraction
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Extracted series
    pub series: Series,
    /// Counters for the pass
    pub stats: ExtractionStats,
}

/// Extract a series from an in-memory log.
pub fn extract_text(
    text: &str,
    table: &LayoutTable,
    system: SourceSystem,
    metric_set: &str,
) -> Result<Extraction, PipelineError> {
    let layout = table.get(system, metric_set)?;
    let filter = LineFilter::new(&table.prefix_registry(), layout.prefix())?;

    let lines = log_lines(text);
    let lines_read = lines.len();
    let selected = filter.select(lines);

    let (series, mut stats) = FieldExtractor::new(layout, system).extract_series(selected);
    stats.lines_read = lines_read;

    info!("{} [{}/{}]: {}", layout.prefix(), system, metric_set, stats);
    Ok(Extraction { series, stats })
}

/// Extract a series from a log file.
pub fn extract_file(
    path: &Path,
    table: &LayoutTable,
    system: SourceSystem,
    metric_set: &str,
) -> Result<Extraction, PipelineError> {
    let text = read_log(path)?;
    extract_text(&text, table, system, metric_set)
}

/// Read a log file as text, replacing invalid UTF-8.
///
/// Harness output may contain stray bytes from crashed runs; those only ever
/// affect rows that would be dropped anyway.
pub fn read_log(path: &Path) -> Result<String, PipelineError> {
    let mut file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PipelineError::MissingInput(path.to_path_buf()),
        _ => PipelineError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
