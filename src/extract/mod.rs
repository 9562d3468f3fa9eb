//! # Field Extraction
//!
//! Turns filtered benchmark rows into [`Record`]s by reading numeric tokens at the
//! offsets of a [`ColumnLayout`].
//!
//! Real logs contain truncated rows and rows from interrupted runs. A row that is
//! too short, carries a non-numeric token where a number is expected, or fails a
//! shape marker is skipped with a [`SkipReason`]; the batch always continues.

mod stats;


use log::debug;
use serde::Serialize;

pub use stats::ExtractionStats;

use crate::filter::LogLine;
use crate::layout::ColumnLayout;
use crate::series::Series;
use crate::system::SourceSystem;

/// Numeric values read from one benchmark row.
///
/// Values are stored in the field order of the layout that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    source: SourceSystem,
    line_number: usize,
    values: Vec<f64>,
}

impl Record {
    pub(crate) fn new(source: SourceSystem, line_number: usize, values: Vec<f64>) -> Self {
        Self {
            source,
            line_number,
            values,
        }
    }

    /// System the row came from
    pub fn source(&self) -> SourceSystem {
        self.source
    }

    /// Line number of the row in its log
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Values in layout field order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at a field position
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

/// Why a row produced no record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    /// Row has fewer tokens than the layout requires
    #[error("too few columns: found {found}, need {required}")]
    TooFewColumns {
        /// Tokens in the row
        found: usize,
        /// Tokens required by the layout
        required: usize,
    },

    /// Token at a field offset is not a finite number
    #[error("column {column} is not numeric: '{token}'")]
    NotNumeric {
        /// Offending column
        column: usize,
        /// Token found there
        token: String,
    },

    /// Token at a marker offset differs from the expected literal
    #[error("column {column} expected '{expected}', found '{found}'")]
    MarkerMismatch {
        /// Marker column
        column: usize,
        /// Expected literal
        expected: String,
        /// Token found there
        found: String,
    },
}

/// Reads records out of rows matching one layout.
#[derive(Debug, Clone, Copy)]
pub struct FieldExtractor<'a> {
    layout: &'a ColumnLayout,
    source: SourceSystem,
}

impl<'a> FieldExtractor<'a> {
    /// Create an extractor for rows of `layout` produced by `source`
    pub fn new(layout: &'a ColumnLayout, source: SourceSystem) -> Self {
        Self { layout, source }
    }

    /// Layout used by this extractor
    pub fn layout(&self) -> &'a ColumnLayout {
        self.layout
    }

    /// Extract a record from one filtered row.
    pub fn extract(&self, line: &LogLine) -> Result<Record, SkipReason> {
        let tokens: Vec<&str> = line.text.split_whitespace().collect();

        let required = self.layout.required_columns();
        if tokens.len() < required {
            return Err(SkipReason::TooFewColumns {
                found: tokens.len(),
                required,
            });
        }

        for marker in self.layout.markers() {
            let found = tokens[marker.column];
            if found != marker.token {
                return Err(SkipReason::MarkerMismatch {
                    column: marker.column,
                    expected: marker.token.clone(),
                    found: found.to_string(),
                });
            }
        }

        let values = self
            .layout
            .fields()
            .iter()
            .map(|field| parse_value(tokens[field.column], field.column))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Record::new(self.source, line.number, values))
    }

    /// Extract every row, skipping malformed ones, into a series.
    ///
    /// Records keep the encounter order of their rows.
    pub fn extract_series<I>(&self, lines: I) -> (Series, ExtractionStats)
    where
        I: IntoIterator<Item = LogLine>,
    {
        let mut stats = ExtractionStats::default();
        let mut records = Vec::new();

        for line in lines {
            stats.lines_matched += 1;
            match self.extract(&line) {
                Ok(record) => records.push(record),
                Err(reason) => {
                    debug!(
                        "Skipping line {} ({}): {}",
                        line.number,
                        self.layout.prefix(),
                        reason
                    );
                    stats.lines_skipped += 1;
                }
            }
        }

        stats.records_extracted = records.len();
        let series = Series::new(self.source, self.layout.fields().to_vec(), records);
        (series, stats)
    }
}

fn parse_value(token: &str, column: usize) -> Result<f64, SkipReason> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SkipReason::NotNumeric {
            column,
            token: token.to_string(),
        })
}
