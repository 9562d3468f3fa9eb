//! # Series and Coordinates
//!
//! A [`Series`] is the ordered output of one extraction pass. Its order is the x
//! axis of a version plot: the k-th record is version k, whatever line it came
//! from. Records are never re-sorted or re-keyed.
//!
//! One series of multi-field records feeds several plots through projection
//! ([`Series::indexed`], [`Series::scatter`]) without touching the log again.

#[cfg(test)]
mod tests;

use std::fmt;

use serde::Serialize;

use crate::extract::Record;
use crate::layout::{FieldSpec, MetricKind};
use crate::render::{format_value, RenderError};
use crate::system::SourceSystem;

/// Ordered records from one source system.
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    source: SourceSystem,
    fields: Vec<FieldSpec>,
    records: Vec<Record>,
}

impl Series {
    /// Create a series; `fields` describes the value positions of every record.
    pub fn new(source: SourceSystem, fields: Vec<FieldSpec>, records: Vec<Record>) -> Self {
        Self {
            source,
            fields,
            records,
        }
    }

    /// System the records came from
    pub fn source(&self) -> SourceSystem {
        self.source
    }

    /// Field descriptions
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Records in encounter order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position and description of a field
    pub fn field(&self, name: &str) -> Result<(usize, &FieldSpec), RenderError> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, f)| f.name == name)
            .ok_or_else(|| RenderError::UnknownField {
                field: name.to_string(),
                available: self
                    .fields
                    .iter()
                    .map(|f| f.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Values of one field, in order
    pub fn project(&self, name: &str) -> Result<Vec<f64>, RenderError> {
        let (index, _) = self.field(name)?;
        Ok(self.records.iter().filter_map(|r| r.get(index)).collect())
    }

    /// `(k, value)` pairs with k counting records from 1.
    pub fn indexed(&self, name: &str) -> Result<CoordinateList, RenderError> {
        let (_, spec) = self.field(name)?;
        let kind = spec.kind;
        let points = self
            .project(name)?
            .into_iter()
            .enumerate()
            .map(|(i, y)| Coordinate::new((i + 1) as f64, y))
            .collect();
        Ok(CoordinateList::new(MetricKind::Count, kind, points))
    }

    /// `(x, y)` pairs taken from two fields of each record.
    pub fn scatter(&self, x_field: &str, y_field: &str) -> Result<CoordinateList, RenderError> {
        let (xi, x_spec) = self.field(x_field)?;
        let (yi, y_spec) = self.field(y_field)?;
        let points = self
            .records
            .iter()
            .filter_map(|r| Some(Coordinate::new(r.get(xi)?, r.get(yi)?)))
            .collect();
        Ok(CoordinateList::new(x_spec.kind, y_spec.kind, points))
    }
}

/// A single plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    /// Horizontal value
    pub x: f64,
    /// Vertical value
    pub y: f64,
}

impl Coordinate {
    /// Create a point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Points of one plot line together with their formatting policy.
///
/// Displays as a pgfplots coordinate body: `(x, y)` pairs separated by a newline
/// and four spaces of indentation.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateList {
    x_kind: MetricKind,
    y_kind: MetricKind,
    points: Vec<Coordinate>,
}

impl CoordinateList {
    /// Create a list
    pub fn new(x_kind: MetricKind, y_kind: MetricKind, points: Vec<Coordinate>) -> Self {
        Self {
            x_kind,
            y_kind,
            points,
        }
    }

    /// Points in order
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the list has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl fmt::Display for CoordinateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str("\n    ")?;
            }
            write!(
                f,
                "({}, {})",
                format_value(point.x, self.x_kind),
                format_value(point.y, self.y_kind)
            )?;
        }
        Ok(())
    }
}

/// Two series plotted side by side.
///
/// The series are paired by position only; they may differ in length and each
/// keeps exactly its own points.
#[derive(Debug, Clone)]
pub struct ComparisonSet {
    a: Series,
    b: Series,
}

impl ComparisonSet {
    /// Pair two series
    pub fn new(a: Series, b: Series) -> Self {
        Self { a, b }
    }

    /// First series
    pub fn a(&self) -> &Series {
        &self.a
    }

    /// Second series
    pub fn b(&self) -> &Series {
        &self.b
    }

    /// Index-vs-value lists for one field of both series.
    pub fn indexed(&self, field: &str) -> Result<(CoordinateList, CoordinateList), RenderError> {
        Ok((self.a.indexed(field)?, self.b.indexed(field)?))
    }
}
