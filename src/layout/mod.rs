//! # Column Layouts
//!
//! Benchmark rows carry no header; the position of each value *is* the schema.
//! A [`ColumnLayout`] pins that schema down for one row prefix: which
//! whitespace-separated token holds which metric, and how that metric is
//! formatted when plotted.
//!
//! Layouts are collected into a versioned [`LayoutTable`] keyed by
//! (source system, metric set). The table is validated once when it is built;
//! after that the offsets never move.
//!
//! ## Example
//!
//! ```rust
//! use benchplot::layout::{ColumnLayout, MetricKind};
//!
//! let layout = ColumnLayout::builder("TestBenchGetScale")
//!     .field("throughput", 4, MetricKind::Count)
//!     .field("p99_latency", 10, MetricKind::Continuous)
//!     .min_columns(11)
//!     .build()?;
//!
//! assert_eq!(layout.required_columns(), 11);
//! # Ok::<(), benchplot::layout::LayoutError>(())
//! ```

mod error;
mod table;


use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use error::LayoutError;
pub use table::{LayoutDef, LayoutKey, LayoutTable, BUILTIN_TABLE_VERSION};

/// How a metric is rendered in coordinate lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    /// Measured quantity such as a latency; three decimal places
    #[default]
    Continuous,
    /// Counted quantity such as throughput or size; printed as an integer
    Count,
}

impl MetricKind {
    /// Number of decimal places used when formatting this metric.
    pub fn decimals(&self) -> usize {
        match self {
            MetricKind::Continuous => 3,
            MetricKind::Count => 0,
        }
    }
}

/// One named numeric field read from a fixed column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name, unique within its layout
    pub name: String,

    /// Zero-based token offset after whitespace splitting
    pub column: usize,

    /// Formatting policy
    #[serde(default)]
    pub kind: MetricKind,

    /// Axis label used when this field is plotted
    #[serde(default)]
    pub label: Option<String>,
}

impl FieldSpec {
    /// Create a field without an axis label
    pub fn new(name: impl Into<String>, column: usize, kind: MetricKind) -> Self {
        Self {
            name: name.into(),
            column,
            kind,
            label: None,
        }
    }

    /// Attach an axis label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Axis label, falling back to the field name
    pub fn axis_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// A literal token expected at a fixed column.
///
/// Markers catch upstream format changes that would otherwise still parse,
/// e.g. a unit token moving one column to the right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Zero-based token offset
    pub column: usize,
    /// Exact token expected there
    pub token: String,
}

/// Fixed-position layout of one kind of benchmark row.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    prefix: String,
    fields: Vec<FieldSpec>,
    min_columns: usize,
    markers: Vec<Marker>,
}

impl ColumnLayout {
    /// Start building a layout for rows beginning with `prefix`
    pub fn builder(prefix: impl Into<String>) -> LayoutBuilder {
        LayoutBuilder {
            prefix: prefix.into(),
            fields: Vec::new(),
            min_columns: None,
            markers: Vec::new(),
        }
    }

    /// Row prefix selecting lines for this layout
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Shape markers
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Minimum token count a row needs before any field is read
    pub fn required_columns(&self) -> usize {
        self.min_columns
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Comma separated field names, for diagnostics
    pub fn field_names(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if self.fields.is_empty() {
            return Err(LayoutError::NoFields(self.prefix.clone()));
        }

        let mut names = HashSet::new();
        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return Err(LayoutError::DuplicateField {
                    prefix: self.prefix.clone(),
                    field: field.name.clone(),
                });
            }
        }

        for marker in &self.markers {
            if self.fields.iter().any(|f| f.column == marker.column) {
                return Err(LayoutError::MarkerCollision {
                    prefix: self.prefix.clone(),
                    column: marker.column,
                });
            }
        }

        let required = self.highest_column() + 1;
        if self.min_columns < required {
            return Err(LayoutError::MinColumnsTooSmall {
                prefix: self.prefix.clone(),
                min_columns: self.min_columns,
                required,
            });
        }

        Ok(())
    }

    fn highest_column(&self) -> usize {
        let fields = self.fields.iter().map(|f| f.column);
        let markers = self.markers.iter().map(|m| m.column);
        fields.chain(markers).max().unwrap_or(0)
    }
}

/// Builder for [`ColumnLayout`]; validation happens in [`LayoutBuilder::build`].
#[derive(Debug, Clone)]
pub struct LayoutBuilder {
    prefix: String,
    fields: Vec<FieldSpec>,
    min_columns: Option<usize>,
    markers: Vec<Marker>,
}

impl LayoutBuilder {
    /// Add a field
    pub fn field(mut self, name: impl Into<String>, column: usize, kind: MetricKind) -> Self {
        self.fields.push(FieldSpec::new(name, column, kind));
        self
    }

    /// Add a fully specified field
    pub fn field_spec(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Require at least `n` tokens per row
    pub fn min_columns(mut self, n: usize) -> Self {
        self.min_columns = Some(n);
        self
    }

    /// Require `token` at `column`
    pub fn marker(mut self, column: usize, token: impl Into<String>) -> Self {
        self.markers.push(Marker {
            column,
            token: token.into(),
        });
        self
    }

    /// Validate and build the layout
    pub fn build(self) -> Result<ColumnLayout, LayoutError> {
        let mut layout = ColumnLayout {
            prefix: self.prefix,
            fields: self.fields,
            min_columns: 0,
            markers: self.markers,
        };
        layout.min_columns = self
            .min_columns
            .unwrap_or_else(|| layout.highest_column() + 1);

        if layout.prefix.is_empty() {
            return Err(LayoutError::EmptyPrefix(layout.field_names()));
        }
        layout.validate()?;
        Ok(layout)
    }
}
