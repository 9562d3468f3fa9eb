use crate::system::SourceSystem;

/// Errors in the column offset table.
///
/// All of these are configuration defects and are reported when the table is
/// built, before any log is read.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// Layout declared without a row prefix
    #[error("Layout with fields [{0}] has an empty prefix")]
    EmptyPrefix(String),

    /// Layout declared without any fields
    #[error("Layout '{0}' declares no fields")]
    NoFields(String),

    /// Two fields share a name
    #[error("Layout '{prefix}' declares field '{field}' more than once")]
    DuplicateField {
        /// Row prefix of the layout
        prefix: String,
        /// Repeated field name
        field: String,
    },

    /// Declared minimum column count does not cover the fields
    #[error("Layout '{prefix}' requires {required} columns but min_columns is {min_columns}")]
    MinColumnsTooSmall {
        /// Row prefix of the layout
        prefix: String,
        /// Declared minimum
        min_columns: usize,
        /// Columns needed to reach the highest field or marker offset
        required: usize,
    },

    /// A shape marker sits on a column that is also read as a field
    #[error("Layout '{prefix}' uses column {column} both as a marker and as a field")]
    MarkerCollision {
        /// Row prefix of the layout
        prefix: String,
        /// Offending column
        column: usize,
    },

    /// The sample line for a layout does not extract
    #[error("Sample line for layout '{prefix}' is rejected: {reason}")]
    SampleRejected {
        /// Row prefix of the layout
        prefix: String,
        /// Why the sample failed
        reason: String,
    },

    /// No layout registered for the requested system and metric set
    #[error("No layout for metric set '{metric_set}' on {system}. Available: {available}")]
    UnknownLayout {
        /// Requested system
        system: SourceSystem,
        /// Requested metric set
        metric_set: String,
        /// Metric sets available for that system
        available: String,
    },
}
