use crate::system::SourceSystem;

/// Errors raised while projecting series or rendering a plot template
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Requested field is not part of the series
    #[error("Unknown field '{field}'. Available fields: {available}")]
    UnknownField {
        /// Requested field
        field: String,
        /// Fields the series carries
        available: String,
    },

    /// A series to be plotted has no records
    #[error("No records extracted for {0}; refusing to render an empty plot line")]
    EmptySeries(SourceSystem),

    /// Template declares a placeholder that was not supplied
    #[error("Template placeholder '<<{0}>>' has no value")]
    UndefinedPlaceholder(String),

    /// A value was supplied for a placeholder the template does not declare
    #[error("Template does not declare required placeholder '<<{0}>>'")]
    UnusedValue(String),

    /// `<<` without a matching `>>`
    #[error("Unterminated placeholder starting at byte {0}")]
    Unterminated(usize),

    /// Placeholder name is empty or contains characters other than `[A-Za-z0-9_]`
    #[error("Invalid placeholder name '{name}' at byte {offset}")]
    InvalidPlaceholder {
        /// Name found between the delimiters
        name: String,
        /// Byte offset of the opening delimiter
        offset: usize,
    },
}
