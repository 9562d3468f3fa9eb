use std::path::PathBuf;

use crate::filter::FilterError;
use crate::layout::LayoutError;
use crate::render::RenderError;

/// Fatal errors of a pipeline invocation
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Input log does not exist
    #[error("Input file does not exist: {}", .0.display())]
    MissingInput(PathBuf),

    /// I/O error while reading an input log
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Input path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Filter configuration error
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// Offset table error
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Rendering error
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
