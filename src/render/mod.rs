//! # Plot Rendering
//!
//! The last stage of the pipeline: coordinate lists are substituted into a
//! pgfplots `tikzpicture` template. Rendering is a pure function from named
//! values to text. A template that declares a placeholder nobody fills, or lacks
//! one the renderer supplies, is a configuration bug and fails the whole render.
//!
//! Number formatting is fixed per [`MetricKind`](crate::layout::MetricKind):
//! three decimals for continuous metrics, integers for counts.

mod error;
mod format;
mod plot;
mod template;


pub use error::RenderError;
pub use format::format_value;
pub use plot::{PlotSpec, SCALE_NO_LEGEND_TEMPLATE, SCALE_TEMPLATE, VERSIONS_TEMPLATE};
pub use template::PlotTemplate;
