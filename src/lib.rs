//! # benchplot - Benchmark Log to pgfplots Converter
//!
//! `benchplot` turns the text output of two key-transparency benchmark harnesses
//! into pgfplots figures that compare them side by side.
//!
//! ## Key Features
//!
//! - **Prefix Filtering**: Benchmark rows are picked out of noisy test-runner
//!   output by their leading token; only recognized prefixes are accepted.
//!
//! - **Explicit Offset Table**: Column positions live in one versioned
//!   [`LayoutTable`](layout::LayoutTable) keyed by (system, metric set), validated
//!   once at startup and extensible from a TOML config file.
//!
//! - **Tolerant Extraction**: Truncated or garbled rows are skipped and counted,
//!   never fatal. Configuration mistakes are always fatal.
//!
//! - **Stable Formatting**: Latencies are printed with three decimals, counts as
//!   integers, so coordinate lists line up across plot lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use benchplot::layout::LayoutTable;
//! use benchplot::pipeline::extract_text;
//! use benchplot::render::PlotSpec;
//! use benchplot::series::ComparisonSet;
//! use benchplot::system::SourceSystem;
//!
//! let table = LayoutTable::builtin();
//!
//! let a = extract_text(
//!     "TestBenchGetVerify 1000 120.5 us 7 ms 340.2 us",
//!     &table,
//!     SourceSystem::SystemA,
//!     "get-verify",
//! )?;
//! let b = extract_text(
//!     "bench_get_verify 1000 95.0 us 5 ms 210.1 us",
//!     &table,
//!     SourceSystem::SystemB,
//!     "get-verify",
//! )?;
//!
//! let set = ComparisonSet::new(a.series, b.series);
//! let plot = PlotSpec::versions()?.render_comparison(&set, "gen_latency", ["A", "B"])?;
//! assert!(plot.contains("(1, 120.500)"));
//! assert!(plot.contains("(1, 95.000)"));
//! # Ok::<(), benchplot::pipeline::PipelineError>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules, in pipeline order:
//!
//! - [`system`]: The two source systems and their row prefixes
//! - [`filter`]: Prefix-based line selection
//! - [`layout`]: Column offset table
//! - [`extract`]: Numeric field extraction from selected rows
//! - [`series`]: Ordered series, projections and coordinate lists
//! - [`render`]: Precision policy and plot template substitution
//! - [`pipeline`]: File and text entry points chaining the stages

// Documentation lints - every public item is part of the library surface
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod extract;
pub mod filter;
pub mod layout;
pub mod pipeline;
pub mod render;
pub mod series;
pub mod system;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::extract::{ExtractionStats, FieldExtractor, Record, SkipReason};
    pub use crate::filter::{log_lines, FilterError, LineFilter, LogLine, PrefixRegistry};
    pub use crate::layout::{
        ColumnLayout, FieldSpec, LayoutDef, LayoutError, LayoutKey, LayoutTable, MetricKind,
    };
    pub use crate::pipeline::{extract_file, extract_text, Extraction, PipelineError};
    pub use crate::render::{format_value, PlotSpec, PlotTemplate, RenderError};
    pub use crate::series::{ComparisonSet, Coordinate, CoordinateList, Series};
    pub use crate::system::SourceSystem;
}
