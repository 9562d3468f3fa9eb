//! # benchplot
//!
//! Command-line front end for turning benchmark logs into pgfplots figures.
//!
//! ## Usage
//!
//! ```bash
//! # Keep only the benchmark rows of a raw test log
//! benchplot filter --system system-a raw.log -o filtered.txt
//!
//! # Generate/verify latency per version, both systems
//! benchplot versions data/verify-a.txt data/verify-b.txt
//!
//! # Latency vs throughput scatter
//! benchplot scale data/get-scale.txt --metric-set get-scale
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
