use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod config;
mod extract;
mod filter;
mod layouts;
mod output;
mod scale;
mod versions;

pub use config::Config;

/// benchplot - Benchmark Log to pgfplots Converter
#[derive(Parser)]
#[command(name = "benchplot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load layouts, legends and templates from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for extracted series.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum FormatArg {
    /// JSON document with stats and records
    #[default]
    Json,
    /// One CSV row per record
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the benchmark rows of a log, trimmed, in original order
    Filter {
        /// Source system (system-a, system-b)
        #[arg(short, long)]
        system: String,

        /// Row prefix to select (defaults to the system's family prefix)
        #[arg(short, long)]
        prefix: Option<String>,

        /// Input log path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output path (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Dump the series extracted from a log
    Extract {
        /// Source system (system-a, system-b)
        #[arg(short, long)]
        system: String,

        /// Metric set of the offset table
        #[arg(short, long, default_value = "get-verify")]
        metric_set: String,

        /// Input log path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output format (json, csv)
        #[arg(short, long, default_value = "json", value_enum)]
        format: FormatArg,

        /// Output path (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Render per-version plots comparing both systems
    Versions {
        /// Log produced by system A
        #[arg(value_name = "SYSTEM_A_LOG")]
        system_a_log: PathBuf,

        /// Log produced by system B
        #[arg(value_name = "SYSTEM_B_LOG")]
        system_b_log: PathBuf,

        /// Metric set of the offset table
        #[arg(short, long, default_value = "get-verify")]
        metric_set: String,

        /// Field to plot; repeat for several plots (defaults to every latency field)
        #[arg(short, long)]
        field: Vec<String>,

        /// Legend entry for system A
        #[arg(long)]
        legend_a: Option<String>,

        /// Legend entry for system B
        #[arg(long)]
        legend_b: Option<String>,

        /// Output path (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Render a latency-vs-throughput scatter plot
    Scale {
        /// Input log path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Source system (system-a, system-b)
        #[arg(short, long, default_value = "system-a")]
        system: String,

        /// Metric set of the offset table
        #[arg(short, long, default_value = "get-scale")]
        metric_set: String,

        /// Field plotted on the x axis
        #[arg(long, default_value = "p99_latency")]
        x_field: String,

        /// Field plotted on the y axis
        #[arg(long, default_value = "throughput")]
        y_field: String,

        /// Legend entry (no legend when omitted)
        #[arg(long)]
        legend: Option<String>,

        /// Output path (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// List the active column offset table
    Layouts,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Filter {
            system,
            prefix,
            input,
            output,
        } => filter::run(&config, &system, prefix, input, output),
        Commands::Extract {
            system,
            metric_set,
            input,
            format,
            output,
        } => extract::run(&config, &system, &metric_set, input, format, output),
        Commands::Versions {
            system_a_log,
            system_b_log,
            metric_set,
            field,
            legend_a,
            legend_b,
            output,
        } => versions::run(
            &config,
            system_a_log,
            system_b_log,
            &metric_set,
            field,
            [legend_a, legend_b],
            output,
        ),
        Commands::Scale {
            input,
            system,
            metric_set,
            x_field,
            y_field,
            legend,
            output,
        } => scale::run(
            &config,
            input,
            &system,
            &metric_set,
            [x_field.as_str(), y_field.as_str()],
            legend.as_deref(),
            output,
        ),
        Commands::Layouts => layouts::run(&config),
    }
}
