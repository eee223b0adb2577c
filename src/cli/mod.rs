//! Command-line parsing for the SuperStore dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the aggregation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Granularity;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sdash", version, about = "SuperStore Sales terminal dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the full dashboard report (overview, breakdowns, trend table).
    Report(DashArgs),
    /// Print only the calendar-trend table (useful for scripting).
    Trend(DashArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same underlying aggregation pipeline as `sdash report`,
    /// but renders the views in a terminal UI using Ratatui.
    Tui(DashArgs),
}

/// Common options for all front-ends.
#[derive(Debug, Parser, Clone)]
pub struct DashArgs {
    /// Dataset JSON: a file path or an http(s) URL.
    ///
    /// Defaults to $SDASH_DATA (also read from .env), then to
    /// `superstore_dataset.json` in the working directory.
    #[arg(short = 'd', long)]
    pub data: Option<String>,

    /// Use a deterministic synthetic dataset instead of loading one.
    #[arg(long)]
    pub sample: bool,

    /// Number of synthetic records for --sample.
    #[arg(short = 'n', long, default_value_t = 2000)]
    pub sample_count: usize,

    /// Random seed for --sample.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Only include records in this category (e.g. Technology).
    #[arg(short = 'c', long)]
    pub category: Option<String>,

    /// Only include records in this region (e.g. West).
    #[arg(short = 'r', long)]
    pub region: Option<String>,

    /// Only include records from this order year (e.g. 2017).
    #[arg(short = 'y', long)]
    pub year: Option<i32>,

    /// Trend granularity to display.
    #[arg(short = 'g', long, value_enum, default_value_t = Granularity::Monthly)]
    pub granularity: Granularity,

    /// Export every bucket series to CSV.
    #[arg(long = "export-csv")]
    pub export_csv: Option<PathBuf>,

    /// Export the computed dashboard to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}
