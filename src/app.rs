//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the dataset source
//! - runs the shared aggregation pipeline
//! - prints reports or launches the TUI
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, DashArgs};
use crate::domain::{DashConfig, DataSource, FilterSpec};
use crate::error::AppError;

pub mod pipeline;

/// Default dataset file, matching the name the exporter ships with.
const DEFAULT_DATASET: &str = "superstore_dataset.json";

/// Entry point for the `sdash` binary.
pub fn run() -> Result<(), AppError> {
    // We want `sdash` and `sdash -r West` to behave like `sdash tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_report(args, OutputMode::Full),
        Command::Trend(args) => handle_report(args, OutputMode::TrendOnly),
        Command::Tui(args) => handle_tui(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    TrendOnly,
}

fn handle_report(args: DashArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = dash_config_from_args(&args);
    let (records, load) = pipeline::load_records_or_empty(&config);

    // A failed load is a normal state: report on whatever subset is available.
    if let Some(diagnostic) = &load.diagnostic {
        eprintln!("{diagnostic}");
    }

    let dash = pipeline::build_dashboard(&records, &config.filters);

    match mode {
        OutputMode::Full => {
            println!("{}", crate::report::format_report(&dash, &load, &config));
        }
        OutputMode::TrendOnly => {
            println!("{}", crate::report::format_trend(&dash, config.granularity));
        }
    }

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::export::write_dashboard_csv(path, &dash)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::export::write_dashboard_json(path, &dash)?;
    }

    Ok(())
}

fn handle_tui(args: DashArgs) -> Result<(), AppError> {
    crate::tui::run(args)
}

pub fn dash_config_from_args(args: &DashArgs) -> DashConfig {
    DashConfig {
        source: resolve_source(args),
        filters: FilterSpec {
            category: args.category.clone(),
            region: args.region.clone(),
            year: args.year,
        },
        granularity: args.granularity,
        export_csv: args.export_csv.clone(),
        export_json: args.export_json.clone(),
    }
}

/// Resolve the dataset source from flags, then `SDASH_DATA`, then the default
/// file name.
fn resolve_source(args: &DashArgs) -> DataSource {
    if args.sample {
        return DataSource::Sample {
            count: args.sample_count,
            seed: args.seed,
        };
    }

    dotenvy::dotenv().ok();
    let spec = args
        .data
        .clone()
        .or_else(|| std::env::var("SDASH_DATA").ok())
        .unwrap_or_else(|| DEFAULT_DATASET.to_string());

    if spec.starts_with("http://") || spec.starts_with("https://") {
        DataSource::Url(spec)
    } else {
        DataSource::Path(spec.into())
    }
}

/// Rewrite argv so `sdash` defaults to `sdash tui`.
///
/// Rules:
/// - `sdash`                     -> `sdash tui`
/// - `sdash -r West ...`         -> `sdash tui -r West ...`
/// - `sdash --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "trend" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
