//! CLI argument definitions for the enrollment dashboard.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use enroll_model::DEFAULT_TARGET_PER_MONTH;

#[derive(Parser)]
#[command(
    name = "enrollment-dashboard",
    version,
    about = "Clinical-trial enrollment dashboard - derive metrics from spreadsheet exports",
    long_about = "Normalize site roster, enrollment, and monthly spreadsheet exports,\n\
                  derive screening/enrollment metrics and projections, and print\n\
                  the dashboard tables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Derive dashboard metrics from spreadsheet exports and print them.
    Report(ReportArgs),

    /// List the canonical columns and accepted synonyms for each table.
    Schema,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Enrollment summary CSV (screened / screen-failed / randomized counts).
    #[arg(long = "enrollment", value_name = "CSV")]
    pub enrollment: Option<PathBuf>,

    /// Monthly summary CSV (subject-status rows with per-month columns).
    #[arg(long = "monthly", value_name = "CSV")]
    pub monthly: Option<PathBuf>,

    /// Site roster CSV (activation and first screening/randomization dates).
    #[arg(long = "sites", value_name = "CSV")]
    pub sites: Option<PathBuf>,

    /// Randomizations targeted per month.
    #[arg(
        long = "target-per-month",
        value_name = "N",
        default_value_t = DEFAULT_TARGET_PER_MONTH
    )]
    pub target_per_month: i64,

    /// Last month covered by projections (YYYY-MM-DD).
    #[arg(long = "projection-end", value_name = "DATE")]
    pub projection_end: Option<NaiveDate>,

    /// Screen-failure rate override in percent (0 disables the override).
    #[arg(long = "sf-rate-override", value_name = "PCT", default_value_t = 0.0)]
    pub sf_rate_override: f64,

    /// Reference date for elapsed-day metrics (defaults to today).
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<NaiveDate>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
