//! CLI argument definitions for billmerge.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "billmerge",
    version,
    about = "Merge billing CSV exports into one normalized customer file",
    long_about = "Merge every billing CSV export in a directory into one file with a fixed\n\
                  column layout.\n\n\
                  Column names are matched against known synonyms, street addresses are\n\
                  rebuilt from their parts, and missing customer names are backfilled."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge the CSV exports of a directory into one output file.
    Merge(MergeArgs),

    /// List canonical address fields with their resolution mode and synonyms.
    Fields,
}

#[derive(Parser)]
pub struct MergeArgs {
    /// Directory containing the CSV exports.
    #[arg(long = "input-dir", value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Output CSV file (replaced atomically).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Process and summarize without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Keep only the recorded secondary address when it differs from the
    /// synthesized street address.
    #[arg(long = "no-address-duplicates")]
    pub no_address_duplicates: bool,

    /// Leave blank customer friendly names untouched.
    #[arg(long = "no-name-backfill")]
    pub no_name_backfill: bool,

    /// Write a JSON run report to this file.
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,
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
