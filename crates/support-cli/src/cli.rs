//! CLI argument definitions for the support analytics toolkit.

use std::path::PathBuf;

use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "support-analytics",
    version,
    about = "Support Ticket Analytics - Reports and schema tooling for helpdesk exports",
    long_about = "Analyze canonical support ticket CSV files.\n\n\
                  Generates volume, response, resolution, performance, workload, and\n\
                  escalation reports, validates files against the canonical schema, and\n\
                  transforms vendor helpdesk exports into that schema."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a canonical ticket CSV and print reports.
    Analyze(AnalyzeArgs),

    /// Validate a canonical ticket CSV without analyzing it.
    Validate(ValidateArgs),

    /// Generate a sample ticket CSV for demos and testing.
    Sample(SampleArgs),

    /// Transform a vendor helpdesk export into the canonical schema.
    Transform(TransformArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the canonical ticket CSV file.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,

    /// Report to generate.
    #[arg(short = 'r', long = "report", value_enum, default_value = "all")]
    pub report: ReportArg,

    /// Output destination.
    #[arg(short = 'o', long = "output", value_enum, default_value = "console")]
    pub output: OutputArg,

    /// Where to write the HTML report (HTML output is not yet implemented).
    #[arg(long = "html-output", value_name = "FILE")]
    pub html_output: Option<PathBuf>,

    /// Drop tickets held by the unassigned placeholder from the reports.
    #[arg(long = "exclude-unassigned")]
    pub exclude_unassigned: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the canonical ticket CSV file.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Where to write the generated CSV.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "./sample-tickets.csv"
    )]
    pub output: PathBuf,

    /// Number of tickets to generate.
    #[arg(short = 'n', long = "num-tickets", default_value_t = 100)]
    pub num_tickets: usize,
}

#[derive(Parser)]
pub struct TransformArgs {
    /// Path to the vendor export CSV file.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Where to write the canonical CSV.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Preview the transformation without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write rows that transform cleanly and skip the ones that fail.
    #[arg(long = "ignore-errors")]
    pub ignore_errors: bool,

    /// Validate the written file against the canonical schema afterwards.
    #[arg(long = "validate-output")]
    pub validate_output: bool,

    /// Timezone for vendor timestamps that carry no explicit offset.
    #[arg(
        long = "source-timezone",
        value_name = "TZ",
        default_value = "America/Vancouver"
    )]
    pub source_timezone: Tz,
}

/// Report selection for the analyze command.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportArg {
    All,
    Volume,
    Response,
    FirstResponse,
    Resolution,
    Performance,
    Workload,
    Assignees,
    Escalation,
    Time,
    Companies,
}

/// Output destination for the analyze command.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Console,
    Html,
    Both,
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
