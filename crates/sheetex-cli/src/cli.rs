//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sheetex",
    version,
    about = "Extract and validate tabular data from workbook files"
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

    /// Log output format (pretty for humans, json for machine parsing).
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
    /// Extract every sheet of a workbook, no schema required.
    Dump(DumpArgs),

    /// Validate a workbook against a schema file and extract it.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct DumpArgs {
    /// Path to the workbook file.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Omit sheets with no data rows instead of emitting them empty.
    #[arg(long = "exclude-thin-sheets")]
    pub exclude_thin_sheets: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the workbook file.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// JSON schema file declaring the expected columns.
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: PathBuf,

    /// Validate a single sheet by 0-based index instead of the whole
    /// workbook; the schema's per-entry sheet indices are ignored.
    #[arg(long = "sheet", value_name = "N")]
    pub sheet: Option<usize>,

    /// Reject columns present in the workbook but absent from the schema
    /// (default: drop them silently).
    #[arg(long = "strict")]
    pub strict: bool,

    /// Omit sheets with no data rows (whole-workbook mode only).
    #[arg(long = "exclude-thin-sheets")]
    pub exclude_thin_sheets: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
