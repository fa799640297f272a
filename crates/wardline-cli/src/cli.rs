//! CLI argument definitions for wardline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "wardline",
    version,
    about = "Ward-round roster toolkit",
    long_about = "Companion CLI for the ward rounding app.\n\n\
                  Validates roster CSV/TSV imports against the current and legacy\n\
                  templates, classifies lab values against reference ranges, and\n\
                  renders the heuristic round summary."
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
    /// Validate a roster import file and preview its rows.
    Check(CheckArgs),

    /// Classify a labs record against the reference ranges.
    Labs(LabsArgs),

    /// Render the round summary for a patient bundle.
    Summarize(SummarizeArgs),

    /// Write a blank roster template (current schema).
    Template(TemplateArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Roster file to validate (CSV, TSV, or semicolon-delimited).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Fill the Section column of rows that left it blank (legacy imports
    /// never carry one).
    #[arg(long = "section", value_name = "NAME")]
    pub section: Option<String>,

    /// Emit the validated rows as JSON instead of a preview table.
    #[arg(long = "json")]
    pub json: bool,

    /// Preview at most this many data rows.
    #[arg(long = "limit", value_name = "N", default_value_t = 10)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct LabsArgs {
    /// Labs record as a JSON map keyed by catalog names.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct SummarizeArgs {
    /// Patient bundle JSON (patient, esas, ctcae, labs).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Where to write the template (stdout when omitted).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
