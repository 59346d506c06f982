//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{ColorChoice, OutputFormat};

/// Form analyzer: arithmetic, case transforms and sequences from six form values
#[derive(Parser, Debug)]
#[command(name = "form-analyzer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// YAML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze the six form values
    Analyze(AnalyzeArgs),

    /// Print a countdown to zero
    Countdown(CountdownArgs),

    /// Show the effective configuration
    Config,
}

/// Arguments for the analyze command
///
/// Missing fields default to empty and are rejected by validation, the same
/// way a blank form field is.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Your name
    #[arg(long, default_value = "")]
    pub name: String,

    /// A number (leading numeric text is used, e.g. "12px" reads as 12)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub number: String,

    /// A sentence to case-fold
    #[arg(long, default_value = "")]
    pub sentence: String,

    /// A tag; give exactly three
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Output format (overrides the configuration file)
    #[arg(short, long)]
    pub format: Option<FormatArg>,
}

/// Arguments for the countdown command
#[derive(Parser, Debug)]
pub struct CountdownArgs {
    /// Starting value
    #[arg(long, default_value = "5")]
    pub from: u32,
}

/// Color argument for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorArg {
    /// Always use colors
    Always,
    /// Auto-detect
    Auto,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Always => Self::Always,
            ColorArg::Auto => Self::Auto,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
