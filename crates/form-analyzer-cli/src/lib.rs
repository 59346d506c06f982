//! Form Analyzer CLI Library
//!
//! Command-line front end for the form analyzer: analyze the six form
//! values, print the countdown, or show the effective configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{AnalyzeArgs, Cli, ColorArg, Commands, CountdownArgs, FormatArg};
pub use config::{CliConfig, ColorChoice, FileConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render_json, TextRenderer};
