//! form-analyzer: analyze six form values from the command line
//!
//! ## Usage
//!
//! ```bash
//! form-analyzer analyze --name Ada --number 7 --sentence "Hi There" \
//!     --tag apple --tag pear --tag fig
//! form-analyzer analyze ... --format json
//! form-analyzer countdown --from 3
//! form-analyzer --config form-analyzer.yaml config
//! ```

use clap::Parser;
use form_analyzer_cli::{
    handlers, logging, Cli, CliConfig, CliResult, ColorChoice, Commands, FileConfig, Verbosity,
};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    logging::init(verbosity);
    debug!(verbosity = ?verbosity, "form-analyzer started");

    let config = build_config(&cli, verbosity)?;

    let output = match &cli.command {
        Commands::Analyze(args) => handlers::run_analyze(&config, args)?,
        Commands::Countdown(args) => handlers::run_countdown(args),
        Commands::Config => handlers::run_config(&config)?,
    };

    if !config.verbosity.is_quiet() {
        print!("{output}");
    }
    Ok(())
}

fn build_config(cli: &Cli, verbosity: Verbosity) -> CliResult<CliConfig> {
    let mut config = CliConfig::new();
    if let Some(path) = &cli.config {
        config = config.with_file(FileConfig::load(path)?);
    }
    if let Some(color) = cli.color {
        config = config.with_color(ColorChoice::from(color));
    }
    Ok(config.with_verbosity(verbosity))
}
