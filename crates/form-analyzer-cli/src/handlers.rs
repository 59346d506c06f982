//! Command handlers
//!
//! Each handler returns the text to print so `main` owns stdout.

use form_analyzer::core::display::countdown;
use form_analyzer::core::{RawInput, ResultComputer, ResultView};
use tracing::{debug, info};

use crate::commands::{AnalyzeArgs, CountdownArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::{render_json, TextRenderer};

/// Number of tag fields on the form
const TAG_FIELDS: usize = 3;

/// Builds raw form input from the analyze arguments
///
/// Fewer than three tags are padded with blanks so validation reports the
/// first missing one. More than three is an argument error.
pub fn raw_input(args: &AnalyzeArgs) -> CliResult<RawInput> {
    if args.tags.len() > TAG_FIELDS {
        return Err(CliError::invalid_argument(format!(
            "expected at most {TAG_FIELDS} tags, got {}",
            args.tags.len()
        )));
    }
    let tag = |i: usize| args.tags.get(i).map_or("", String::as_str);
    Ok(RawInput::new(
        args.name.as_str(),
        args.number.as_str(),
        args.sentence.as_str(),
        [tag(0), tag(1), tag(2)],
    ))
}

/// Runs the analyze command
pub fn run_analyze(config: &CliConfig, args: &AnalyzeArgs) -> CliResult<String> {
    let raw = raw_input(args)?;
    let input = raw.validate()?;

    let computer = ResultComputer::with_settings(config.computer);
    let bundle = computer.compute(&input);
    info!(number = bundle.number, "analysis complete");

    let format = args.format.map_or(config.format, Into::into);
    match format {
        OutputFormat::Json => render_json(&bundle),
        OutputFormat::Text => {
            let view = ResultView::from_bundle(&bundle, config.computer.sequence_cap);
            Ok(TextRenderer::new(config.color.should_color()).render(&view))
        }
    }
}

/// Runs the countdown command
#[must_use]
pub fn run_countdown(args: &CountdownArgs) -> String {
    countdown(args.from)
        .inspect(|n| debug!(value = n, "countdown"))
        .map(|n| format!("{n}\n"))
        .collect()
}

/// Runs the config command
pub fn run_config(config: &CliConfig) -> CliResult<String> {
    config.to_yaml()
}
