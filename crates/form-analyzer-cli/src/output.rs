//! Output formatting for analysis results

use console::style;
use form_analyzer::core::display::SequenceDisplay;
use form_analyzer::core::{ResultBundle, ResultView};

use crate::error::{CliError, CliResult};

/// Renders results as human-readable text
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Whether to use colors
    pub use_color: bool,
}

impl TextRenderer {
    /// Create a renderer
    #[must_use]
    pub const fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn heading(&self, text: &str) -> String {
        style(text)
            .bold()
            .cyan()
            .force_styling(self.use_color)
            .to_string()
    }

    fn row(label: &str, value: &str) -> String {
        format!("  {label:<12}{value}\n")
    }

    /// Renders a full result view
    #[must_use]
    pub fn render(&self, view: &ResultView) -> String {
        let mut out = String::new();

        out.push_str(&self.heading(&view.greeting));
        out.push_str("\n\n");

        out.push_str(&self.heading(&format!("Arithmetic (number {})", view.user_number)));
        out.push('\n');
        out.push_str(&Self::row("sum", &view.sum));
        out.push_str(&Self::row("difference", &view.difference));
        out.push_str(&Self::row("product", &view.product));
        out.push_str(&Self::row("quotient", &view.quotient));
        out.push('\n');

        out.push_str(&self.heading(&format!("Strings (\"{}\")", view.original_sentence)));
        out.push('\n');
        out.push_str(&Self::row("uppercase", &view.uppercase));
        out.push_str(&Self::row("lowercase", &view.lowercase));
        out.push('\n');

        out.push_str(&self.heading("Condition"));
        out.push('\n');
        out.push_str(&format!("  {}\n\n", view.classification));

        out.push_str(&self.heading("Sequence"));
        out.push('\n');
        out.push_str(&self.render_sequence(&view.sequence));
        out.push('\n');

        out.push_str(&self.heading(&format!("Tags ({})", view.tag_count)));
        out.push('\n');
        out.push_str(&format!("  {}\n", view.tag_labels.join("  ")));

        out
    }

    fn render_sequence(&self, sequence: &SequenceDisplay) -> String {
        match sequence {
            SequenceDisplay::Empty { message } => {
                format!("  {}\n", style(message).italic().force_styling(self.use_color))
            }
            SequenceDisplay::Numbers { numbers, overflow } => {
                let joined = numbers
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                let mut out = format!("  {joined}\n");
                if let Some(note) = overflow {
                    out.push_str(&format!("  {}\n", style(note).dim().force_styling(self.use_color)));
                }
                out
            }
        }
    }
}

/// Renders the result bundle as pretty JSON
pub fn render_json(bundle: &ResultBundle) -> CliResult<String> {
    serde_json::to_string_pretty(bundle).map_err(|e| CliError::serialization(e.to_string()))
}
