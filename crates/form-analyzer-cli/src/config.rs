//! CLI configuration
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional YAML file, then command-line flags.

use std::path::Path;

use form_analyzer::core::ComputerSettings;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - debug logs
    Verbose,
    /// Debug - trace logs
    Debug,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn log_filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// The result bundle as JSON
    Json,
}

/// Contents of the YAML configuration file
///
/// Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output format
    pub format: Option<OutputFormat>,
    /// Color choice
    pub color: Option<ColorChoice>,
    /// Computer settings (`base_number`, `sequence_cap`)
    #[serde(flatten)]
    pub computer: ComputerSettings,
}

impl FileConfig {
    /// Parses YAML text
    pub fn from_yaml(yaml: &str) -> CliResult<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| CliError::config(e.to_string()))
    }

    /// Loads a YAML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_yaml(&text)?;
        debug!(path = %path.display(), ?config, "loaded configuration file");
        Ok(config)
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Output format
    pub format: OutputFormat,
    /// Computer settings
    pub computer: ComputerSettings,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CliConfig {
    /// Create default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            format: OutputFormat::Text,
            computer: ComputerSettings::default(),
        }
    }

    /// Applies values from a configuration file
    #[must_use]
    pub fn with_file(mut self, file: FileConfig) -> Self {
        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        self.computer = file.computer;
        self
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Renders the configuration as YAML
    pub fn to_yaml(&self) -> CliResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| CliError::serialization(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod verbosity_tests {
        use super::*;

        #[test]
        fn test_default_verbosity() {
            assert_eq!(Verbosity::default(), Verbosity::Normal);
        }

        #[test]
        fn test_from_flags() {
            assert_eq!(Verbosity::from_flags(true, 3), Verbosity::Quiet);
            assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
            assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
            assert_eq!(Verbosity::from_flags(false, 2), Verbosity::Debug);
            assert_eq!(Verbosity::from_flags(false, 9), Verbosity::Debug);
        }

        #[test]
        fn test_is_quiet() {
            assert!(Verbosity::Quiet.is_quiet());
            assert!(!Verbosity::Normal.is_quiet());
        }

        #[test]
        fn test_log_filter() {
            assert_eq!(Verbosity::Normal.log_filter(), "warn");
            assert_eq!(Verbosity::Verbose.log_filter(), "debug");
            assert_eq!(Verbosity::Debug.log_filter(), "trace");
            assert_eq!(Verbosity::Quiet.log_filter(), "error");
        }
    }

    mod color_tests {
        use super::*;

        #[test]
        fn test_explicit_choices() {
            assert!(ColorChoice::Always.should_color());
            assert!(!ColorChoice::Never.should_color());
        }
    }

    mod file_config_tests {
        use super::*;

        #[test]
        fn test_empty_yaml_uses_defaults() {
            let file = FileConfig::from_yaml("{}").unwrap();
            assert_eq!(file, FileConfig::default());
            assert_eq!(file.computer.base_number, 42.0);
            assert_eq!(file.computer.sequence_cap, 20);
        }

        #[test]
        fn test_full_yaml() {
            let yaml = "format: json\ncolor: never\nbase_number: 10\nsequence_cap: 5\n";
            let file = FileConfig::from_yaml(yaml).unwrap();
            assert_eq!(file.format, Some(OutputFormat::Json));
            assert_eq!(file.color, Some(ColorChoice::Never));
            assert_eq!(file.computer.base_number, 10.0);
            assert_eq!(file.computer.sequence_cap, 5);
        }

        #[test]
        fn test_invalid_yaml() {
            let err = FileConfig::from_yaml("format: [1, 2").unwrap_err();
            assert!(matches!(err, CliError::Config { .. }));
        }

        #[test]
        fn test_unknown_format() {
            assert!(FileConfig::from_yaml("format: xml").is_err());
        }

        #[test]
        fn test_load_missing_file() {
            let err = FileConfig::load(Path::new("/nonexistent/form-analyzer.yaml")).unwrap_err();
            assert!(err.to_string().contains("cannot read"));
        }

        #[test]
        fn test_load_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("form-analyzer.yaml");
            std::fs::write(&path, "sequence_cap: 3\n").unwrap();
            let file = FileConfig::load(&path).unwrap();
            assert_eq!(file.computer.sequence_cap, 3);
            assert_eq!(file.format, None);
        }
    }

    mod cli_config_tests {
        use super::*;

        #[test]
        fn test_default_config() {
            let config = CliConfig::default();
            assert_eq!(config.verbosity, Verbosity::Normal);
            assert_eq!(config.color, ColorChoice::Auto);
            assert_eq!(config.format, OutputFormat::Text);
            assert_eq!(config.computer, ComputerSettings::default());
        }

        #[test]
        fn test_builder_chain() {
            let config = CliConfig::new()
                .with_verbosity(Verbosity::Debug)
                .with_color(ColorChoice::Never)
                .with_format(OutputFormat::Json);
            assert_eq!(config.verbosity, Verbosity::Debug);
            assert_eq!(config.color, ColorChoice::Never);
            assert_eq!(config.format, OutputFormat::Json);
        }

        #[test]
        fn test_with_file_overrides_only_present_keys() {
            let file = FileConfig {
                format: Some(OutputFormat::Json),
                color: None,
                computer: ComputerSettings {
                    base_number: 7.0,
                    sequence_cap: 20,
                },
            };
            let config = CliConfig::new()
                .with_color(ColorChoice::Never)
                .with_file(file);
            assert_eq!(config.format, OutputFormat::Json);
            assert_eq!(config.color, ColorChoice::Never);
            assert_eq!(config.computer.base_number, 7.0);
        }

        #[test]
        fn test_to_yaml() {
            let yaml = CliConfig::new().to_yaml().unwrap();
            assert!(yaml.contains("format: text"));
            assert!(yaml.contains("base_number: 42"));
            assert!(yaml.contains("sequence_cap: 20"));
        }
    }
}
