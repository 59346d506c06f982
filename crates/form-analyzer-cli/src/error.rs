//! Error types for the CLI

use form_analyzer::core::AnalyzerError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// The form did not validate
    #[error("{0}")]
    Analyzer(#[from] AnalyzerError),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Output could not be serialized
    #[error("Serialization failed: {message}")]
    Serialization {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use form_analyzer::core::InputField;

    #[test]
    fn test_analyzer_error_passes_through() {
        let err: CliError = AnalyzerError::validation(InputField::Name, "must not be empty").into();
        assert_eq!(err.to_string(), "Invalid name: must not be empty");
    }

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad yaml");
        assert_eq!(err.to_string(), "Configuration error: bad yaml");
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("too many tags");
        assert_eq!(err.to_string(), "Invalid argument: too many tags");
    }

    #[test]
    fn test_serialization_error() {
        let err = CliError::serialization("oops");
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CliError = io.into();
        assert!(matches!(err, CliError::Io(_)));
    }
}
