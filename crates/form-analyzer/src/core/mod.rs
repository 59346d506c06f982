//! Core form analysis: validation, computation and display formatting
//!
//! Everything in here is platform-neutral. Front ends (mock DOM, browser,
//! CLI) hand plain values in and get plain values back.

mod computer;
pub mod display;
mod input;

pub use computer::{
    ArithmeticResult, Classification, ComputerSettings, ConditionResult, Quotient, ResultBundle,
    ResultComputer, SequenceResult, StringResult,
};
pub use display::{ResultView, SequenceDisplay};
pub use input::{parse_leading_float, InputBundle, InputField, RawInput};

use thiserror::Error;

/// Base value every arithmetic operation is combined with
pub const BASE_NUMBER: f64 = 42.0;

/// Largest value the generated sequence counts up to
pub const SEQUENCE_CAP: u32 = 20;

/// Notice shown to the user when the form does not validate
pub const VALIDATION_NOTICE: &str = "Please fill in all fields with valid data.";

/// Result type for analyzer operations
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Analyzer error types
///
/// Validation is the only failure mode: every transform downstream of the
/// gate is total over validated input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerError {
    /// A form field was blank or the number did not parse
    #[error("Invalid {field}: {reason}")]
    Validation {
        /// The first offending field
        field: InputField,
        /// What was wrong with it
        reason: String,
    },
}

impl AnalyzerError {
    /// Creates a validation error for a field
    #[must_use]
    pub fn validation(field: InputField, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the field that failed validation
    #[must_use]
    pub const fn field(&self) -> InputField {
        match self {
            Self::Validation { field, .. } => *field,
        }
    }

    /// Returns the blocking notice shown to the user
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        VALIDATION_NOTICE
    }
}
