//! Form Analyzer
//!
//! Takes six form values (a name, a number, a sentence and three tags) and
//! derives a bundle of display results from them: arithmetic against a base
//! value of 42, upper/lower-case forms of the sentence, the sign of the
//! number, a bounded counting sequence, a greeting and the tag count.
//!
//! The computation is pure. Front ends own all platform state:
//!
//! - [`driver::HeadlessDriver`]: direct computation, no DOM
//! - [`wasm::WasmDriver`]: the analyzer page over a mock DOM
//! - `wasm::BrowserAnalyzer` (feature `wasm`): the real browser binding
//!
//! # Example
//!
//! ```rust
//! use form_analyzer::prelude::*;
//!
//! let input = RawInput::new("Ada", "7", "Hi There", ["apple", "pear", "fig"])
//!     .validate()
//!     .unwrap();
//! let bundle = ResultComputer::new().compute(&input);
//!
//! assert_eq!(bundle.arithmetic.sum, 49.0);
//! assert_eq!(bundle.arithmetic.quotient.to_string(), "6.00");
//! assert_eq!(bundle.greeting, "Hello, Ada!");
//!
//! // Blank fields never reach the computer
//! let blank = RawInput::new("", "7", "Hi", ["a", "b", "c"]);
//! assert!(blank.validate().is_err());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::display::{format_number, to_fixed, SequenceDisplay};
    pub use crate::core::{
        AnalyzerError, AnalyzerResult, ArithmeticResult, Classification, ComputerSettings,
        ConditionResult, InputBundle, InputField, Quotient, RawInput, ResultBundle,
        ResultComputer, ResultView, SequenceResult, StringResult,
    };
    pub use crate::driver::{AnalyzerDriver, HeadlessDriver};

    pub use crate::wasm::{DomElement, DomEvent, MockDom, Presenter, WasmDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let input = RawInput::new("Ada", "2", "ab", ["x", "y", "z"])
            .validate()
            .unwrap();
        let bundle = ResultComputer::new().compute(&input);
        assert_eq!(bundle.arithmetic.product, 84.0);
    }

    #[test]
    fn test_reference_scenario() {
        let input = RawInput::new("Ada", "7", "Hi There", ["apple", "pear", "fig"])
            .validate()
            .unwrap();
        let bundle = ResultComputer::new().compute(&input);

        assert_eq!(bundle.arithmetic.sum, 49.0);
        assert_eq!(bundle.arithmetic.difference, 35.0);
        assert_eq!(bundle.arithmetic.product, 294.0);
        assert_eq!(bundle.arithmetic.quotient.to_string(), "6.00");
        assert_eq!(bundle.strings.uppercase, "HI THERE");
        assert_eq!(bundle.strings.lowercase, "hi there");
        assert_eq!(bundle.condition.classification, Classification::Positive);
        assert_eq!(bundle.sequence.numbers(), &[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(bundle.greeting, "Hello, Ada!");
        assert_eq!(bundle.tag_count, 3);
    }

    #[test]
    fn test_validation_scenario() {
        let cases = [
            RawInput::new("", "7", "Hi", ["a", "b", "c"]),
            RawInput::new("Ada", "", "Hi", ["a", "b", "c"]),
            RawInput::new("Ada", "x7", "Hi", ["a", "b", "c"]),
            RawInput::new("Ada", "7", " ", ["a", "b", "c"]),
            RawInput::new("Ada", "7", "Hi", ["a", "b", ""]),
        ];
        for raw in cases {
            assert!(matches!(
                raw.validate(),
                Err(AnalyzerError::Validation { .. })
            ));
        }
    }

    #[test]
    fn test_both_front_ends_agree() {
        let raw = RawInput::new("Ada", "-2.5", "MiXeD", ["a", "b", "c"]);
        let mut headless = HeadlessDriver::new();
        let mut wasm = WasmDriver::new();
        headless.fill_all(&raw);
        wasm.fill_all(&raw);
        headless.submit().unwrap();
        wasm.submit().unwrap();

        for (id, _) in headless.view().unwrap().text_entries() {
            assert_eq!(headless.result_text(id), wasm.result_text(id), "{id}");
        }
        assert_eq!(headless.sequence_lines(), wasm.sequence_lines());
        assert_eq!(headless.tag_labels(), wasm.tag_labels());
    }
}
