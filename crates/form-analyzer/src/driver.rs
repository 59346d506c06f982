//! Unified Analyzer Driver
//!
//! Every front end (headless, mock DOM, browser) implements
//! [`AnalyzerDriver`], so one behavioural suite can be run against
//! all of them.

use tracing::debug;

use crate::core::display::ids;
use crate::core::{
    AnalyzerResult, ComputerSettings, InputField, RawInput, ResultComputer, ResultView,
};

/// Abstract driver trait for form interactions
///
/// # Example
///
/// ```rust
/// use form_analyzer::prelude::*;
///
/// fn greet<D: AnalyzerDriver>(driver: &mut D) -> String {
///     driver.fill_all(&RawInput::new("Ada", "7", "Hi", ["a", "b", "c"]));
///     driver.submit().unwrap();
///     driver.result_text("greetingResult").unwrap()
/// }
///
/// assert_eq!(greet(&mut HeadlessDriver::new()), "Hello, Ada!");
/// assert_eq!(greet(&mut WasmDriver::new()), "Hello, Ada!");
/// ```
pub trait AnalyzerDriver {
    /// Types a value into one form field
    fn fill(&mut self, field: InputField, value: &str);

    /// Submits the form, validating and computing
    fn submit(&mut self) -> AnalyzerResult<()>;

    /// Gets the text of a result element
    fn result_text(&self, element_id: &str) -> Option<String>;

    /// Gets the displayed sequence lines
    fn sequence_lines(&self) -> Vec<String>;

    /// Gets the displayed tag chip labels
    fn tag_labels(&self) -> Vec<String>;

    /// Whether the results section is shown
    fn results_visible(&self) -> bool;

    /// The blocking notice from the last failed submission, if any
    fn notice(&self) -> Option<String>;

    /// Clears all fields and results
    fn reset(&mut self);

    /// Fills every field from raw input
    fn fill_all(&mut self, input: &RawInput) {
        for field in InputField::ALL {
            self.fill(field, input.get(field));
        }
    }
}

/// Driver that computes directly, with no DOM in between
#[derive(Debug, Default)]
pub struct HeadlessDriver {
    input: RawInput,
    computer: ResultComputer,
    view: Option<ResultView>,
    notice: Option<String>,
}

impl HeadlessDriver {
    /// Creates a headless driver with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a headless driver with custom computer settings
    #[must_use]
    pub fn with_settings(settings: ComputerSettings) -> Self {
        Self {
            computer: ResultComputer::with_settings(settings),
            ..Self::default()
        }
    }

    /// Returns the current raw input
    #[must_use]
    pub fn input(&self) -> &RawInput {
        &self.input
    }

    /// Returns the last rendered view
    #[must_use]
    pub fn view(&self) -> Option<&ResultView> {
        self.view.as_ref()
    }
}

impl AnalyzerDriver for HeadlessDriver {
    fn fill(&mut self, field: InputField, value: &str) {
        self.input.set(field, value);
    }

    fn submit(&mut self) -> AnalyzerResult<()> {
        match self.input.validate() {
            Ok(bundle) => {
                let result = self.computer.compute(&bundle);
                let cap = self.computer.settings().sequence_cap;
                self.view = Some(ResultView::from_bundle(&result, cap));
                self.notice = None;
                debug!("headless submission rendered");
                Ok(())
            }
            Err(e) => {
                self.notice = Some(e.notice().to_string());
                Err(e)
            }
        }
    }

    fn result_text(&self, element_id: &str) -> Option<String> {
        self.view
            .as_ref()
            .and_then(|v| v.text(element_id))
            .map(str::to_string)
    }

    fn sequence_lines(&self) -> Vec<String> {
        self.view
            .as_ref()
            .map(|v| v.sequence.lines())
            .unwrap_or_default()
    }

    fn tag_labels(&self) -> Vec<String> {
        self.view
            .as_ref()
            .map(|v| v.tag_labels.clone())
            .unwrap_or_default()
    }

    fn results_visible(&self) -> bool {
        self.view.is_some()
    }

    fn notice(&self) -> Option<String> {
        self.notice.clone()
    }

    fn reset(&mut self) {
        self.input = RawInput::default();
        self.view = None;
        self.notice = None;
    }
}

// ===== Unified Test Specifications =====
// These work with ANY AnalyzerDriver implementation

fn submit_ok<D: AnalyzerDriver>(driver: &mut D, input: &RawInput) {
    driver.reset();
    driver.fill_all(input);
    let result = driver.submit();
    assert!(result.is_ok(), "submission rejected: {result:?}");
}

fn text<D: AnalyzerDriver>(driver: &D, id: &str) -> String {
    driver.result_text(id).unwrap_or_default()
}

/// Verifies the reference submission end to end
pub fn verify_reference_submission<D: AnalyzerDriver>(driver: &mut D) {
    submit_ok(
        driver,
        &RawInput::new("Ada", "7", "Hi There", ["apple", "pear", "fig"]),
    );

    assert!(driver.results_visible());
    assert_eq!(text(driver, ids::USER_NUMBER), "7");
    assert_eq!(text(driver, ids::SUM), "49");
    assert_eq!(text(driver, ids::DIFFERENCE), "35");
    assert_eq!(text(driver, ids::PRODUCT), "294");
    assert_eq!(text(driver, ids::QUOTIENT), "6.00");
    assert_eq!(text(driver, ids::ORIGINAL_SENTENCE), "Hi There");
    assert_eq!(text(driver, ids::UPPERCASE), "HI THERE");
    assert_eq!(text(driver, ids::LOWERCASE), "hi there");
    assert_eq!(text(driver, ids::IF_RESULT), "The number is positive");
    assert_eq!(text(driver, ids::TERNARY_RESULT), "The number is positive");
    assert_eq!(
        driver.sequence_lines(),
        (1..=7).map(|n: u32| n.to_string()).collect::<Vec<_>>()
    );
    assert_eq!(text(driver, ids::GREETING), "Hello, Ada!");
    assert_eq!(driver.tag_labels(), vec!["🍎 apple", "🍎 pear", "🍎 fig"]);
    assert_eq!(text(driver, ids::TAG_COUNT), "3");
}

/// Verifies that zero divides to the sentinel and classifies as zero
pub fn verify_zero_sentinel<D: AnalyzerDriver>(driver: &mut D) {
    submit_ok(driver, &RawInput::new("Bo", "0", "x", ["a", "b", "c"]));

    assert_eq!(text(driver, ids::QUOTIENT), "∞");
    assert_eq!(text(driver, ids::SUM), "42");
    assert_eq!(text(driver, ids::PRODUCT), "0");
    assert_eq!(text(driver, ids::IF_RESULT), "The number is zero");
    assert_eq!(
        driver.sequence_lines(),
        vec![crate::core::display::EMPTY_SEQUENCE_MESSAGE]
    );
}

/// Verifies the sequence display rules: cap, overflow note and negative override
pub fn verify_sequence_display<D: AnalyzerDriver>(driver: &mut D) {
    submit_ok(driver, &RawInput::new("Cy", "25", "x", ["a", "b", "c"]));
    let lines = driver.sequence_lines();
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[19], "20");
    assert_eq!(lines[20], "... and 5 more numbers");

    submit_ok(driver, &RawInput::new("Cy", "-3", "x", ["a", "b", "c"]));
    assert_eq!(
        driver.sequence_lines(),
        vec![crate::core::display::EMPTY_SEQUENCE_MESSAGE]
    );
    assert_eq!(text(driver, ids::IF_RESULT), "The number is negative");
}

/// Verifies the validation gate: no results, a notice and an error
pub fn verify_validation_gate<D: AnalyzerDriver>(driver: &mut D) {
    driver.reset();
    driver.fill_all(&RawInput::new("Ada", "seven", "Hi", ["a", "b", "c"]));
    let result = driver.submit();
    assert!(matches!(
        result,
        Err(crate::core::AnalyzerError::Validation {
            field: InputField::Number,
            ..
        })
    ));
    assert!(!driver.results_visible());
    assert_eq!(
        driver.notice().as_deref(),
        Some(crate::core::VALIDATION_NOTICE)
    );

    driver.reset();
    driver.fill_all(&RawInput::new("Ada", "7", "Hi", ["a", "  ", "c"]));
    assert!(driver.submit().is_err());
    assert!(!driver.results_visible());
}

/// Complete verification suite
pub fn run_full_specification<D: AnalyzerDriver>(driver: &mut D) {
    verify_reference_submission(driver);
    verify_zero_sentinel(driver);
    verify_sequence_display(driver);
    verify_validation_gate(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_full_specification() {
        let mut driver = HeadlessDriver::new();
        run_full_specification(&mut driver);
    }

    #[test]
    fn test_headless_initial_state() {
        let driver = HeadlessDriver::new();
        assert!(!driver.results_visible());
        assert!(driver.notice().is_none());
        assert!(driver.sequence_lines().is_empty());
        assert!(driver.tag_labels().is_empty());
        assert_eq!(driver.result_text(ids::SUM), None);
    }

    #[test]
    fn test_headless_fill_tracks_input() {
        let mut driver = HeadlessDriver::new();
        driver.fill(InputField::Sentence, "hello");
        assert_eq!(driver.input().sentence, "hello");
    }

    #[test]
    fn test_headless_success_clears_notice() {
        let mut driver = HeadlessDriver::new();
        assert!(driver.submit().is_err());
        assert!(driver.notice().is_some());

        driver.fill_all(&RawInput::new("Ada", "1", "s", ["a", "b", "c"]));
        driver.submit().unwrap();
        assert!(driver.notice().is_none());
        assert!(driver.view().is_some());
    }

    #[test]
    fn test_headless_failure_keeps_previous_results() {
        let mut driver = HeadlessDriver::new();
        driver.fill_all(&RawInput::new("Ada", "2", "s", ["a", "b", "c"]));
        driver.submit().unwrap();

        driver.fill(InputField::Name, "");
        assert!(driver.submit().is_err());
        assert_eq!(driver.result_text(ids::SUM).as_deref(), Some("44"));
    }

    #[test]
    fn test_headless_custom_settings() {
        let mut driver = HeadlessDriver::with_settings(ComputerSettings {
            base_number: 100.0,
            sequence_cap: 2,
        });
        driver.fill_all(&RawInput::new("Ada", "4", "s", ["a", "b", "c"]));
        driver.submit().unwrap();
        assert_eq!(driver.result_text(ids::SUM).as_deref(), Some("104"));
        assert_eq!(
            driver.sequence_lines(),
            vec!["1", "2", "... and 2 more numbers"]
        );
    }
}
