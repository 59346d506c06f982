//! WASM Driver - mock-DOM front end
//!
//! Simulates a user on the analyzer page: typing into inputs, clicking the
//! analyze button or pressing Enter. Implements [`AnalyzerDriver`] so the
//! unified specifications run against it unchanged.

use tracing::{debug, trace};

use super::dom::{DomEvent, MockDom};
use super::presenter::Presenter;
use crate::core::display::ids;
use crate::core::{
    AnalyzerResult, ComputerSettings, InputField, RawInput, ResultComputer, ResultView,
};
use crate::driver::AnalyzerDriver;

/// WASM driver wrapping the computer and a mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    computer: ResultComputer,
    dom: MockDom,
    notices: Vec<String>,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over a fresh analyzer page
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(ComputerSettings::default())
    }

    /// Creates a driver with custom computer settings
    #[must_use]
    pub fn with_settings(settings: ComputerSettings) -> Self {
        Self {
            computer: ResultComputer::with_settings(settings),
            dom: MockDom::analyzer(),
            notices: Vec::new(),
        }
    }

    /// Returns the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the DOM mutably
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Every blocking notice shown so far, oldest first
    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Focuses an input, types `value` and moves focus away
    pub fn type_into(&mut self, field: InputField, value: &str) {
        let id = field.element_id();
        self.dom.dispatch_event(DomEvent::focus(id));
        self.dom.dispatch_event(DomEvent::input(id, value));
        self.dom.dispatch_event(DomEvent::blur(id));
    }

    /// Clicks the analyze button
    pub fn click_analyze(&mut self) -> AnalyzerResult<()> {
        self.dispatch(DomEvent::click(ids::ANALYZE_BUTTON))
            .unwrap_or(Ok(()))
    }

    /// Presses a key; only Enter triggers an analysis
    ///
    /// Returns `None` if the key did nothing.
    pub fn press_key(&mut self, key: &str) -> Option<AnalyzerResult<()>> {
        self.dispatch(DomEvent::key_press(key))
    }

    /// Dispatches an event and runs the analysis if the event triggers one
    pub fn dispatch(&mut self, event: DomEvent) -> Option<AnalyzerResult<()>> {
        let triggers = event.triggers_analysis();
        trace!(?event, triggers, "dispatching DOM event");
        self.dom.dispatch_event(event);
        triggers.then(|| self.analyze())
    }

    fn read_form(&self) -> RawInput {
        let mut raw = RawInput::default();
        for field in InputField::ALL {
            raw.set(
                field,
                self.dom.input_value(field.element_id()).unwrap_or_default(),
            );
        }
        raw
    }

    fn analyze(&mut self) -> AnalyzerResult<()> {
        let bundle = match self.read_form().validate() {
            Ok(bundle) => bundle,
            Err(e) => {
                self.notices.push(e.notice().to_string());
                return Err(e);
            }
        };
        let result = self.computer.compute(&bundle);
        let view = ResultView::from_bundle(&result, self.computer.settings().sequence_cap);
        Presenter::render(&mut self.dom, &view);
        debug!("results rendered into page");
        Ok(())
    }
}

impl AnalyzerDriver for WasmDriver {
    fn fill(&mut self, field: InputField, value: &str) {
        self.type_into(field, value);
    }

    fn submit(&mut self) -> AnalyzerResult<()> {
        self.click_analyze()
    }

    fn result_text(&self, element_id: &str) -> Option<String> {
        if !self.results_visible() {
            return None;
        }
        self.dom.get_element_text(element_id).map(str::to_string)
    }

    fn sequence_lines(&self) -> Vec<String> {
        self.dom
            .get_element(ids::SEQUENCE)
            .map(|e| e.child_texts())
            .unwrap_or_default()
    }

    fn tag_labels(&self) -> Vec<String> {
        self.dom
            .get_element(ids::TAGS)
            .map(|e| e.child_texts())
            .unwrap_or_default()
    }

    fn results_visible(&self) -> bool {
        self.dom.is_visible(ids::RESULTS_SECTION)
    }

    fn notice(&self) -> Option<String> {
        self.notices.last().cloned()
    }

    fn reset(&mut self) {
        self.dom = MockDom::analyzer();
        self.notices.clear();
    }
}
