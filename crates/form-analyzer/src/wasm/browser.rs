//! Browser WASM bindings for the analyzer
//!
//! The page's script reads the six inputs and hands them to
//! [`BrowserAnalyzer::analyze`]; the returned JSON carries both the raw
//! results and their display texts.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::display::countdown;
use crate::core::{ComputerSettings, RawInput, ResultBundle, ResultComputer, ResultView};

/// Payload returned to the page
#[derive(Debug, Serialize)]
struct AnalysisPayload<'a> {
    bundle: &'a ResultBundle,
    view: &'a ResultView,
}

/// Browser analyzer - the main WASM entry point
#[derive(Debug, Default)]
#[wasm_bindgen]
pub struct BrowserAnalyzer {
    computer: ResultComputer,
    last_json: Option<String>,
}

#[wasm_bindgen]
impl BrowserAnalyzer {
    /// Create an analyzer with base 42 and a sequence cap of 20
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self::default()
    }

    /// Create an analyzer with a custom base value and sequence cap
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(base_number: f64, sequence_cap: u32) -> Self {
        console_error_panic_hook::set_once();
        Self {
            computer: ResultComputer::with_settings(ComputerSettings {
                base_number,
                sequence_cap,
            }),
            last_json: None,
        }
    }

    /// Validate and analyze the six form values
    ///
    /// Returns the results as JSON, or throws the user-facing notice when
    /// validation fails.
    pub fn analyze(
        &mut self,
        name: &str,
        number: &str,
        sentence: &str,
        tag1: &str,
        tag2: &str,
        tag3: &str,
    ) -> Result<String, JsValue> {
        let raw = RawInput::new(name, number, sentence, [tag1, tag2, tag3]);
        let input = raw.validate().map_err(|e| {
            console::warn_1(&e.to_string().into());
            JsValue::from_str(e.notice())
        })?;

        let bundle = self.computer.compute(&input);
        let view = ResultView::from_bundle(&bundle, self.computer.settings().sequence_cap);
        let json = serde_json::to_string(&AnalysisPayload {
            bundle: &bundle,
            view: &view,
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        self.last_json = Some(json.clone());
        Ok(json)
    }

    /// JSON of the last successful analysis, if any
    #[wasm_bindgen(getter, js_name = lastResult)]
    pub fn last_result(&self) -> Option<String> {
        self.last_json.clone()
    }
}

/// Initialize the analyzer in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Form analyzer loaded".into());
    console::log_1(&format!("Base number: {}", crate::core::BASE_NUMBER).into());
    for n in countdown(5) {
        console::debug_1(&n.into());
    }
}
