//! WASM front end for the analyzer
//!
//! The mock DOM, presenter and driver are always compiled so the page
//! behaviour can be tested natively. The real browser binding needs the
//! `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod presenter;

#[cfg(feature = "wasm")]
pub use browser::BrowserAnalyzer;
pub use dom::{DomElement, DomEvent, MockDom, FOCUS_BORDER, FOCUS_SHADOW, IDLE_BORDER};
pub use driver::WasmDriver;
pub use presenter::Presenter;
