//! Presenter: writes a rendered result view into the page
//!
//! This is the only place that knows how results map onto elements. The
//! computation side never touches the DOM.

use super::dom::{DomElement, MockDom};
use crate::core::display::{ids, SequenceDisplay};
use crate::core::ResultView;

/// Muted text colour of the empty-sequence placeholder
const PLACEHOLDER_COLOR: &str = "#6b7280";

/// Writes result views into a [`MockDom`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter;

impl Presenter {
    /// Renders every result element and reveals the results section
    pub fn render(dom: &mut MockDom, view: &ResultView) {
        for (id, text) in view.text_entries() {
            dom.set_element_text(id, text);
        }
        Self::render_sequence(dom, &view.sequence);
        Self::render_tags(dom, &view.tag_labels);
        dom.set_visible(ids::RESULTS_SECTION, true);
    }

    /// Replaces the sequence container's children
    pub fn render_sequence(dom: &mut MockDom, sequence: &SequenceDisplay) {
        dom.clear_children(ids::SEQUENCE);
        match sequence {
            SequenceDisplay::Empty { message } => {
                let placeholder = DomElement::new("div")
                    .with_text(message)
                    .with_style("color", PLACEHOLDER_COLOR)
                    .with_style("font-style", "italic");
                dom.append_child(ids::SEQUENCE, placeholder);
            }
            SequenceDisplay::Numbers { numbers, overflow } => {
                for n in numbers {
                    dom.append_child(
                        ids::SEQUENCE,
                        DomElement::new("div").with_text(&n.to_string()),
                    );
                }
                if let Some(note) = overflow {
                    dom.append_child(
                        ids::SEQUENCE,
                        DomElement::new("div").with_text(note).with_class("ellipsis"),
                    );
                }
            }
        }
    }

    /// Replaces the tag container's children with one chip per tag
    pub fn render_tags(dom: &mut MockDom, labels: &[String]) {
        dom.clear_children(ids::TAGS);
        for label in labels {
            dom.append_child(
                ids::TAGS,
                DomElement::new("span")
                    .with_text(label)
                    .with_class("fruit-tag"),
            );
        }
    }
}
