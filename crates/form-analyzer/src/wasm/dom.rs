//! Mock DOM for the analyzer page
//!
//! A flat, id-indexed model of the form page. It is enough to exercise the
//! presenter and event wiring without a browser.

use std::collections::HashMap;

use crate::core::display::ids;
use crate::core::InputField;

/// Border colour of a focused input
pub const FOCUS_BORDER: &str = "#059669";
/// Box shadow of a focused input
pub const FOCUS_SHADOW: &str = "0 0 0 3px rgba(5, 150, 105, 0.1)";
/// Border colour of an idle input
pub const IDLE_BORDER: &str = "#d1d5db";

/// A DOM element
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID (may be empty)
    pub id: String,
    /// Tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Attributes, including `value` for inputs
    pub attributes: HashMap<String, String>,
    /// Inline style properties
    pub style: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Whether the element is displayed
    pub visible: bool,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates an element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            style: HashMap::new(),
            classes: Vec::new(),
            visible: true,
            children: Vec::new(),
        }
    }

    /// Sets the id
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets an inline style property
    #[must_use]
    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.set_style(property, value);
        self
    }

    /// Starts hidden
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Sets an inline style property
    pub fn set_style(&mut self, property: &str, value: &str) {
        self.style.insert(property.to_string(), value.to_string());
    }

    /// Gets an inline style property
    #[must_use]
    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Adds a class if not already present
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks for a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Text of each child, in order
    #[must_use]
    pub fn child_texts(&self) -> Vec<String> {
        self.children
            .iter()
            .map(|c| c.text_content.clone())
            .collect()
    }
}

/// Events the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// Target element id
        element_id: String,
    },
    /// New value typed into an input
    Input {
        /// Target element id
        element_id: String,
        /// The new value
        value: String,
    },
    /// Key press anywhere on the page
    KeyPress {
        /// Key name, e.g. `"Enter"`
        key: String,
    },
    /// Input gained focus
    Focus {
        /// Target element id
        element_id: String,
    },
    /// Input lost focus
    Blur {
        /// Target element id
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates an input event
    #[must_use]
    pub fn input(element_id: &str, value: &str) -> Self {
        Self::Input {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a key press event
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::KeyPress {
            key: key.to_string(),
        }
    }

    /// Creates a focus event
    #[must_use]
    pub fn focus(element_id: &str) -> Self {
        Self::Focus {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a blur event
    #[must_use]
    pub fn blur(element_id: &str) -> Self {
        Self::Blur {
            element_id: element_id.to_string(),
        }
    }

    /// Whether this event should trigger an analysis
    #[must_use]
    pub fn triggers_analysis(&self) -> bool {
        match self {
            Self::Click { element_id } => element_id == ids::ANALYZE_BUTTON,
            Self::KeyPress { key } => key == "Enter",
            _ => false,
        }
    }
}

/// Mock DOM holding the analyzer page
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
    focused_element: Option<String>,
}

impl MockDom {
    /// Creates an empty DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the analyzer page: six inputs, the analyze button and the
    /// (hidden) results section
    #[must_use]
    pub fn analyzer() -> Self {
        let mut dom = Self::new();

        for field in InputField::ALL {
            let kind = if field == InputField::Number {
                "number"
            } else {
                "text"
            };
            dom.register_element(
                DomElement::new("input")
                    .with_id(field.element_id())
                    .with_attr("type", kind)
                    .with_attr("value", "")
                    .with_style("border-color", IDLE_BORDER),
            );
        }

        dom.register_element(
            DomElement::new("button")
                .with_id(ids::ANALYZE_BUTTON)
                .with_text("Analyze"),
        );
        dom.register_element(
            DomElement::new("section")
                .with_id(ids::RESULTS_SECTION)
                .hidden(),
        );

        for id in [
            ids::USER_NUMBER,
            ids::SUM,
            ids::DIFFERENCE,
            ids::PRODUCT,
            ids::QUOTIENT,
            ids::ORIGINAL_SENTENCE,
            ids::UPPERCASE,
            ids::LOWERCASE,
            ids::IF_RESULT,
            ids::TERNARY_RESULT,
            ids::GREETING,
            ids::TAG_COUNT,
        ] {
            dom.register_element(DomElement::new("span").with_id(id));
        }
        dom.register_element(DomElement::new("div").with_id(ids::SEQUENCE));
        dom.register_element(DomElement::new("div").with_id(ids::TAGS));

        dom
    }

    /// Registers an element under its id; elements without an id are ignored
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by id
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by id
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Dispatches an event, applying its default effect
    ///
    /// Input events update the `value` attribute. Focus and blur swap the
    /// input styling. Clicks and key presses are only recorded; acting on
    /// them is the driver's job.
    pub fn dispatch_event(&mut self, event: DomEvent) {
        match &event {
            DomEvent::Input { element_id, value } => {
                if let Some(elem) = self.elements.get_mut(element_id) {
                    elem.attributes.insert("value".to_string(), value.clone());
                }
            }
            DomEvent::Focus { element_id } => {
                if let Some(elem) = self.elements.get_mut(element_id) {
                    elem.set_style("border-color", FOCUS_BORDER);
                    elem.set_style("box-shadow", FOCUS_SHADOW);
                }
                self.focused_element = Some(element_id.clone());
            }
            DomEvent::Blur { element_id } => {
                if let Some(elem) = self.elements.get_mut(element_id) {
                    elem.set_style("border-color", IDLE_BORDER);
                    elem.set_style("box-shadow", "none");
                }
                if self.focused_element.as_deref() == Some(element_id.as_str()) {
                    self.focused_element = None;
                }
            }
            DomEvent::Click { .. } | DomEvent::KeyPress { .. } => {}
        }
        self.event_history.push(event);
    }

    /// Events dispatched so far
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Currently focused element id
    #[must_use]
    pub fn focused_element(&self) -> Option<&str> {
        self.focused_element.as_deref()
    }

    /// Value of an input element
    #[must_use]
    pub fn input_value(&self, id: &str) -> Option<&str> {
        self.get_element(id).and_then(|e| e.get_attr("value"))
    }

    /// Sets element text by id
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by id
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Shows or hides an element
    pub fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.visible = visible;
        }
    }

    /// Whether an element exists and is visible
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.visible)
    }

    /// Appends a child to a parent element
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child);
        }
    }

    /// Removes all children of an element
    pub fn clear_children(&mut self, id: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.children.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement =====

    #[test]
    fn test_dom_element_builder() {
        let elem = DomElement::new("input")
            .with_id("userName")
            .with_attr("type", "text")
            .with_class("field")
            .with_style("border-color", IDLE_BORDER);
        assert_eq!(elem.id, "userName");
        assert_eq!(elem.get_attr("type"), Some("text"));
        assert!(elem.has_class("field"));
        assert_eq!(elem.get_style("border-color"), Some(IDLE_BORDER));
        assert!(elem.visible);
    }

    #[test]
    fn test_dom_element_default_is_div() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_dom_element_add_class_dedupes() {
        let mut elem = DomElement::new("span").with_class("fruit-tag");
        elem.add_class("fruit-tag");
        assert_eq!(elem.classes.len(), 1);
    }

    #[test]
    fn test_dom_element_hidden() {
        assert!(!DomElement::new("section").hidden().visible);
    }

    #[test]
    fn test_child_texts() {
        let mut elem = DomElement::new("div");
        elem.children.push(DomElement::new("div").with_text("1"));
        elem.children.push(DomElement::new("div").with_text("2"));
        assert_eq!(elem.child_texts(), vec!["1", "2"]);
    }

    // ===== DomEvent =====

    #[test]
    fn test_event_triggers_analysis() {
        assert!(DomEvent::click(ids::ANALYZE_BUTTON).triggers_analysis());
        assert!(DomEvent::key_press("Enter").triggers_analysis());
        assert!(!DomEvent::key_press("a").triggers_analysis());
        assert!(!DomEvent::click("userName").triggers_analysis());
        assert!(!DomEvent::input("userName", "x").triggers_analysis());
        assert!(!DomEvent::focus("userName").triggers_analysis());
    }

    // ===== MockDom =====

    #[test]
    fn test_analyzer_page_structure() {
        let dom = MockDom::analyzer();
        for field in InputField::ALL {
            let input = dom.get_element(field.element_id()).unwrap();
            assert_eq!(input.tag, "input");
            assert_eq!(input.get_attr("value"), Some(""));
        }
        assert_eq!(
            dom.get_element(InputField::Number.element_id())
                .unwrap()
                .get_attr("type"),
            Some("number")
        );
        assert!(dom.get_element(ids::ANALYZE_BUTTON).is_some());
        assert!(!dom.is_visible(ids::RESULTS_SECTION));
        assert_eq!(dom.get_element_text(ids::SUM), Some(""));
    }

    #[test]
    fn test_input_event_sets_value() {
        let mut dom = MockDom::analyzer();
        dom.dispatch_event(DomEvent::input("userName", "Ada"));
        assert_eq!(dom.input_value("userName"), Some("Ada"));
        assert_eq!(dom.event_history().len(), 1);
    }

    #[test]
    fn test_focus_and_blur_styling() {
        let mut dom = MockDom::analyzer();
        dom.dispatch_event(DomEvent::focus("fruit1"));
        let elem = dom.get_element("fruit1").unwrap();
        assert_eq!(elem.get_style("border-color"), Some(FOCUS_BORDER));
        assert_eq!(elem.get_style("box-shadow"), Some(FOCUS_SHADOW));
        assert_eq!(dom.focused_element(), Some("fruit1"));

        dom.dispatch_event(DomEvent::blur("fruit1"));
        let elem = dom.get_element("fruit1").unwrap();
        assert_eq!(elem.get_style("border-color"), Some(IDLE_BORDER));
        assert_eq!(elem.get_style("box-shadow"), Some("none"));
        assert_eq!(dom.focused_element(), None);
    }

    #[test]
    fn test_blur_of_other_element_keeps_focus() {
        let mut dom = MockDom::analyzer();
        dom.dispatch_event(DomEvent::focus("fruit2"));
        dom.dispatch_event(DomEvent::blur("fruit1"));
        assert_eq!(dom.focused_element(), Some("fruit2"));
    }

    #[test]
    fn test_children_and_visibility() {
        let mut dom = MockDom::analyzer();
        dom.append_child(ids::SEQUENCE, DomElement::new("div").with_text("1"));
        assert_eq!(dom.get_element(ids::SEQUENCE).unwrap().children.len(), 1);
        dom.clear_children(ids::SEQUENCE);
        assert!(dom.get_element(ids::SEQUENCE).unwrap().children.is_empty());

        dom.set_visible(ids::RESULTS_SECTION, true);
        assert!(dom.is_visible(ids::RESULTS_SECTION));
        assert!(!dom.is_visible("missing"));
    }

    #[test]
    fn test_register_element_requires_id() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div"));
        dom.register_element(DomElement::new("div").with_id("x").with_text("hi"));
        assert_eq!(dom.get_element_text("x"), Some("hi"));
        dom.set_element_text("x", "bye");
        assert_eq!(dom.get_element_text("x"), Some("bye"));
        dom.get_element_mut("x").unwrap().add_class("y");
        assert!(dom.get_element("x").unwrap().has_class("y"));
    }
}
