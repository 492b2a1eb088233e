//! Mock DOM for the browser calculator page
//!
//! Models just enough of a page (elements by id, classes, text content and an
//! event log) to drive the keypad glue and observe the display without a
//! browser.

use std::collections::HashMap;

use crate::display::DisplaySink;

/// Id of the display element on the calculator page
pub const DISPLAY_ID: &str = "display";

/// Represents a DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the element ID
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

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text_content);
    }

    /// Adds a class if not already present
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Events the page can receive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key pressed anywhere on the page
    KeyDown {
        /// The `KeyboardEvent.key` name
        key: String,
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

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM holding elements by id
#[derive(Debug, Clone)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator page with an empty display element
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();
        let display = DomElement::new("div")
            .with_id(DISPLAY_ID)
            .with_class("display");

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator")
            .with_child(display.clone());
        dom.register_element(display);
        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Records an event in the log
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }
}

/// Display sink writing into one element of a [`MockDom`]
#[derive(Debug, Clone)]
pub struct DomDisplay {
    dom: MockDom,
    element_id: String,
}

impl Default for DomDisplay {
    fn default() -> Self {
        Self::new(MockDom::calculator())
    }
}

impl DomDisplay {
    /// Writes into the page's `#display` element
    #[must_use]
    pub fn new(dom: MockDom) -> Self {
        Self::with_element(dom, DISPLAY_ID)
    }

    /// Writes into the element with the given id
    #[must_use]
    pub fn with_element(dom: MockDom, element_id: &str) -> Self {
        Self {
            dom,
            element_id: element_id.to_string(),
        }
    }

    /// The underlying DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Mutable access to the underlying DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }
}

impl DisplaySink for DomDisplay {
    fn text(&self) -> &str {
        self.dom.get_element_text(&self.element_id).unwrap_or_default()
    }

    fn set_text(&mut self, text: &str) {
        self.dom.set_element_text(&self.element_id, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_builder() {
        let elem = DomElement::new("button")
            .with_id("btn-1")
            .with_text("1")
            .with_class("digit")
            .with_attr("value", "1");
        assert_eq!(elem.tag, "button");
        assert_eq!(elem.id, "btn-1");
        assert_eq!(elem.text_content, "1");
        assert!(elem.has_class("digit"));
        assert_eq!(elem.get_attr("value"), Some("1"));
        assert_eq!(elem.get_attr("missing"), None);
    }

    #[test]
    fn test_dom_element_default_is_div() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_add_class_dedupes() {
        let mut elem = DomElement::new("div").with_class("op");
        elem.add_class("op");
        assert_eq!(elem.classes.len(), 1);
    }

    #[test]
    fn test_with_child() {
        let elem = DomElement::new("div").with_child(DomElement::new("span"));
        assert_eq!(elem.children.len(), 1);
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_event_constructors() {
        assert_eq!(
            DomEvent::click("btn-equals"),
            DomEvent::Click {
                element_id: "btn-equals".into()
            }
        );
        assert_eq!(
            DomEvent::key_down("Backspace"),
            DomEvent::KeyDown {
                key: "Backspace".into()
            }
        );
    }

    // ===== MockDom tests =====

    #[test]
    fn test_calculator_page_has_display() {
        let dom = MockDom::calculator();
        assert_eq!(dom.get_element_text(DISPLAY_ID), Some(""));
        assert_eq!(dom.root.children.len(), 1);
    }

    #[test]
    fn test_unregistered_element_lookup() {
        let dom = MockDom::new();
        assert!(dom.get_element("nope").is_none());
        assert!(dom.get_element_text("nope").is_none());
    }

    #[test]
    fn test_register_without_id_is_skipped() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("span"));
        assert!(dom.get_element("").is_none());
    }

    #[test]
    fn test_event_history() {
        let mut dom = MockDom::new();
        dom.dispatch_event(DomEvent::key_down("1"));
        dom.dispatch_event(DomEvent::click("btn-plus"));
        assert_eq!(dom.event_history().len(), 2);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }

    // ===== DomDisplay tests =====

    #[test]
    fn test_dom_display_writes_element() {
        let mut display = DomDisplay::default();
        display.append("12");
        display.append(" + ");
        assert_eq!(display.dom().get_element_text(DISPLAY_ID), Some("12 + "));
        display.trim_end(3);
        assert_eq!(display.text(), "12");
    }

    #[test]
    fn test_dom_display_missing_element_reads_empty() {
        let mut display = DomDisplay::with_element(MockDom::new(), "absent");
        display.set_text("ignored");
        assert_eq!(display.text(), "");
    }

    #[test]
    fn test_dom_display_dom_mut() {
        let mut display = DomDisplay::default();
        display.dom_mut().set_element_text(DISPLAY_ID, "9");
        assert_eq!(display.text(), "9");
    }
}
