//! Browser-style calculator page
//!
//! Routes page events to the evaluator the way the page script would: clicks
//! resolve through the keypad's button ids, keydowns through key names, and
//! anything unmapped is ignored.

use tracing::trace;

use super::dom::{DomDisplay, DomEvent, MockDom};
use super::keypad::{Keypad, KeypadAction, MockDomKeypadExt};
use crate::core::evaluator::{Evaluation, Evaluator};
use crate::core::EvaluatorConfig;
use crate::display::DisplaySink;

/// Calculator page: keypad, display element and evaluator
#[derive(Debug)]
pub struct KeypadApp {
    keypad: Keypad,
    evaluator: Evaluator<DomDisplay>,
    last_evaluation: Option<Evaluation>,
}

impl Default for KeypadApp {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadApp {
    /// Creates the page with default evaluator settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EvaluatorConfig::default())
    }

    /// Creates the page with custom evaluator settings
    #[must_use]
    pub fn with_config(config: EvaluatorConfig) -> Self {
        let keypad = Keypad::new();
        let mut dom = MockDom::calculator();
        dom.add_keypad(&keypad);
        Self {
            keypad,
            evaluator: Evaluator::with_config(DomDisplay::new(dom), config),
            last_evaluation: None,
        }
    }

    /// Handles a page event, returning the action it triggered
    pub fn dispatch(&mut self, event: DomEvent) -> Option<KeypadAction> {
        let action = match &event {
            DomEvent::Click { element_id } => self.keypad.handle_click(element_id),
            DomEvent::KeyDown { key } => KeypadAction::from_key(key),
        };
        self.evaluator.display_mut().dom_mut().dispatch_event(event);

        match action {
            Some(action) => {
                self.apply(action);
            }
            None => trace!("event has no keypad action"),
        }
        action
    }

    /// Simulates clicking an element
    pub fn click(&mut self, element_id: &str) -> Option<KeypadAction> {
        self.dispatch(DomEvent::click(element_id))
    }

    /// Simulates pressing a key
    pub fn key_down(&mut self, key: &str) -> Option<KeypadAction> {
        self.dispatch(DomEvent::key_down(key))
    }

    /// Performs an action directly
    pub fn apply(&mut self, action: KeypadAction) -> Option<Evaluation> {
        let outcome = action.apply_to(&mut self.evaluator);
        if outcome.is_some() {
            self.last_evaluation = outcome;
        } else if action == KeypadAction::Clear {
            self.last_evaluation = None;
        }
        outcome
    }

    /// Text of the display element
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.evaluator.display().text()
    }

    /// Outcome of the most recent evaluation since the last clear
    #[must_use]
    pub fn last_evaluation(&self) -> Option<Evaluation> {
        self.last_evaluation
    }

    /// The evaluator
    #[must_use]
    pub fn evaluator(&self) -> &Evaluator<DomDisplay> {
        &self.evaluator
    }

    /// The page DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.evaluator.display().dom()
    }

    /// The keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }
}
