//! Keypad buttons and keyboard mapping
//!
//! Buttons carry a `value` attribute (`0`-`9`, `.`, `+ - * /`, `=`, `back`,
//! `clear`) and a `digit` or `op` class; keyboard input arrives as
//! `KeyboardEvent.key` names. Both resolve to a [`KeypadAction`].

use serde::{Deserialize, Serialize};

use super::dom::{DomElement, MockDom};
use crate::core::evaluator::{Evaluation, Evaluator};
use crate::core::{CalcError, CalcResult, Operator};
use crate::display::DisplaySink;

/// Actions that keypad buttons and keys perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeypadAction {
    /// Type a digit (0-9)
    Digit(u8),
    /// Type a decimal point
    Decimal,
    /// Commit an operator
    Operator(Operator),
    /// Evaluate the expression
    Equals,
    /// Undo the last input
    Backspace,
    /// Clear everything
    Clear,
}

impl KeypadAction {
    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Backspace => "DEL".to_string(),
            Self::Clear => "C".to_string(),
            _ => self.value(),
        }
    }

    /// Returns the button's `value` attribute
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Backspace => "back".to_string(),
            Self::Clear => "clear".to_string(),
        }
    }

    /// Returns the canonical keyboard key for this action
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Backspace => "Backspace".to_string(),
            Self::Clear => "Escape".to_string(),
            _ => self.value(),
        }
    }

    /// Maps a `KeyboardEvent.key` name to an action
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "=" | "Enter" => Some(Self::Equals),
            "Backspace" => Some(Self::Backspace),
            "Escape" | "c" | "C" => Some(Self::Clear),
            _ => Self::from_char_key(key),
        }
    }

    /// Maps a button `value` attribute to an action
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "=" => Some(Self::Equals),
            "back" => Some(Self::Backspace),
            "clear" => Some(Self::Clear),
            _ => Self::from_char_key(value),
        }
    }

    /// Like [`from_key`](Self::from_key), but unknown keys are an error
    pub fn parse_key(key: &str) -> CalcResult<Self> {
        Self::from_key(key).ok_or_else(|| CalcError::unknown_key(key))
    }

    /// Performs the action on an evaluator.
    ///
    /// Returns the outcome when the action evaluated the expression.
    pub fn apply_to<S: DisplaySink>(self, evaluator: &mut Evaluator<S>) -> Option<Evaluation> {
        match self {
            Self::Digit(d) => evaluator.append_digit(d),
            Self::Decimal => evaluator.append_decimal_point(),
            Self::Operator(op) => evaluator.commit_operator(op),
            Self::Equals => return evaluator.evaluate(),
            Self::Backspace => evaluator.undo_last_input(),
            Self::Clear => evaluator.clear(),
        }
        None
    }

    fn from_char_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            '.' => Some(Self::Decimal),
            _ => Operator::try_from(c).ok().map(Self::Operator),
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operator(op) => format!("btn-{}", op.name()),
            KeypadAction::Equals => "btn-equals".to_string(),
            KeypadAction::Backspace => "btn-back".to_string(),
            KeypadAction::Clear => "btn-clear".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
        }
    }

    /// Class marking the button kind, if any
    #[must_use]
    pub fn kind_class(&self) -> Option<&'static str> {
        match self.action {
            KeypadAction::Digit(_) | KeypadAction::Decimal => Some("digit"),
            KeypadAction::Operator(_) => Some("op"),
            _ => None,
        }
    }

    /// Builds the button element
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let mut elem = DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.action.label())
            .with_class("keypad-btn")
            .with_attr("value", &self.action.value());
        if let Some(class) = self.kind_class() {
            elem.add_class(class);
        }
        elem
    }
}

/// Calculator keypad layout
///
/// ```text
/// [ C ] [DEL] [ / ] [ * ]
/// [ 7 ] [ 8 ] [ 9 ] [ - ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 1 ] [ 2 ] [ 3 ] [ = ]
/// [ 0 ] [ . ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Id of the keypad container element
    pub const CONTAINER_ID: &'static str = "calc-keypad";

    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{Backspace, Clear, Decimal, Digit, Equals};
        let op = KeypadAction::Operator;

        let layout = [
            [Some(Clear), Some(Backspace), Some(op(Operator::Divide)), Some(op(Operator::Multiply))],
            [Some(Digit(7)), Some(Digit(8)), Some(Digit(9)), Some(op(Operator::Subtract))],
            [Some(Digit(4)), Some(Digit(5)), Some(Digit(6)), Some(op(Operator::Add))],
            [Some(Digit(1)), Some(Digit(2)), Some(Digit(3)), Some(Equals)],
            [Some(Digit(0)), Some(Decimal), None, None],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions.iter().copied().enumerate().filter_map(move |(col, action)| {
                    action.map(|a| KeypadButtonDef::new(a, row, col))
                })
            })
            .collect();

        Self {
            buttons,
            cols: 4,
            rows: layout.len(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the button at a grid position
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button performing an action
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Resolves a click on an element to the button's action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }

    /// Creates DOM elements for all buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons.iter().map(KeypadButtonDef::to_element).collect()
    }

    /// Creates the keypad container with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.create_dom_elements().into_iter().fold(
            DomElement::new("div")
                .with_id(Self::CONTAINER_ID)
                .with_class("keypad"),
            DomElement::with_child,
        )
    }
}

/// Extension trait for MockDom to mount a keypad
pub trait MockDomKeypadExt {
    /// Adds the keypad container and registers every button
    fn add_keypad(&mut self, keypad: &Keypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &Keypad) {
        let container = keypad.create_keypad_element();
        self.root.children.push(container.clone());
        self.register_element(container);
        for button in keypad.create_dom_elements() {
            self.register_element(button);
        }
    }
}
