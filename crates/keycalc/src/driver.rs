//! Unified calculator driver
//!
//! Front ends differ in how keys reach the evaluator and where the display
//! lives. [`CalculatorDriver`] hides both, so the `verify_*` checks below run
//! unchanged against the plain text driver and the browser page.

use crate::core::evaluator::{Evaluation, Evaluator};
use crate::core::{EvaluatorConfig, INFINITY_TEXT};
use crate::display::{DisplaySink, TextDisplay};
use crate::web::{KeypadAction, KeypadApp};

/// Key-level interface shared by every calculator front end
pub trait CalculatorDriver {
    /// Presses a key by its `KeyboardEvent.key` name; unknown keys do nothing
    fn press_key(&mut self, key: &str) -> Option<KeypadAction>;

    /// Current display text
    fn display(&self) -> String;

    /// Operand currently being typed
    fn pending(&self) -> String;

    /// Outcome of the most recent evaluation
    fn last_evaluation(&self) -> Option<Evaluation>;

    /// Presses each key in order
    fn press_keys(&mut self, keys: &[&str]) {
        for key in keys {
            self.press_key(key);
        }
    }

    /// Presses one key per non-whitespace character
    fn type_text(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            self.press_key(&c.to_string());
        }
    }

    /// Presses the clear key
    fn clear(&mut self) {
        self.press_key("Escape");
    }
}

/// Driver over an evaluator with an in-memory display
#[derive(Debug, Default)]
pub struct TextDriver {
    evaluator: Evaluator<TextDisplay>,
    last_evaluation: Option<Evaluation>,
}

impl TextDriver {
    /// Creates a driver with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver with custom evaluator settings
    #[must_use]
    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self {
            evaluator: Evaluator::with_config(TextDisplay::new(), config),
            last_evaluation: None,
        }
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

    /// The evaluator
    #[must_use]
    pub fn evaluator(&self) -> &Evaluator<TextDisplay> {
        &self.evaluator
    }
}

impl CalculatorDriver for TextDriver {
    fn press_key(&mut self, key: &str) -> Option<KeypadAction> {
        let action = KeypadAction::from_key(key)?;
        self.apply(action);
        Some(action)
    }

    fn display(&self) -> String {
        self.evaluator.display().text().to_string()
    }

    fn pending(&self) -> String {
        self.evaluator.pending().to_string()
    }

    fn last_evaluation(&self) -> Option<Evaluation> {
        self.last_evaluation
    }
}

impl CalculatorDriver for KeypadApp {
    fn press_key(&mut self, key: &str) -> Option<KeypadAction> {
        self.key_down(key)
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn pending(&self) -> String {
        self.evaluator().pending().to_string()
    }

    fn last_evaluation(&self) -> Option<Evaluation> {
        KeypadApp::last_evaluation(self)
    }
}

// ===== Shared behavioural checks =====
// These run against ANY CalculatorDriver implementation

/// Multiplication directly after addition binds first, one level deep
pub fn verify_priority_lookahead<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_text("1 + 2 * 3 =");
    assert_eq!(driver.display(), "7");

    driver.clear();
    driver.type_text("1 * 2 + 3 =");
    assert_eq!(driver.display(), "5");

    driver.clear();
    driver.type_text("1 + 2 * 3 * 4 =");
    assert_eq!(driver.display(), "28");
    driver.clear();
}

/// Results feed the next expression
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_text("2 + 2 =");
    assert_eq!(driver.display(), "4");
    assert_eq!(driver.pending(), "4");

    driver.type_text("+ 3 =");
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.last_evaluation(), Some(Evaluation::Value(7.0)));
    driver.clear();
}

/// Division by zero shows the sentinel and restarts from zero
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_text("5 / 0 =");
    assert_eq!(driver.display(), INFINITY_TEXT);
    assert_eq!(driver.pending(), "0");
    assert_eq!(driver.last_evaluation(), Some(Evaluation::Infinity));

    driver.type_text("+ 2 =");
    assert_eq!(driver.display(), "2");
    driver.clear();
}

/// Decimal entry and result formatting
pub fn verify_decimals<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_text(".5");
    assert_eq!(driver.display(), "0.5");
    driver.type_text(".");
    assert_eq!(driver.display(), "0.5");

    driver.clear();
    driver.type_text("10 / 4 =");
    assert_eq!(driver.display(), "2.5");

    driver.clear();
    driver.type_text("2 / 3 =");
    assert_eq!(driver.display(), "0.66666667");
    driver.clear();
}

/// Backspace removes characters, then operators
pub fn verify_undo<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_key("Backspace");
    assert_eq!(driver.display(), "");

    driver.type_text("12 +");
    driver.press_key("Backspace");
    assert_eq!(driver.display(), "12");
    assert_eq!(driver.pending(), "12");

    driver.press_key("Backspace");
    assert_eq!(driver.display(), "1");
    assert_eq!(driver.pending(), "1");
    driver.clear();
}

/// Runs every shared check
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_priority_lookahead(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_decimals(driver);
    verify_undo(driver);
}
