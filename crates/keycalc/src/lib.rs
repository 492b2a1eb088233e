//! keycalc - keystroke-driven four-function calculator
//!
//! The calculator reads digits, operators, evaluate, undo and clear one input
//! at a time. It keeps the operand being typed plus queues of committed
//! operators and operands, and writes running text to a [`DisplaySink`].
//!
//! Evaluation is left to right, except that a `*` or `/` directly after a `+`
//! or `-` is folded first. The look-ahead is a single level deep.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut eval = Evaluator::new(TextDisplay::new());
//! eval.append_digit(1);
//! eval.commit_operator(Operator::Add);
//! eval.append_digit(2);
//! eval.commit_operator(Operator::Multiply);
//! eval.append_digit(3);
//!
//! assert_eq!(eval.evaluate(), Some(Evaluation::Value(7.0)));
//! assert_eq!(eval.display().text(), "7");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod display;
pub mod driver;
pub mod web;

pub use crate::core::{CalcError, CalcResult};
pub use crate::display::DisplaySink;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{Evaluation, Evaluator};
    pub use crate::core::format::{format_result, number_text};
    pub use crate::core::{CalcError, CalcResult, EvaluatorConfig, Operator, INFINITY_TEXT};
    pub use crate::display::{DisplaySink, TextDisplay};
    pub use crate::driver::{CalculatorDriver, TextDriver};
    pub use crate::web::{DomDisplay, DomEvent, Keypad, KeypadAction, KeypadApp, MockDom};
}
