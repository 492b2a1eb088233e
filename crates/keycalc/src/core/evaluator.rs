//! Keystroke evaluator
//!
//! Holds the operand being typed, the queue of committed operators and the
//! queue of committed operands. Evaluation folds the queues left to right,
//! letting a `*` or `/` that directly follows a `+` or `-` bind first. The
//! look-ahead is one level deep: `1 + 2 * 3 * 4` evaluates to 28.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::format::{format_result, number_text};
use crate::core::{CalcError, CalcResult, EvaluatorConfig, Operator};
use crate::display::DisplaySink;

/// Outcome of a completed evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Evaluation {
    /// A finite numeric result
    Value(f64),
    /// The calculation divided by zero
    Infinity,
}

impl Evaluation {
    /// Returns the numeric result, if finite
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Infinity => None,
        }
    }

    /// Returns true for the division-by-zero outcome
    #[must_use]
    pub fn is_infinity(self) -> bool {
        matches!(self, Self::Infinity)
    }
}

/// A committed operand and the text it was typed as
#[derive(Debug, Clone, PartialEq)]
struct Operand {
    value: f64,
    text: String,
}

/// Expression evaluator writing to a display sink
#[derive(Debug)]
pub struct Evaluator<S: DisplaySink> {
    config: EvaluatorConfig,
    display: S,
    /// Characters of the operand being entered
    pending: String,
    operators: VecDeque<Operator>,
    operands: VecDeque<Operand>,
    /// Set while the display holds the division-by-zero text
    showing_sentinel: bool,
}

impl<S: DisplaySink + Default> Default for Evaluator<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: DisplaySink> Evaluator<S> {
    /// Creates an evaluator with default settings
    #[must_use]
    pub fn new(display: S) -> Self {
        Self::with_config(display, EvaluatorConfig::default())
    }

    /// Creates an evaluator with custom settings
    #[must_use]
    pub fn with_config(display: S, config: EvaluatorConfig) -> Self {
        Self {
            config,
            display,
            pending: String::new(),
            operators: VecDeque::new(),
            operands: VecDeque::new(),
            showing_sentinel: false,
        }
    }

    /// Appends a digit (0-9) to the pending operand. Other values are ignored.
    pub fn append_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            trace!(digit, "ignoring out-of-range digit");
            return;
        };
        self.pending.push(c);
        self.append_display(&c.to_string());
    }

    /// Appends a decimal point, inserting a leading `0` when nothing was typed.
    ///
    /// Ignored if the pending operand already has a point.
    pub fn append_decimal_point(&mut self) {
        if self.pending.contains('.') {
            trace!("ignoring second decimal point");
            return;
        }
        if self.pending.is_empty() {
            self.pending.push('0');
            self.append_display("0");
        }
        self.pending.push('.');
        self.append_display(".");
    }

    /// Appends a digit or decimal point given as a character
    pub fn append_char(&mut self, c: char) -> CalcResult<()> {
        match c {
            '.' => self.append_decimal_point(),
            '0'..='9' => self.append_digit(c as u8 - b'0'),
            other => return Err(CalcError::InvalidDigit(other)),
        }
        Ok(())
    }

    /// Commits the pending operand and queues `op`.
    ///
    /// Ignored when no operand is pending.
    pub fn commit_operator(&mut self, op: Operator) {
        if self.pending.is_empty() {
            trace!(%op, "ignoring operator without operand");
            return;
        }
        self.flush_pending();
        self.append_display(&op.rendering());
        self.operators.push_back(op);
        debug!(%op, queued = self.operators.len(), "operator committed");
    }

    /// Reduces the queued expression and shows the result.
    ///
    /// Returns `None` without touching any state when no operand is pending.
    /// Afterwards the pending operand holds the result text so further input
    /// continues from it.
    pub fn evaluate(&mut self) -> Option<Evaluation> {
        if self.pending.is_empty() {
            trace!("nothing to evaluate");
            return None;
        }
        self.flush_pending();

        let mut acc = self.next_operand();
        while let Some(op) = self.operators.pop_front() {
            let y = match self.operators.front().copied() {
                Some(next) if op.yields_to(Some(next)) && self.operands.len() >= 2 => {
                    self.operators.pop_front();
                    let a = self.next_operand();
                    let b = self.next_operand();
                    next.apply(a, b)
                }
                _ => self.next_operand(),
            };
            acc = op.apply(acc, y);
        }
        self.operands.clear();

        if !acc.is_finite() {
            debug!(result = %acc, "division by zero, resetting to 0");
            self.pending = "0".to_string();
            self.display.set_text(&self.config.infinity_text);
            self.showing_sentinel = true;
            return Some(Evaluation::Infinity);
        }

        let shown = format_result(acc, self.config.fraction_digits);
        debug!(result = acc, display = %shown, "evaluated");
        self.display.set_text(&shown);
        self.showing_sentinel = false;
        self.pending = number_text(acc);
        Some(Evaluation::Value(acc))
    }

    /// Undoes the most recent character or operator.
    ///
    /// Removing an operator puts the operand typed before it back into the
    /// pending buffer exactly as it was committed.
    pub fn undo_last_input(&mut self) {
        if self.pending.pop().is_some() {
            self.trim_display(1);
            if self.pending == "-" {
                self.pending.clear();
                self.trim_display(1);
            }
            trace!(pending = %self.pending, "undid character");
            return;
        }

        if let Some(op) = self.operators.pop_back() {
            self.trim_display(op.rendering().chars().count());
            if let Some(operand) = self.operands.pop_back() {
                self.pending = operand.text;
            }
            debug!(%op, pending = %self.pending, "undid operator");
        }
    }

    /// Resets all input state and clears the display
    pub fn clear(&mut self) {
        self.pending.clear();
        self.operators.clear();
        self.operands.clear();
        self.display.clear();
        self.showing_sentinel = false;
        debug!("cleared");
    }

    /// The operand currently being entered
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Operators waiting for evaluation, in entry order
    pub fn queued_operators(&self) -> impl Iterator<Item = Operator> + '_ {
        self.operators.iter().copied()
    }

    /// Operand values waiting for evaluation, in entry order
    pub fn queued_operands(&self) -> impl Iterator<Item = f64> + '_ {
        self.operands.iter().map(|o| o.value)
    }

    /// Returns true when nothing is pending or queued
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && self.operators.is_empty() && self.operands.is_empty()
    }

    /// The display sink
    #[must_use]
    pub fn display(&self) -> &S {
        &self.display
    }

    /// Mutable access to the display sink
    pub fn display_mut(&mut self) -> &mut S {
        &mut self.display
    }

    /// Consumes the evaluator, returning its display
    pub fn into_display(self) -> S {
        self.display
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    fn flush_pending(&mut self) {
        if self.pending.ends_with('.') {
            self.append_display("0");
            self.pending.push('0');
        }
        let text = std::mem::take(&mut self.pending);
        // Buffer only ever holds digits, one point and a seeded sign.
        let value = text.parse::<f64>().unwrap_or(0.0);
        self.operands.push_back(Operand { value, text });
    }

    /// Operand counts always exceed operator counts by one at evaluation.
    fn next_operand(&mut self) -> f64 {
        self.operands.pop_front().map_or(0.0, |o| o.value)
    }

    /// The first edit after a division by zero starts from a `0` display.
    fn replace_sentinel(&mut self) {
        if std::mem::take(&mut self.showing_sentinel) {
            self.display.set_text("0");
        }
    }

    fn append_display(&mut self, s: &str) {
        self.replace_sentinel();
        self.display.append(s);
    }

    fn trim_display(&mut self, count: usize) {
        self.replace_sentinel();
        self.display.trim_end(count);
    }
}
