//! Core calculator: operators, result formatting and the keystroke evaluator
//!
//! Every evaluator operation is total. Invalid input is ignored rather than
//! reported, so errors only appear where raw characters or key names cross
//! into the typed API.

pub mod evaluator;
pub mod format;
mod operations;

pub use operations::Operator;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator boundary conversions
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised when untyped input is converted into calculator input
#[derive(Debug, Error)]
pub enum CalcError {
    /// Character is neither a digit nor a decimal point
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),

    /// Character is not one of `+ - * /`
    #[error("Invalid operator: {0:?}")]
    InvalidOperator(char),

    /// Key name has no keypad mapping
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),

    /// Evaluator configuration could not be decoded
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl CalcError {
    /// Create an unknown key error
    #[must_use]
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey(key.into())
    }
}

/// Text shown when a calculation divides by zero
pub const INFINITY_TEXT: &str = "To infinity, and beyond!";

/// Evaluator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Maximum fractional digits shown for non-integer results
    pub fraction_digits: usize,
    /// Display text for the division-by-zero sentinel
    pub infinity_text: String,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            fraction_digits: Self::DEFAULT_FRACTION_DIGITS,
            infinity_text: INFINITY_TEXT.to_string(),
        }
    }
}

impl EvaluatorConfig {
    /// Default fractional digit cap
    pub const DEFAULT_FRACTION_DIGITS: usize = 8;

    /// Largest useful cap; `f64` text never carries more fractional digits
    pub const MAX_FRACTION_DIGITS: usize = 17;

    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fractional digit cap, clamped to `1..=MAX_FRACTION_DIGITS`
    #[must_use]
    pub fn with_fraction_digits(mut self, digits: usize) -> Self {
        self.fraction_digits = digits.clamp(1, Self::MAX_FRACTION_DIGITS);
        self
    }

    /// Sets the division-by-zero display text
    #[must_use]
    pub fn with_infinity_text(mut self, text: impl Into<String>) -> Self {
        self.infinity_text = text.into();
        self
    }

    /// Decodes a configuration from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        let digits = config.fraction_digits;
        Ok(config.with_fraction_digits(digits))
    }

    /// Encodes the configuration as JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
