//! The four binary operators

use crate::core::CalcError;
use serde::{Deserialize, Serialize};

/// Binary operator accepted by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the spaced form written to the display, e.g. `" + "`
    #[must_use]
    pub fn rendering(self) -> String {
        format!(" {} ", self.symbol())
    }

    /// Returns true for `*` and `/`
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    /// Returns true when `next` must be folded before applying `self`.
    ///
    /// Only a multiplicative operator following an additive one qualifies.
    #[must_use]
    pub fn yields_to(self, next: Option<Self>) -> bool {
        !self.is_multiplicative() && next.is_some_and(Self::is_multiplicative)
    }

    /// Applies the operator. Division by zero follows IEEE 754.
    #[must_use]
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Add => x + y,
            Self::Subtract => x - y,
            Self::Multiply => x * y,
            Self::Divide => x / y,
        }
    }

    /// Returns a name used in element ids
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(CalcError::InvalidOperator(other)),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
