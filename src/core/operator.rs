//! Binary operators understood by the calculator.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five keypad operators.
///
/// The operator carries two renderings: the ASCII key that selects it
/// (`*`, `/`, ...) and the symbol shown in the history trace (`×`, `÷`, ...).
/// The symbol is display only and never affects computation.
///
/// # Example
///
/// ```rust
/// use abacus::core::Operator;
///
/// let op = Operator::from_key('*').unwrap();
/// assert_eq!(op, Operator::Multiply);
/// assert_eq!(op.symbol(), "×");
/// assert_eq!(op.apply(6.0, 7.0).unwrap(), 42.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Remainder,
    ];

    /// Map an input key to an operator.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Remainder),
            _ => None,
        }
    }

    /// The ASCII key that selects this operator.
    pub fn key(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Remainder => '%',
        }
    }

    /// Symbol used in the history trace.
    ///
    /// Subtraction renders as the Unicode minus sign (U+2212), not a hyphen.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{00d7}",
            Self::Divide => "\u{00f7}",
            Self::Remainder => "%",
        }
    }

    /// Apply the operator to two operands (pure).
    ///
    /// Division by an exact zero is the only failure. Remainder follows
    /// `fmod` semantics: the result takes the sign of the dividend, and a
    /// zero divisor yields NaN rather than an error.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
            Self::Remainder => Ok(lhs % rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
