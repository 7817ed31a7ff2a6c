//! Calculator state as an explicit, immutable value.
//!
//! Every transition in [`crate::core::transition`] takes a
//! `&CalculatorState` and returns a new one, so the whole machine can be
//! driven and inspected without any rendering surface.

use super::operator::Operator;
use super::trace::Trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The decimal separator accepted by the display.
pub const DECIMAL_POINT: char = '.';

/// A single keypad token: one ASCII digit or the decimal point.
///
/// # Example
///
/// ```rust
/// use abacus::core::Token;
///
/// assert!(Token::new('7').is_some());
/// assert!(Token::new('.').unwrap().is_decimal_point());
/// assert!(Token::new('x').is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Token(char);

impl Token {
    pub const DECIMAL_POINT: Token = Token(DECIMAL_POINT);

    /// Validate a character as a keypad token.
    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == DECIMAL_POINT).then_some(Self(c))
    }

    /// Token for a single decimal digit (`0..=9`).
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then(|| Self(char::from(b'0' + d)))
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    pub fn is_decimal_point(&self) -> bool {
        self.0 == DECIMAL_POINT
    }
}

impl TryFrom<char> for Token {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or_else(|| format!("'{c}' is not a digit or decimal point"))
    }
}

impl From<Token> for char {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Left operand and operator waiting for a second operand.
///
/// Stored as one value so the operand and operator are always set and
/// cleared together.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PendingOperation {
    pub operand: String,
    pub operator: Operator,
}

/// Coarse position of the machine, derived from its state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No operation pending. Also the phase right after a result.
    Idle,
    /// An operand and operator are captured, waiting for the second operand.
    OperatorPending,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::OperatorPending => "OperatorPending",
        }
    }
}

/// Complete state of one calculator.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text on the display: the operand being typed or the last result.
    pub display: String,
    /// Captured left operand and operator, if any.
    pub pending: Option<PendingOperation>,
    /// Operator of the most recent pair. Kept after a result but inert.
    pub last_operator: Option<Operator>,
    /// When set, the next token replaces the display instead of appending.
    pub reset_display: bool,
    /// Human-readable record of the most recent operation.
    pub trace: Trace,
}

impl CalculatorState {
    /// The empty state a freshly built calculator starts in.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::OperatorPending
        } else {
            Phase::Idle
        }
    }

    pub fn has_decimal_point(&self) -> bool {
        self.display.contains(DECIMAL_POINT)
    }

    /// Check the invariants a state must hold (pure).
    ///
    /// Used when restoring state that did not come from the transitions,
    /// such as a deserialized checkpoint.
    pub fn validate(&self) -> Result<(), String> {
        let points = self.display.matches(DECIMAL_POINT).count();
        if points > 1 {
            return Err(format!(
                "display '{}' contains {points} decimal points",
                self.display
            ));
        }
        if let Some(pending) = &self.pending {
            if pending.operand.is_empty() {
                return Err("pending operation has an empty operand".to_string());
            }
        }
        Ok(())
    }
}
