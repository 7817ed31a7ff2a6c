//! Input events and output frames.

use crate::core::{Operator, Token};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete, pre-classified input event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    /// A digit `0`-`9` or the decimal point.
    Digit(Token),
    Operator(Operator),
    Equals,
    Clear,
    Delete,
}

impl Event {
    /// Event name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::Delete => "delete",
        }
    }
}

impl From<Token> for Event {
    fn from(token: Token) -> Self {
        Self::Digit(token)
    }
}

impl From<Operator> for Event {
    fn from(operator: Operator) -> Self {
        Self::Operator(operator)
    }
}

/// What the display surface shows after an event.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Current operand text or the last result.
    pub display: String,
    /// Rendered history trace.
    pub history: String,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>24}\n{:>24}", self.history, self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_wrap_payloads() {
        let token = Token::new('3').unwrap();
        assert_eq!(Event::from(token), Event::Digit(token));
        assert_eq!(Event::from(Operator::Divide), Event::Operator(Operator::Divide));
    }

    #[test]
    fn event_names_are_stable() {
        assert_eq!(Event::Digit(Token::DECIMAL_POINT).name(), "digit");
        assert_eq!(Event::Operator(Operator::Add).name(), "operator");
        assert_eq!(Event::Equals.name(), "equals");
        assert_eq!(Event::Clear.name(), "clear");
        assert_eq!(Event::Delete.name(), "delete");
    }

    #[test]
    fn frame_renders_history_above_display() {
        let frame = Frame {
            display: "8".to_string(),
            history: "5 + 3 =".to_string(),
        };
        let rendered = frame.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("5 + 3 ="));
        assert!(lines[1].ends_with('8'));
    }
}
