//! Runtime errors raised by calculator transitions.

use thiserror::Error;

/// Errors a transition can report to the user.
///
/// Irregular input (a second decimal point, an operator on an empty
/// display, ...) is ignored silently and never produces one of these.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}
