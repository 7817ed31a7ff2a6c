//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Explicit state via `CalculatorState`
//! - Operators, rounding and number formatting
//! - History trace and the tape of completed calculations
//! - Transition functions from one state to the next
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod operator;
mod rounding;
mod state;
mod trace;
pub mod transition;

pub use operator::Operator;
pub use rounding::{
    format_number, parse_operand, Rounding, RoundingMode, DEFAULT_DECIMALS, MAX_DECIMALS,
};
pub use state::{CalculatorState, PendingOperation, Phase, Token, DECIMAL_POINT};
pub use trace::{Computation, Tape, TapeEntry, Trace};
pub use transition::Step;
