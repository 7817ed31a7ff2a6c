//! Build errors for the calculator builder.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Precision of {decimals} decimal places is out of range (maximum {max})")]
    PrecisionOutOfRange { decimals: u32, max: u32 },

    #[error("Tape limit must be at least 1. Omit .tape_limit() for an unbounded tape")]
    EmptyTape,
}
