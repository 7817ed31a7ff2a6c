//! Builder API for configuring calculators.
//!
//! This module provides a fluent builder for choosing the rounding policy,
//! tape limit and notifier of a calculator while keeping the defaults one
//! call away.
//!
//! # Example
//!
//! ```
//! use abacus::builder::CalculatorBuilder;
//! use abacus::core::RoundingMode;
//!
//! let calc = CalculatorBuilder::new()
//!     .decimals(4)
//!     .rounding(RoundingMode::HalfEven)
//!     .tape_limit(100)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(calc.rounding().decimals, 4);
//! ```

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
