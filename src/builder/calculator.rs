//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::config::CalculatorConfig;
use crate::core::{CalculatorState, Rounding, RoundingMode, Tape, DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::machine::{Calculator, LogNotifier, Notifier};

/// Builder for constructing calculators with a fluent API.
pub struct CalculatorBuilder<N: Notifier = LogNotifier> {
    decimals: u32,
    rounding: RoundingMode,
    tape_limit: Option<usize>,
    notifier: N,
}

impl CalculatorBuilder<LogNotifier> {
    /// Create a new builder with the default rounding policy.
    pub fn new() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            rounding: RoundingMode::default(),
            tape_limit: None,
            notifier: LogNotifier,
        }
    }
}

impl Default for CalculatorBuilder<LogNotifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Notifier> CalculatorBuilder<N> {
    /// Set the number of fractional digits kept in results.
    pub fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set how ties are rounded.
    pub fn rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }

    /// Keep only the most recent `limit` calculations on the tape.
    pub fn tape_limit(mut self, limit: usize) -> Self {
        self.tape_limit = Some(limit);
        self
    }

    /// Apply every setting from a loaded configuration.
    pub fn config(mut self, config: &CalculatorConfig) -> Self {
        self.decimals = config.decimals;
        self.rounding = config.rounding;
        self.tape_limit = config.tape_limit;
        self
    }

    /// Replace the notifier that receives division-by-zero errors.
    pub fn notifier<M: Notifier>(self, notifier: M) -> CalculatorBuilder<M> {
        CalculatorBuilder {
            decimals: self.decimals,
            rounding: self.rounding,
            tape_limit: self.tape_limit,
            notifier,
        }
    }

    /// Build the calculator.
    /// Returns an error if a setting is out of range.
    pub fn build(self) -> Result<Calculator<N>, BuildError> {
        if self.decimals > MAX_DECIMALS {
            return Err(BuildError::PrecisionOutOfRange {
                decimals: self.decimals,
                max: MAX_DECIMALS,
            });
        }

        let tape = match self.tape_limit {
            Some(0) => return Err(BuildError::EmptyTape),
            Some(limit) => Tape::with_limit(limit),
            None => Tape::new(),
        };

        Ok(Calculator::from_parts(
            CalculatorState::new(),
            Rounding::new(self.decimals, self.rounding),
            tape,
            self.notifier,
        ))
    }
}
