//! Pure transition functions.
//!
//! Each function takes the current state by reference and returns the next
//! state. None of them log, notify or touch anything outside their
//! arguments; the shell in [`crate::machine`] does that.

use super::operator::Operator;
use super::rounding::{format_number, parse_operand, Rounding};
use super::state::{CalculatorState, PendingOperation, Token};
use super::trace::{Computation, Trace};
use crate::error::CalcError;

/// Outcome of a transition that may complete a calculation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Step {
    pub state: CalculatorState,
    /// The calculation completed by this step, if any.
    pub computation: Option<Computation>,
}

impl Step {
    fn unchanged(state: &CalculatorState) -> Self {
        Self {
            state: state.clone(),
            computation: None,
        }
    }
}

impl From<CalculatorState> for Step {
    fn from(state: CalculatorState) -> Self {
        Self {
            state,
            computation: None,
        }
    }
}

/// Append a digit or decimal point to the display.
///
/// A pending reset empties the display first. A second decimal point is
/// ignored.
pub fn input_token(state: &CalculatorState, token: Token) -> CalculatorState {
    let mut next = state.clone();
    if next.reset_display {
        next.display.clear();
        next.reset_display = false;
    }
    if token.is_decimal_point() && next.has_decimal_point() {
        return next;
    }
    next.display.push(token.as_char());
    next
}

/// Capture the display as the left operand of `operator`.
///
/// Ignored on an empty display. If an operation is already pending it is
/// resolved first with the display as its second operand, so chains
/// evaluate strictly left to right.
pub fn input_operator(
    state: &CalculatorState,
    operator: Operator,
    rounding: &Rounding,
) -> Result<Step, CalcError> {
    if state.display.is_empty() {
        return Ok(Step::unchanged(state));
    }

    let resolved = if state.pending.is_some() {
        calculate(state, rounding)?
    } else {
        Step::unchanged(state)
    };

    let operand = resolved.state.display.clone();
    let next = CalculatorState {
        display: resolved.state.display,
        pending: Some(PendingOperation {
            operand: operand.clone(),
            operator,
        }),
        last_operator: Some(operator),
        reset_display: true,
        trace: Trace::Pending { operand, operator },
    };

    Ok(Step {
        state: next,
        computation: resolved.computation,
    })
}

/// Resolve the pending operation against the display.
///
/// Ignored when nothing is pending or the display is empty. The result is
/// rounded, formatted and placed on the display; the pending pair is
/// cleared while the operator is kept as `last_operator`.
pub fn calculate(state: &CalculatorState, rounding: &Rounding) -> Result<Step, CalcError> {
    let Some(pending) = &state.pending else {
        return Ok(Step::unchanged(state));
    };
    if state.display.is_empty() {
        return Ok(Step::unchanged(state));
    }

    let lhs = parse_operand(&pending.operand);
    let rhs = parse_operand(&state.display);
    let value = pending.operator.apply(lhs, rhs)?;
    let result = format_number(rounding.apply(value));

    let computation = Computation {
        lhs: pending.operand.clone(),
        operator: pending.operator,
        rhs: state.display.clone(),
        result: result.clone(),
    };
    let next = CalculatorState {
        display: result,
        pending: None,
        last_operator: Some(pending.operator),
        reset_display: true,
        trace: Trace::Completed {
            lhs: computation.lhs.clone(),
            operator: computation.operator,
            rhs: computation.rhs.clone(),
        },
    };

    Ok(Step {
        state: next,
        computation: Some(computation),
    })
}

/// Reset everything.
pub fn clear() -> CalculatorState {
    CalculatorState::new()
}

/// Remove the last character of the display.
///
/// Pending operation, trace and reset flag are left alone.
pub fn delete(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    next.display.pop();
    next
}
