//! Calculator that owns one state and applies events to it.

use crate::core::transition;
use crate::core::{CalculatorState, Operator, Phase, Rounding, Step, Tape, Token};
use crate::machine::event::{Event, Frame};
use crate::machine::notifier::{LogNotifier, Notifier};
use tracing::{debug, trace};

/// Event-driven calculator.
///
/// Each call to [`handle`](Calculator::handle) runs one pure transition,
/// commits its result and returns the frame to render. Division by zero is
/// handed to the notifier and followed by a full clear; it never escapes
/// `handle`.
///
/// # Example
///
/// ```rust
/// use abacus::{Calculator, Event, Operator, Token};
///
/// let mut calc = Calculator::new();
/// calc.handle(Event::Digit(Token::new('5').unwrap()));
/// calc.handle(Event::Operator(Operator::Add));
/// calc.handle(Event::Digit(Token::new('3').unwrap()));
/// let frame = calc.handle(Event::Equals);
///
/// assert_eq!(frame.display, "8");
/// assert_eq!(frame.history, "5 + 3 =");
/// ```
pub struct Calculator<N: Notifier = LogNotifier> {
    state: CalculatorState,
    rounding: Rounding,
    tape: Tape,
    notifier: N,
}

impl Calculator<LogNotifier> {
    /// Calculator with the default rounding policy that logs errors.
    pub fn new() -> Self {
        Self::with_notifier(LogNotifier)
    }
}

impl Default for Calculator<LogNotifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Notifier> Calculator<N> {
    /// Calculator with the default rounding policy and a custom notifier.
    pub fn with_notifier(notifier: N) -> Self {
        Self::from_parts(CalculatorState::new(), Rounding::default(), Tape::new(), notifier)
    }

    pub(crate) fn from_parts(
        state: CalculatorState,
        rounding: Rounding,
        tape: Tape,
        notifier: N,
    ) -> Self {
        Self {
            state,
            rounding,
            tape,
            notifier,
        }
    }

    /// Apply one event and return what the display should show.
    pub fn handle(&mut self, event: Event) -> Frame {
        debug!(
            event = event.name(),
            phase = self.state.phase().name(),
            "handling event"
        );

        let outcome = match event {
            Event::Digit(token) => Ok(Step::from(transition::input_token(&self.state, token))),
            Event::Operator(operator) => {
                transition::input_operator(&self.state, operator, &self.rounding)
            }
            Event::Equals => transition::calculate(&self.state, &self.rounding),
            Event::Clear => Ok(Step::from(transition::clear())),
            Event::Delete => Ok(Step::from(transition::delete(&self.state))),
        };

        match outcome {
            Ok(step) => self.commit(event, step),
            Err(error) => {
                self.notifier.notify(&error);
                self.state = transition::clear();
            }
        }

        self.frame()
    }

    /// Apply events in order, returning the frame after the last one.
    pub fn handle_all<I>(&mut self, events: I) -> Frame
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.handle(event);
        }
        self.frame()
    }

    fn commit(&mut self, event: Event, step: Step) {
        if step.state == self.state {
            trace!(event = event.name(), "input ignored");
        }
        if let Some(computation) = step.computation {
            debug!(
                lhs = %computation.lhs,
                operator = %computation.operator,
                rhs = %computation.rhs,
                result = %computation.result,
                "calculation completed"
            );
            self.tape = self.tape.record(computation);
        }
        self.state = step.state;
    }

    pub fn digit(&mut self, token: Token) -> Frame {
        self.handle(Event::Digit(token))
    }

    pub fn operator(&mut self, operator: Operator) -> Frame {
        self.handle(Event::Operator(operator))
    }

    pub fn equals(&mut self) -> Frame {
        self.handle(Event::Equals)
    }

    pub fn clear(&mut self) -> Frame {
        self.handle(Event::Clear)
    }

    pub fn delete(&mut self) -> Frame {
        self.handle(Event::Delete)
    }

    /// Current display and history.
    pub fn frame(&self) -> Frame {
        Frame {
            display: self.state.display.clone(),
            history: self.state.trace.to_string(),
        }
    }

    pub fn display(&self) -> &str {
        &self.state.display
    }

    pub fn history(&self) -> String {
        self.state.trace.to_string()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn rounding(&self) -> &Rounding {
        &self.rounding
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Forget all recorded calculations. The display is untouched.
    pub fn clear_tape(&mut self) {
        self.tape = self.tape.cleared();
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
