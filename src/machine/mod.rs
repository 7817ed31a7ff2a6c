//! Imperative shell around the pure core.
//!
//! The calculator here owns a single `CalculatorState`, dispatches input
//! events to the transition functions in [`crate::core::transition`] and
//! performs the side effects those functions leave out: notifying the user,
//! recording the tape and logging.
//!
//! # Key Concepts
//!
//! - **Events**: `Event` enumerates every input a keypad or keyboard can send
//! - **Frames**: `Frame` is the display/history pair produced after each event
//! - **Notifier**: the port through which division by zero reaches the user

mod calculator;
mod event;
mod notifier;

pub use calculator::Calculator;
pub use event::{Event, Frame};
pub use notifier::{LogNotifier, Notifier, RecordingNotifier};
