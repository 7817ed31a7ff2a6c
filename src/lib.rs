//! Abacus: a pure functional calculator state machine
//!
//! Abacus models a keypad calculator the way a pocket calculator behaves:
//! digits accumulate on a display, operators capture the display as a
//! pending left operand, and chained operators evaluate strictly left to
//! right. The transitions are pure functions over an explicit
//! `CalculatorState`; a thin shell owns one state, dispatches input events
//! and reports division by zero through a pluggable notifier.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState` holds the display, pending operation and trace
//! - **Events**: `Event` is every input a keypad or keyboard can deliver
//! - **Frames**: `Frame` is the display/history pair to render after each event
//! - **Notifier**: the port that receives user-visible errors
//! - **Tape**: immutable record of every completed calculation
//!
//! # Example
//!
//! ```rust
//! use abacus::input::events_from_line;
//! use abacus::{Calculator, RecordingNotifier};
//!
//! let mut calc = Calculator::with_notifier(RecordingNotifier::new());
//!
//! let frame = calc.handle_all(events_from_line("5+3*2="));
//! assert_eq!(frame.display, "16");
//! assert_eq!(frame.history, "8 × 2 =");
//!
//! let frame = calc.handle_all(events_from_line("7/0="));
//! assert_eq!(frame.display, "");
//! assert_eq!(calc.notifier().notices().len(), 1);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{CalculatorState, Operator, Phase, Rounding, RoundingMode, Token};
pub use builder::{BuildError, CalculatorBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::{CalculatorConfig, ConfigError};
pub use error::CalcError;
pub use machine::{Calculator, Event, Frame, LogNotifier, Notifier, RecordingNotifier};
