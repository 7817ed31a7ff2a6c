//! History trace and calculation tape.
//!
//! [`Trace`] is the one-line record of the most recent operation shown
//! above the display. [`Tape`] is the immutable, timestamped record of every
//! calculation completed in a session.

use super::operator::Operator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

/// Human-readable record of the most recent operation.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Operator, Trace};
///
/// let pending = Trace::Pending {
///     operand: "5".to_string(),
///     operator: Operator::Add,
/// };
/// assert_eq!(pending.to_string(), "5 +");
///
/// let done = Trace::Completed {
///     lhs: "8".to_string(),
///     operator: Operator::Multiply,
///     rhs: "2".to_string(),
/// };
/// assert_eq!(done.to_string(), "8 × 2 =");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Trace {
    #[default]
    Empty,
    /// An operator was chosen and awaits its second operand.
    Pending { operand: String, operator: Operator },
    /// A calculation finished.
    Completed {
        lhs: String,
        operator: Operator,
        rhs: String,
    },
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Pending { operand, operator } => write!(f, "{operand} {operator}"),
            Self::Completed { lhs, operator, rhs } => write!(f, "{lhs} {operator} {rhs} ="),
        }
    }
}

/// One completed calculation, as entered and as displayed.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Computation {
    pub lhs: String,
    pub operator: Operator,
    pub rhs: String,
    /// Rounded, formatted result placed on the display.
    pub result: String,
}

/// A computation stamped with the time it completed.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TapeEntry {
    pub computation: Computation,
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for TapeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.computation;
        write!(f, "{} {} {} = {}", c.lhs, c.operator, c.rhs, c.result)
    }
}

/// Ordered record of completed calculations.
///
/// The tape is immutable - `record` returns a new tape with the entry
/// appended. With a limit set, only the most recent entries are kept.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Computation, Operator, Tape};
///
/// let tape = Tape::new();
/// let tape = tape.record(Computation {
///     lhs: "5".to_string(),
///     operator: Operator::Add,
///     rhs: "3".to_string(),
///     result: "8".to_string(),
/// });
///
/// assert_eq!(tape.len(), 1);
/// assert_eq!(tape.last().unwrap().to_string(), "5 + 3 = 8");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    limit: Option<usize>,
}

impl Tape {
    /// Create a new, unbounded tape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tape that keeps at most `limit` entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a computation stamped with the current time, returning a new tape.
    pub fn record(&self, computation: Computation) -> Self {
        self.record_entry(TapeEntry {
            computation,
            timestamp: Utc::now(),
        })
    }

    /// Record a pre-stamped entry, returning a new tape.
    ///
    /// The original tape is not modified. When the limit is reached the
    /// oldest entry is dropped.
    pub fn record_entry(&self, entry: TapeEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push_back(entry);
        if let Some(limit) = self.limit {
            while entries.len() > limit {
                entries.pop_front();
            }
        }
        Self {
            entries,
            limit: self.limit,
        }
    }

    /// Entries in the order they were recorded.
    pub fn entries(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Same limit, no entries.
    pub fn cleared(&self) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: self.limit,
        }
    }

    /// Time between the first and last recorded entries.
    ///
    /// Returns `None` for an empty tape.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.front()?, self.entries.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
