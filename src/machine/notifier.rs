//! Port through which the calculator reports user-visible failures.
//!
//! The calculator never blocks on a notification; it hands the error to the
//! notifier and carries on with its own recovery.

use crate::error::CalcError;

/// Receives user-visible calculation errors.
///
/// Any `FnMut(&CalcError)` closure is a notifier.
pub trait Notifier {
    fn notify(&mut self, error: &CalcError);
}

impl<F> Notifier for F
where
    F: FnMut(&CalcError),
{
    fn notify(&mut self, error: &CalcError) {
        self(error)
    }
}

/// Emits each error as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, error: &CalcError) {
        tracing::warn!(%error, "calculation rejected");
    }
}

/// Keeps every error it receives, for hosts that render notices later.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notices: Vec<CalcError>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[CalcError] {
        &self.notices
    }

    /// Remove and return everything recorded so far.
    pub fn take(&mut self) -> Vec<CalcError> {
        std::mem::take(&mut self.notices)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, error: &CalcError) {
        self.notices.push(*error);
    }
}
