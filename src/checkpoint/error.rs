//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while saving or restoring a calculator session
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding the session as JSON or binary failed
    #[error("Failed to encode checkpoint: {0}")]
    SerializationFailed(String),

    /// The bytes or text are not a checkpoint
    #[error("Failed to decode checkpoint: {0}")]
    DeserializationFailed(String),

    /// Written by an incompatible version of the format
    #[error("Checkpoint format version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Decoded cleanly but describes a state the calculator cannot be in
    #[error("Checkpoint holds an invalid calculator state: {0}")]
    ValidationFailed(String),
}
