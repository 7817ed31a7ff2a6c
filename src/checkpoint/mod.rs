//! Checkpoint and resume for calculator sessions.
//!
//! A checkpoint captures everything needed to put a calculator back exactly
//! where it was: display, pending operation, trace, tape and rounding
//! policy. Where the bytes go is up to the host.

use crate::core::{CalculatorState, Rounding, Tape, MAX_DECIMALS};
use crate::machine::{Calculator, Notifier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a calculator.
/// Does NOT include the notifier (not serializable).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Calculator state at capture time
    pub state: CalculatorState,

    /// Completed calculations
    pub tape: Tape,

    /// Rounding policy in effect
    pub rounding: Rounding,
}

impl Checkpoint {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Serialize to a compact binary form.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary form and validate.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check version and contents (pure).
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if self.rounding.decimals > MAX_DECIMALS {
            return Err(CheckpointError::ValidationFailed(format!(
                "precision {} exceeds maximum {MAX_DECIMALS}",
                self.rounding.decimals
            )));
        }
        self.state
            .validate()
            .map_err(CheckpointError::ValidationFailed)
    }
}

impl<N: Notifier> Calculator<N> {
    /// Capture the current session.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state: self.state().clone(),
            tape: self.tape().clone(),
            rounding: *self.rounding(),
        }
    }

    /// Rebuild a calculator from a checkpoint.
    pub fn resume(checkpoint: Checkpoint, notifier: N) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        tracing::debug!(id = %checkpoint.id, "resuming calculator from checkpoint");
        Ok(Self::from_parts(
            checkpoint.state,
            checkpoint.rounding,
            checkpoint.tape,
            notifier,
        ))
    }
}
