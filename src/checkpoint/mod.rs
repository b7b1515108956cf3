//! Snapshots of a holder between movements.
//!
//! A walk depends only on the holder's current state, so a walk interrupted
//! between movements resumes by walking the restored holder along the same
//! pipeline. Checkpoints capture the holder and its journal; the transition
//! table and its actions are code and are never serialized.

use crate::core::{State, StateHistory, Stateful};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a holder and the movements that led to it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "D: Serialize", deserialize = "D: DeserializeOwned"))]
pub struct Checkpoint<S: State, D> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Pipeline the holder was walking, if any
    pub pipeline: Option<String>,

    /// Holder at the time of the snapshot
    pub holder: Stateful<S, D>,

    /// Movements completed before the snapshot
    pub history: StateHistory<S>,
}

impl<S: State, D> Checkpoint<S, D> {
    pub fn new(holder: Stateful<S, D>, history: StateHistory<S>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            pipeline: None,
            holder,
            history,
        }
    }

    /// Tag the checkpoint with the pipeline being walked.
    pub fn on_pipeline(mut self, pipeline: impl Display) -> Self {
        self.pipeline = Some(pipeline.to_string());
        self
    }

    /// Current state of the captured holder.
    pub fn state(&self) -> &S {
        &self.holder.state
    }

    /// Take back the holder and history to continue walking.
    pub fn resume(self) -> (Stateful<S, D>, StateHistory<S>) {
        (self.holder, self.history)
    }

    fn validate(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(self)
    }
}

impl<S: State, D: Serialize + DeserializeOwned> Checkpoint<S, D> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }
}
