//! Errors surfaced by the dispatch engine and pipeline walkers.

use crate::builder::BuildError;
use std::fmt;
use thiserror::Error;

/// Errors visible to callers of `fire` and the walkers.
///
/// Action failures never appear here: they are absorbed by the engine and
/// turned into recovery movements. Only their eventual consequence is
/// reported.
#[derive(Debug, Error)]
pub enum FsmError {
    #[error("State '{state}' has no configuration in the transition table")]
    UnknownState { state: String },

    #[error(
        "No movement from state '{state}' by trigger '{}'",
        .trigger.as_deref().unwrap_or("<none>")
    )]
    NoMovementForTrigger {
        state: String,
        /// `None` when a failed movement had no recovery trigger configured
        trigger: Option<String>,
    },

    #[error("No pipeline found by id '{pipeline}'")]
    PipelineNotFound { pipeline: String },

    #[error("Recovery from state '{state}' exceeded {hops} hops (last trigger '{trigger}')")]
    RecoveryDepthExceeded {
        state: String,
        trigger: String,
        hops: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] BuildError),
}

/// Failed `fire` or walk, handing the holder back to the caller.
///
/// The holder is in the state it was in when the failing movement was
/// requested: the entry state of `fire`, or the entry state of the failing
/// step of a walk. Payload changes made by actions before the failure are
/// kept.
#[derive(Error)]
#[error("{error}")]
pub struct FireError<H> {
    holder: H,
    error: FsmError,
}

impl<H> FireError<H> {
    pub fn new(holder: H, error: FsmError) -> Self {
        Self { holder, error }
    }

    pub fn error(&self) -> &FsmError {
        &self.error
    }

    pub fn holder(&self) -> &H {
        &self.holder
    }

    /// Take back the holder, dropping the error.
    pub fn into_holder(self) -> H {
        self.holder
    }

    pub fn into_error(self) -> FsmError {
        self.error
    }

    /// Split into holder and error.
    pub fn into_parts(self) -> (H, FsmError) {
        (self.holder, self.error)
    }
}

impl<H> fmt::Debug for FireError<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FireError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<H> From<FireError<H>> for FsmError {
    fn from(err: FireError<H>) -> Self {
        err.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_recovery_trigger_renders_placeholder() {
        let err = FsmError::NoMovementForTrigger {
            state: "NEW".to_string(),
            trigger: None,
        };
        assert_eq!(
            err.to_string(),
            "No movement from state 'NEW' by trigger '<none>'"
        );
    }

    #[test]
    fn fire_error_displays_cause_and_returns_holder() {
        let err = FireError::new(
            7u32,
            FsmError::UnknownState {
                state: "GONE".to_string(),
            },
        );

        assert_eq!(
            err.to_string(),
            "State 'GONE' has no configuration in the transition table"
        );
        assert!(matches!(err.error(), FsmError::UnknownState { .. }));
        assert_eq!(err.into_holder(), 7);
    }

    #[test]
    fn build_errors_convert_to_invalid_configuration() {
        let err: FsmError = BuildError::NoStates.into();
        assert!(matches!(err, FsmError::InvalidConfiguration(BuildError::NoStates)));
    }
}
