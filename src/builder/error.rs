//! Build errors for transition tables, pipelines and registries.

use thiserror::Error;

/// Errors that can occur while assembling machine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Movement source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Movement trigger not specified. Call .on(trigger)")]
    MissingTrigger,

    #[error("Movement target state not specified. Call .to(state)")]
    MissingTargetState,

    #[error("No states defined. Declare a state or add a movement")]
    NoStates,

    #[error("State '{state}' is already configured")]
    DuplicateState { state: String },

    #[error("Movement from state '{state}' by trigger '{trigger}' is already configured")]
    DuplicateMovement { state: String, trigger: String },

    #[error("State configuration already has a movement by trigger '{trigger}'")]
    DuplicateTrigger { trigger: String },

    #[error("Pipeline already has a trigger for state '{state}'")]
    DuplicatePipe { state: String },

    #[error("Pipeline '{pipeline}' is already registered")]
    DuplicatePipeline { pipeline: String },
}
