//! Findings reported by configuration audits.

use thiserror::Error;

/// A configuration shape that will surface as an error at run time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuditFinding {
    #[error(
        "Movement from '{state}' by '{trigger}' recovers via '{recovery}', \
         but '{state}' has no movement by '{recovery}'"
    )]
    DanglingRecovery {
        state: String,
        trigger: String,
        recovery: String,
    },

    #[error("Final state '{state}' has an outbound movement by '{trigger}'")]
    MovementFromFinalState { state: String, trigger: String },

    #[error("Pipeline plans '{trigger}' for state '{state}', which has no configuration")]
    UnknownPipelineState { state: String, trigger: String },

    #[error("Pipeline plans '{trigger}' for state '{state}', which has no such movement")]
    UnknownPipelineTrigger { state: String, trigger: String },
}
