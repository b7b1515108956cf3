//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Default bound on recovery reroutes within a single `fire` call.
pub const DEFAULT_MAX_RECOVERY_HOPS: usize = 64;

/// Runtime limits applied by the dispatch engine.
///
/// Missing fields fall back to their defaults when deserializing, so an
/// empty JSON object is a valid configuration.
///
/// # Example
///
/// ```rust
/// use railyard::FsmConfig;
///
/// let config = FsmConfig::from_json(r#"{ "max_recovery_hops": 3 }"#).unwrap();
/// assert_eq!(config.max_recovery_hops, 3);
///
/// let config = FsmConfig::default().with_max_recovery_hops(8);
/// assert_eq!(config.max_recovery_hops, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsmConfig {
    /// Maximum number of failure reroutes before `fire` gives up with
    /// `FsmError::RecoveryDepthExceeded`.
    pub max_recovery_hops: usize,
}

impl Default for FsmConfig {
    fn default() -> Self {
        Self {
            max_recovery_hops: DEFAULT_MAX_RECOVERY_HOPS,
        }
    }
}

impl FsmConfig {
    pub fn with_max_recovery_hops(mut self, hops: usize) -> Self {
        self.max_recovery_hops = hops;
        self
    }

    /// Parse configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
