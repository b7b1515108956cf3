//! Identifier traits for machine states and triggers.
//!
//! States and triggers are opaque, hashable identifiers. The engine only
//! compares and hashes them; names are used for logging and error reporting.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// All methods are pure. A state is a position in the machine and carries
/// no behavior of its own.
///
/// # Required Traits
///
/// - `Clone`: states are copied into holders and history records
/// - `Eq` + `Hash`: states key the transition table and pipelines
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states travel inside checkpoints
///
/// # Example
///
/// ```rust
/// use railyard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum OrderState {
///     New,
///     Paid,
///     Failed,
/// }
///
/// impl State for OrderState {
///     fn name(&self) -> &str {
///         match self {
///             Self::New => "New",
///             Self::Paid => "Paid",
///             Self::Failed => "Failed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Paid | Self::Failed)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Failed)
///     }
/// }
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Dispatch never consults this flag; terminality comes from the
    /// transition table and pipelines. `audit_table` flags final states
    /// that still have outbound movements.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Walks ending in an error state log a warning.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Trait for triggers (events or intents requesting a movement).
pub trait Trigger: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the trigger's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl Trigger for String {
    fn name(&self) -> &str {
        self
    }
}

impl Trigger for &'static str {
    fn name(&self) -> &str {
        self
    }
}
