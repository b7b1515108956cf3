//! Journal of completed movements.
//!
//! Provides immutable tracking of state advances, following the same
//! value semantics as holders: recording returns a new history.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single successful movement.
///
/// # Example
///
/// ```rust
/// use railyard::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "NEW".to_string(),
///     to: "PAID".to_string(),
///     trigger: "PAY".to_string(),
///     timestamp: Utc::now(),
///     attempt: 0,
/// };
/// assert_eq!(transition.trigger, "PAY");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being moved from
    pub from: S,
    /// The state being moved to
    pub to: S,
    /// Name of the trigger whose movement succeeded
    pub trigger: String,
    /// When the movement completed
    pub timestamp: DateTime<Utc>,
    /// Recovery hop that produced this movement (0 for the requested trigger)
    pub attempt: usize,
}

/// Ordered history of completed movements.
///
/// # Example
///
/// ```rust
/// use railyard::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let step = |from: &str, to: &str| StateTransition {
///     from: from.to_string(),
///     to: to.to_string(),
///     trigger: format!("{from}->{to}"),
///     timestamp: Utc::now(),
///     attempt: 0,
/// };
///
/// let history = StateHistory::new()
///     .record(step("S1", "S2"))
///     .record(step("S2", "S3"));
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // S1 -> S2 -> S3
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append all transitions of `other`, returning a new history.
    pub fn concat(&self, other: &StateHistory<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.extend(other.transitions.iter().cloned());
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first `from` state, then the `to` state of each
    /// transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Names of the triggers whose movements succeeded, in order.
    pub fn triggers(&self) -> Vec<&str> {
        self.transitions.iter().map(|t| t.trigger.as_str()).collect()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
