//! Entities that carry a current state through movements.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Capability required of any entity driven by the engine: read and
/// overwrite the current state.
///
/// Holders are moved into the engine by value and handed back on return,
/// so a holder is only ever driven by one flow at a time.
pub trait StateHolder<S: State> {
    /// Current state of the entity.
    fn state(&self) -> &S;

    /// Overwrite the current state.
    fn set_state(&mut self, state: S);
}

/// Plain value type pairing a state with an arbitrary payload.
///
/// # Example
///
/// ```rust
/// use railyard::core::{Stateful, StateHolder};
///
/// let mut order = Stateful::new("NEW".to_string(), 42u32);
/// order.set_state("PAID".to_string());
///
/// assert_eq!(order.state(), "PAID");
/// assert_eq!(order.data, 42);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "D: Serialize",
    deserialize = "D: for<'a> Deserialize<'a>"
))]
pub struct Stateful<S: State, D> {
    pub state: S,
    pub data: D,
}

impl<S: State, D> Stateful<S, D> {
    pub fn new(state: S, data: D) -> Self {
        Self { state, data }
    }

    /// Split into state and payload.
    pub fn into_parts(self) -> (S, D) {
        (self.state, self.data)
    }

    /// Replace the payload, keeping the state.
    pub fn map_data<E>(self, f: impl FnOnce(D) -> E) -> Stateful<S, E> {
        Stateful {
            state: self.state,
            data: f(self.data),
        }
    }
}

impl<S: State> Stateful<S, ()> {
    /// Holder without payload.
    pub fn bare(state: S) -> Self {
        Self::new(state, ())
    }
}

impl<S: State, D> StateHolder<S> for Stateful<S, D> {
    fn state(&self) -> &S {
        &self.state
    }

    fn set_state(&mut self, state: S) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_state_overwrites_in_place() {
        let mut holder = Stateful::new("A".to_string(), vec![1, 2]);
        holder.set_state("B".to_string());

        assert_eq!(holder.state(), "B");
        assert_eq!(holder.data, vec![1, 2]);
    }

    #[test]
    fn map_data_keeps_state() {
        let holder = Stateful::new("A".to_string(), 2u8);
        let mapped = holder.map_data(|n| format!("{n}!"));

        assert_eq!(mapped.state, "A");
        assert_eq!(mapped.data, "2!");
    }

    #[test]
    fn stateful_serializes_with_payload() {
        let holder = Stateful::new("A".to_string(), 7u64);
        let json = serde_json::to_string(&holder).unwrap();
        let back: Stateful<String, u64> = serde_json::from_str(&json).unwrap();

        assert_eq!(holder, back);
    }
}
