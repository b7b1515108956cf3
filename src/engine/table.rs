//! Static configuration of the machine: per-state movements keyed by trigger.

use super::movement::Movement;
use crate::builder::BuildError;
use crate::core::{State, Trigger};
use std::collections::HashMap;
use std::fmt;

/// All outbound movements of one state, keyed by trigger.
pub struct StateConfig<S: State, T: Trigger, H> {
    movements: HashMap<T, Movement<S, T, H>>,
}

impl<S: State, T: Trigger, H> StateConfig<S, T, H> {
    pub fn new() -> Self {
        Self {
            movements: HashMap::new(),
        }
    }

    /// Add a movement for `trigger`. Each trigger maps to at most one movement.
    pub fn with_movement(
        mut self,
        trigger: T,
        movement: Movement<S, T, H>,
    ) -> Result<Self, BuildError> {
        if self.movements.contains_key(&trigger) {
            return Err(BuildError::DuplicateTrigger {
                trigger: trigger.name().to_string(),
            });
        }
        self.movements.insert(trigger, movement);
        Ok(self)
    }

    pub fn movement(&self, trigger: &T) -> Option<&Movement<S, T, H>> {
        self.movements.get(trigger)
    }

    pub fn contains_trigger(&self, trigger: &T) -> bool {
        self.movements.contains_key(trigger)
    }

    pub fn triggers(&self) -> impl Iterator<Item = &T> {
        self.movements.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &Movement<S, T, H>)> {
        self.movements.iter()
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }
}

impl<S: State, T: Trigger, H> Default for StateConfig<S, T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger, H> Clone for StateConfig<S, T, H> {
    fn clone(&self) -> Self {
        Self {
            movements: self.movements.clone(),
        }
    }
}

impl<S: State, T: Trigger, H> fmt::Debug for StateConfig<S, T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.movements.iter()).finish()
    }
}

/// Complete state -> (trigger -> movement) configuration.
///
/// Built once and then only read; share it across threads by wrapping the
/// owning `Fsm` in an `Arc`.
pub struct TransitionTable<S: State, T: Trigger, H> {
    states: HashMap<S, StateConfig<S, T, H>>,
}

impl<S: State, T: Trigger, H> TransitionTable<S, T, H> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Add the configuration of `state`. Re-declaring a state is rejected.
    pub fn with_state(
        mut self,
        state: S,
        config: StateConfig<S, T, H>,
    ) -> Result<Self, BuildError> {
        if self.states.contains_key(&state) {
            return Err(BuildError::DuplicateState {
                state: state.name().to_string(),
            });
        }
        self.states.insert(state, config);
        Ok(self)
    }

    pub fn state_config(&self, state: &S) -> Option<&StateConfig<S, T, H>> {
        self.states.get(state)
    }

    pub fn movement(&self, state: &S, trigger: &T) -> Option<&Movement<S, T, H>> {
        self.states.get(state).and_then(|config| config.movement(trigger))
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &StateConfig<S, T, H>)> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: State, T: Trigger, H> Default for TransitionTable<S, T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger, H> fmt::Debug for TransitionTable<S, T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("states", &self.states)
            .finish()
    }
}
