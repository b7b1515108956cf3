//! Flat builder for transition tables.

use crate::builder::error::BuildError;
use crate::builder::movement::MovementBuilder;
use crate::core::{State, StateHolder, Trigger};
use crate::engine::{Fsm, Movement, StateConfig, TransitionTable};
use std::collections::HashMap;

/// Builder accumulating (state, trigger) -> movement entries into one table.
///
/// Every registration returns `Result<Self, BuildError>` so a chain of
/// entries reads as a sequence of `?` or `and_then` calls.
pub struct TableBuilder<S: State, T: Trigger, H> {
    states: HashMap<S, HashMap<T, Movement<S, T, H>>>,
}

impl<S: State, T: Trigger, H> TableBuilder<S, T, H> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Declare a state. Needed only for states without outbound movements,
    /// since registering a movement declares its source state.
    ///
    /// Declaring a state already present is rejected.
    pub fn state(mut self, state: S) -> Result<Self, BuildError> {
        if self.states.contains_key(&state) {
            return Err(BuildError::DuplicateState {
                state: state.name().to_string(),
            });
        }
        self.states.insert(state, HashMap::new());
        Ok(self)
    }

    /// Add a movement using a builder.
    /// Returns an error if the builder fails validation.
    pub fn movement(self, builder: MovementBuilder<S, T, H>) -> Result<Self, BuildError> {
        let (from, on, movement) = builder.build()?;
        self.add_movement(from, on, movement)
    }

    /// Add a pre-built movement from `from` by `on`.
    ///
    /// A second movement for the same (state, trigger) pair is rejected
    /// rather than replacing the first.
    pub fn add_movement(
        mut self,
        from: S,
        on: T,
        movement: Movement<S, T, H>,
    ) -> Result<Self, BuildError> {
        let movements = self.states.entry(from.clone()).or_default();
        if movements.contains_key(&on) {
            return Err(BuildError::DuplicateMovement {
                state: from.name().to_string(),
                trigger: on.name().to_string(),
            });
        }
        movements.insert(on, movement);
        Ok(self)
    }

    /// Add an action-less movement from `from` to `to` by `on`.
    pub fn route(self, from: S, on: T, to: S) -> Result<Self, BuildError> {
        self.add_movement(from, on, Movement::to(to))
    }

    /// Build the transition table.
    /// Returns an error if no state was declared.
    pub fn build(self) -> Result<TransitionTable<S, T, H>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut table = TransitionTable::new();
        for (state, movements) in self.states {
            let mut config = StateConfig::new();
            for (trigger, movement) in movements {
                config = config.with_movement(trigger, movement)?;
            }
            table = table.with_state(state, config)?;
        }

        Ok(table)
    }
}

impl<S: State, T: Trigger, H: StateHolder<S>> TableBuilder<S, T, H> {
    /// Build the table and wrap it in a machine with the default configuration.
    pub fn build_fsm(self) -> Result<Fsm<S, T, H>, BuildError> {
        self.build().map(Fsm::new)
    }
}

impl<S: State, T: Trigger, H> Default for TableBuilder<S, T, H> {
    fn default() -> Self {
        Self::new()
    }
}
