//! Builder for a single (state, trigger) -> movement entry.

use crate::builder::error::BuildError;
use crate::core::{ActionResult, FailureKind, State, Trigger};
use crate::engine::{Movement, MovementAction};
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

/// Builder for one table entry with a fluent API.
///
/// `from`, `on` and `to` are required; everything else is optional.
pub struct MovementBuilder<S: State, T: Trigger, H> {
    from: Option<S>,
    on: Option<T>,
    to: Option<S>,
    action: Option<MovementAction<H>>,
    post_action: Option<MovementAction<H>>,
    recovery: HashMap<FailureKind, T>,
    default_recovery: Option<T>,
}

impl<S: State, T: Trigger, H> MovementBuilder<S, T, H> {
    /// Create a new movement builder.
    pub fn new() -> Self {
        Self {
            from: None,
            on: None,
            to: None,
            action: None,
            post_action: None,
            recovery: HashMap::new(),
            default_recovery: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the trigger (required).
    pub fn on(mut self, trigger: T) -> Self {
        self.on = Some(trigger);
        self
    }

    /// Set the target state on success (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the primary action (optional).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(H) -> ActionResult<H> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Set the post-action (optional).
    pub fn post_action<F>(mut self, action: F) -> Self
    where
        F: Fn(H) -> ActionResult<H> + Send + Sync + 'static,
    {
        self.post_action = Some(Arc::new(action));
        self
    }

    /// Reroute failures of exactly type `E` to `trigger`. A later route for
    /// the same type replaces the earlier one.
    pub fn recover_on<E>(mut self, trigger: T) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.recovery.insert(FailureKind::of::<E>(), trigger);
        self
    }

    /// Reroute all other failures to `trigger`.
    pub fn recover_with(mut self, trigger: T) -> Self {
        self.default_recovery = Some(trigger);
        self
    }

    /// Build the entry as `(from, on, movement)`.
    pub fn build(self) -> Result<(S, T, Movement<S, T, H>), BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let on = self.on.ok_or(BuildError::MissingTrigger)?;
        let to = self.to.ok_or(BuildError::MissingTargetState)?;

        let movement = Movement::from_parts(
            self.action,
            self.post_action,
            to,
            self.recovery,
            self.default_recovery,
        );

        Ok((from, on, movement))
    }
}

impl<S: State, T: Trigger, H> Default for MovementBuilder<S, T, H> {
    fn default() -> Self {
        Self::new()
    }
}
