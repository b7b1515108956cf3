//! Configured edges of the machine.

use crate::core::{ActionError, ActionResult, FailureKind, State, StateHolder, Trigger};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Type alias for movement actions.
///
/// An action takes the holder by value and returns it (or a replacement).
/// On failure it hands the holder back inside the `ActionError`.
pub type MovementAction<H> = Arc<dyn Fn(H) -> ActionResult<H> + Send + Sync>;

/// One configured edge: primary action, optional post-action, target state
/// on success, and the recovery routes taken when an action fails.
///
/// Movements are immutable once built; the consuming `with_*` methods are
/// only used while assembling configuration.
pub struct Movement<S: State, T: Trigger, H> {
    action: Option<MovementAction<H>>,
    post_action: Option<MovementAction<H>>,
    target: S,
    recovery: HashMap<FailureKind, T>,
    default_recovery: Option<T>,
}

impl<S: State, T: Trigger, H> Movement<S, T, H> {
    /// Movement with no actions that advances to `target`.
    pub fn to(target: S) -> Self {
        Self {
            action: None,
            post_action: None,
            target,
            recovery: HashMap::new(),
            default_recovery: None,
        }
    }

    pub(crate) fn from_parts(
        action: Option<MovementAction<H>>,
        post_action: Option<MovementAction<H>>,
        target: S,
        recovery: HashMap<FailureKind, T>,
        default_recovery: Option<T>,
    ) -> Self {
        Self {
            action,
            post_action,
            target,
            recovery,
            default_recovery,
        }
    }

    /// Set the primary action, run while the holder is still in the source state.
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(H) -> ActionResult<H> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Set the post-action, run after the holder has advanced to the target.
    pub fn with_post_action<F>(mut self, action: F) -> Self
    where
        F: Fn(H) -> ActionResult<H> + Send + Sync + 'static,
    {
        self.post_action = Some(Arc::new(action));
        self
    }

    /// Route failures of exactly type `E` to `trigger`.
    pub fn recover_on<E>(self, trigger: T) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.recover_on_kind(FailureKind::of::<E>(), trigger)
    }

    /// Route failures of `kind` to `trigger`. A later route for the same kind
    /// replaces the earlier one.
    pub fn recover_on_kind(mut self, kind: FailureKind, trigger: T) -> Self {
        self.recovery.insert(kind, trigger);
        self
    }

    /// Route every failure without a kind-specific route to `trigger`.
    pub fn recover_with(mut self, trigger: T) -> Self {
        self.default_recovery = Some(trigger);
        self
    }

    pub fn target(&self) -> &S {
        &self.target
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn has_post_action(&self) -> bool {
        self.post_action.is_some()
    }

    pub fn default_recovery(&self) -> Option<&T> {
        self.default_recovery.as_ref()
    }

    /// Recovery trigger for a failure of `kind`: the exact-kind route if one
    /// exists, otherwise the default route.
    pub fn recovery_trigger(&self, kind: &FailureKind) -> Option<&T> {
        self.recovery
            .get(kind)
            .or(self.default_recovery.as_ref())
    }

    /// Every trigger this movement may reroute to, kind-specific routes first.
    pub fn recovery_triggers(&self) -> impl Iterator<Item = &T> {
        self.recovery.values().chain(self.default_recovery.iter())
    }
}

impl<S: State, T: Trigger, H: StateHolder<S>> Movement<S, T, H> {
    /// Run the primary action, advance to the target, then run the post-action.
    ///
    /// The holder returned inside an error is whatever the failing action
    /// handed back; its state is not restored here.
    pub(crate) fn execute(&self, holder: H) -> ActionResult<H> {
        let mut holder = match &self.action {
            Some(action) => action(holder)?,
            None => holder,
        };
        holder.set_state(self.target.clone());
        tracing::debug!(state = self.target.name(), "Primary action completed, state advanced");

        match &self.post_action {
            Some(post_action) => post_action(holder),
            None => Ok(holder),
        }
    }
}

/// Convenience for actions that fail with a single error value.
pub fn fail<H, E>(holder: H, error: E) -> ActionResult<H>
where
    E: Error + Send + Sync + 'static,
{
    Err(ActionError::new(holder, error))
}

impl<S: State, T: Trigger, H> Clone for Movement<S, T, H> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            post_action: self.post_action.clone(),
            target: self.target.clone(),
            recovery: self.recovery.clone(),
            default_recovery: self.default_recovery.clone(),
        }
    }
}

impl<S: State, T: Trigger, H> fmt::Debug for Movement<S, T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Movement")
            .field("target", &self.target)
            .field("action", &self.action.is_some())
            .field("post_action", &self.post_action.is_some())
            .field("recovery", &self.recovery)
            .field("default_recovery", &self.default_recovery)
            .finish()
    }
}
