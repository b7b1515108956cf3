//! Dispatch engine: resolves and executes one movement, rerouting failures.

use super::table::TransitionTable;
use crate::config::FsmConfig;
use crate::core::{State, StateHistory, StateHolder, StateTransition, Trigger};
use crate::error::{FireError, FsmError};
use chrono::Utc;
use std::fmt;
use std::marker::PhantomData;

/// Finite state machine over a fixed transition table.
///
/// The machine holds no per-entity state. Every call takes a holder by
/// value and returns it, so one machine can drive any number of holders,
/// from any number of threads, while each holder is driven by one flow.
pub struct Fsm<S: State, T: Trigger, H> {
    table: TransitionTable<S, T, H>,
    config: FsmConfig,
    _holder: PhantomData<fn(H) -> H>,
}

impl<S: State, T: Trigger, H: StateHolder<S>> Fsm<S, T, H> {
    /// Create a machine with the default configuration.
    pub fn new(table: TransitionTable<S, T, H>) -> Self {
        Self::with_config(table, FsmConfig::default())
    }

    pub fn with_config(table: TransitionTable<S, T, H>, config: FsmConfig) -> Self {
        Self {
            table,
            config,
            _holder: PhantomData,
        }
    }

    pub fn table(&self) -> &TransitionTable<S, T, H> {
        &self.table
    }

    pub fn config(&self) -> &FsmConfig {
        &self.config
    }

    /// Move `holder` out of its current state by `trigger`.
    ///
    /// On success the holder is returned in the movement's target state (or
    /// wherever its post-action left it). When an action fails, the holder's
    /// state is restored to the state it entered with and the movement's
    /// recovery trigger is fired from that same state. Action failures are
    /// never returned; only configuration faults are:
    ///
    /// - `UnknownState` when the holder's state has no configuration
    /// - `NoMovementForTrigger` when the state has no movement for the
    ///   trigger, including a failed movement with no recovery trigger
    /// - `RecoveryDepthExceeded` when reroutes exceed
    ///   `FsmConfig::max_recovery_hops`
    ///
    /// Every error hands the holder back in its entry state, keeping any
    /// payload changes made by failed actions.
    pub fn fire(&self, trigger: T, holder: H) -> Result<H, FireError<H>> {
        self.dispatch(trigger, holder, None)
    }

    /// Like [`fire`](Self::fire), also returning the completed movement.
    pub fn fire_recorded(
        &self,
        trigger: T,
        holder: H,
    ) -> Result<(H, StateHistory<S>), FireError<H>> {
        let mut history = StateHistory::new();
        let holder = self.dispatch(trigger, holder, Some(&mut history))?;
        Ok((holder, history))
    }

    pub(crate) fn dispatch(
        &self,
        trigger: T,
        holder: H,
        mut journal: Option<&mut StateHistory<S>>,
    ) -> Result<H, FireError<H>> {
        let initial = holder.state().clone();
        tracing::debug!(
            state = initial.name(),
            trigger = trigger.name(),
            "Trying to move"
        );

        let Some(config) = self.table.state_config(&initial) else {
            let error = FsmError::UnknownState {
                state: initial.name().to_string(),
            };
            return Err(FireError::new(holder, error));
        };

        // Every reroute restores `initial`, so all hops resolve against `config`.
        let mut holder = holder;
        let mut trigger = trigger;
        let mut hops = 0;

        loop {
            let Some(movement) = config.movement(&trigger) else {
                let error = FsmError::NoMovementForTrigger {
                    state: initial.name().to_string(),
                    trigger: Some(trigger.name().to_string()),
                };
                return Err(FireError::new(holder, error));
            };

            let failure = match movement.execute(holder) {
                Ok(moved) => {
                    tracing::debug!(
                        from = initial.name(),
                        to = moved.state().name(),
                        trigger = trigger.name(),
                        hops,
                        "Movement completed"
                    );
                    if let Some(history) = journal.as_deref_mut() {
                        *history = history.record(StateTransition {
                            from: initial.clone(),
                            to: moved.state().clone(),
                            trigger: trigger.name().to_string(),
                            timestamp: Utc::now(),
                            attempt: hops,
                        });
                    }
                    return Ok(moved);
                }
                Err(failure) => failure,
            };

            let kind = failure.kind();
            let mut restored = failure.into_holder();
            restored.set_state(initial.clone());

            let Some(recovery) = movement.recovery_trigger(&kind).cloned() else {
                tracing::warn!(
                    state = initial.name(),
                    trigger = trigger.name(),
                    failure = kind.name(),
                    "Movement failed with no recovery trigger configured"
                );
                let error = FsmError::NoMovementForTrigger {
                    state: initial.name().to_string(),
                    trigger: None,
                };
                return Err(FireError::new(restored, error));
            };

            if hops >= self.config.max_recovery_hops {
                let error = FsmError::RecoveryDepthExceeded {
                    state: initial.name().to_string(),
                    trigger: recovery.name().to_string(),
                    hops,
                };
                return Err(FireError::new(restored, error));
            }

            tracing::warn!(
                state = initial.name(),
                trigger = trigger.name(),
                failure = kind.name(),
                recovery = recovery.name(),
                "Movement failed, state restored; rerouting"
            );

            hops += 1;
            holder = restored;
            trigger = recovery;
        }
    }
}

impl<S: State, T: Trigger, H> fmt::Debug for Fsm<S, T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fsm")
            .field("table", &self.table)
            .field("config", &self.config)
            .finish()
    }
}
