//! Multi-step walks driven by pipelines.
//!
//! Two walk shapes exist:
//!
//! - [`Fsm::walk`] consults the plan before every movement, including the
//!   first: a holder in a state absent from the plan is returned untouched.
//! - [`Fsm::walk_from`] (and [`PipelineFsm`]) fires a caller-supplied trigger
//!   first, unconditionally, and only then follows the plan.
//!
//! Neither walk is bounded. A plan that keeps the holder inside planned
//! states loops forever; keeping plans acyclic is the caller's job.
//!
//! A failing step hands the holder back as it entered that step, so the
//! progress made by earlier steps is kept.

use super::plan::Pipeline;
use super::registry::PipelineRegistry;
use crate::core::{State, StateHistory, StateHolder, Trigger};
use crate::engine::Fsm;
use crate::error::FireError;
use std::fmt::Display;
use std::hash::Hash;

impl<S: State, T: Trigger, H: StateHolder<S>> Fsm<S, T, H> {
    /// Walk `holder` along `pipeline` until its state has no planned trigger.
    pub fn walk(&self, holder: H, pipeline: &Pipeline<S, T>) -> Result<H, FireError<H>> {
        self.follow(holder, pipeline, None)
    }

    /// Like [`walk`](Self::walk), also returning every completed movement.
    pub fn walk_recorded(
        &self,
        holder: H,
        pipeline: &Pipeline<S, T>,
    ) -> Result<(H, StateHistory<S>), FireError<H>> {
        let mut history = StateHistory::new();
        let holder = self.follow(holder, pipeline, Some(&mut history))?;
        Ok((holder, history))
    }

    /// Fire `trigger`, then walk along `pipeline` from wherever that left the holder.
    pub fn walk_from(
        &self,
        trigger: T,
        holder: H,
        pipeline: &Pipeline<S, T>,
    ) -> Result<H, FireError<H>> {
        tracing::debug!(trigger = trigger.name(), "Firing initial trigger before following pipeline");
        let holder = self.dispatch(trigger, holder, None)?;
        self.follow(holder, pipeline, None)
    }

    fn follow(
        &self,
        holder: H,
        pipeline: &Pipeline<S, T>,
        mut journal: Option<&mut StateHistory<S>>,
    ) -> Result<H, FireError<H>> {
        let mut result = holder;

        // Terminates once the holder reaches a state the plan says nothing about.
        while let Some(trigger) = pipeline.trigger_for(result.state()) {
            tracing::debug!(
                state = result.state().name(),
                trigger = trigger.name(),
                "Pipeline step"
            );
            result = self.dispatch(trigger.clone(), result, journal.as_deref_mut())?;
        }

        if result.state().is_error() {
            tracing::warn!(state = result.state().name(), "Pipeline ended in an error state");
        } else {
            tracing::debug!(
                state = result.state().name(),
                "No further movement defined in pipeline"
            );
        }
        Ok(result)
    }
}

/// Machine paired with a registry of named pipelines.
///
/// Walks fire the supplied trigger first, then follow the selected plan.
pub struct PipelineFsm<S: State, T: Trigger, H, P> {
    fsm: Fsm<S, T, H>,
    registry: PipelineRegistry<P, S, T>,
}

impl<S, T, H, P> PipelineFsm<S, T, H, P>
where
    S: State,
    T: Trigger,
    H: StateHolder<S>,
    P: Eq + Hash + Display,
{
    pub fn new(fsm: Fsm<S, T, H>, registry: PipelineRegistry<P, S, T>) -> Self {
        Self { fsm, registry }
    }

    pub fn fsm(&self) -> &Fsm<S, T, H> {
        &self.fsm
    }

    pub fn registry(&self) -> &PipelineRegistry<P, S, T> {
        &self.registry
    }

    /// Single movement, as [`Fsm::fire`].
    pub fn fire(&self, trigger: T, holder: H) -> Result<H, FireError<H>> {
        self.fsm.fire(trigger, holder)
    }

    /// Fire `trigger`, then follow the pipeline registered under `id`.
    ///
    /// Fails with `PipelineNotFound` before any movement if `id` is unknown.
    /// The holder comes back untouched in that case.
    pub fn walk_on(&self, trigger: T, holder: H, id: &P) -> Result<H, FireError<H>> {
        let pipeline = match self.registry.resolve(id) {
            Ok(pipeline) => pipeline,
            Err(error) => return Err(FireError::new(holder, error)),
        };
        tracing::debug!(pipeline = %id, "Walking on registered pipeline");
        self.fsm.walk_from(trigger, holder, pipeline)
    }

    /// Fire `trigger`, then follow `pipeline`.
    pub fn walk_on_pipeline(
        &self,
        trigger: T,
        holder: H,
        pipeline: &Pipeline<S, T>,
    ) -> Result<H, FireError<H>> {
        self.fsm.walk_from(trigger, holder, pipeline)
    }
}
