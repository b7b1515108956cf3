//! Named collections of pipelines.

use super::plan::Pipeline;
use crate::builder::BuildError;
use crate::core::{State, Trigger};
use crate::error::FsmError;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// Pipelines selectable by identifier.
#[derive(Clone, Debug)]
pub struct PipelineRegistry<P, S: State, T: Trigger> {
    pipelines: HashMap<P, Pipeline<S, T>>,
}

impl<P, S, T> PipelineRegistry<P, S, T>
where
    P: Eq + Hash + Display,
    S: State,
    T: Trigger,
{
    pub fn new() -> Self {
        Self {
            pipelines: HashMap::new(),
        }
    }

    /// Register `pipeline` under `id`. Ids are unique.
    pub fn register(mut self, id: P, pipeline: Pipeline<S, T>) -> Result<Self, BuildError> {
        if self.pipelines.contains_key(&id) {
            return Err(BuildError::DuplicatePipeline {
                pipeline: id.to_string(),
            });
        }
        self.pipelines.insert(id, pipeline);
        Ok(self)
    }

    pub fn get(&self, id: &P) -> Option<&Pipeline<S, T>> {
        self.pipelines.get(id)
    }

    /// Pipeline registered under `id`, or `PipelineNotFound`.
    pub fn resolve(&self, id: &P) -> Result<&Pipeline<S, T>, FsmError> {
        self.pipelines
            .get(id)
            .ok_or_else(|| FsmError::PipelineNotFound {
                pipeline: id.to_string(),
            })
    }

    pub fn ids(&self) -> impl Iterator<Item = &P> {
        self.pipelines.keys()
    }

    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }
}

impl<P, S, T> Default for PipelineRegistry<P, S, T>
where
    P: Eq + Hash + Display,
    S: State,
    T: Trigger,
{
    fn default() -> Self {
        Self::new()
    }
}
