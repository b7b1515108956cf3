//! Linear execution plans.

use crate::builder::BuildError;
use crate::core::{State, Trigger};
use std::collections::HashMap;

/// Plan mapping each state to the trigger to fire while a walk is in it.
///
/// For `A --t1--> B --t2--> C` the pipeline is `{A: t1, B: t2}`; `C` is
/// absent and therefore terminal for the walk.
///
/// # Example
///
/// ```rust
/// use railyard::pipeline::Pipeline;
///
/// let pipeline = Pipeline::new()
///     .add_pipe("A".to_string(), "T1")
///     .and_then(|p| p.add_pipe("B".to_string(), "T2"))
///     .unwrap();
///
/// assert_eq!(pipeline.trigger_for(&"A".to_string()), Some(&"T1"));
/// assert_eq!(pipeline.trigger_for(&"C".to_string()), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pipeline<S: State, T: Trigger> {
    triggers: HashMap<S, T>,
}

impl<S: State, T: Trigger> Pipeline<S, T> {
    pub fn new() -> Self {
        Self {
            triggers: HashMap::new(),
        }
    }

    /// Plan to fire `trigger` whenever the walk is in `from`.
    ///
    /// A state can appear once; adding a second trigger for it is rejected.
    pub fn add_pipe(mut self, from: S, trigger: T) -> Result<Self, BuildError> {
        if self.triggers.contains_key(&from) {
            return Err(BuildError::DuplicatePipe {
                state: from.name().to_string(),
            });
        }
        self.triggers.insert(from, trigger);
        Ok(self)
    }

    /// Trigger planned for `state`, if any.
    pub fn trigger_for(&self, state: &S) -> Option<&T> {
        self.triggers.get(state)
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.triggers.contains_key(state)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &T)> {
        self.triggers.iter()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

impl<S: State, T: Trigger> Default for Pipeline<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger> TryFrom<Vec<(S, T)>> for Pipeline<S, T> {
    type Error = BuildError;

    fn try_from(pipes: Vec<(S, T)>) -> Result<Self, Self::Error> {
        pipes
            .into_iter()
            .try_fold(Pipeline::new(), |pipeline, (from, trigger)| {
                pipeline.add_pipe(from, trigger)
            })
    }
}
