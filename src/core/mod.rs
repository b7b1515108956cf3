//! Core identifier, holder and failure types.
//!
//! This module contains the vocabulary shared by the whole crate:
//! - State and trigger identifiers via the `State` and `Trigger` traits
//! - The `StateHolder` capability and the `Stateful` value type
//! - Failure kinds and action outcomes
//! - Immutable movement history

mod failure;
mod history;
mod holder;
mod state;

pub use failure::{ActionError, ActionResult, BoxError, FailureKind};
pub use history::{StateHistory, StateTransition};
pub use holder::{StateHolder, Stateful};
pub use state::{State, Trigger};
