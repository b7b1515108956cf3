//! Railyard: a table-driven finite state machine with failure rerouting
//!
//! A transition table maps (state, trigger) pairs to movements. Firing a
//! trigger runs the movement's action, moves the holder to the target
//! state and runs the post-action. When an action fails, the holder is put
//! back in the state it started in and a recovery trigger chosen by the
//! failure's exact kind is fired instead.
//!
//! # Core Concepts
//!
//! - **State / Trigger**: identifiers via the `State` and `Trigger` traits
//! - **Holder**: any value carrying a state, passed through actions by value
//! - **Movement**: one edge with actions, a target and recovery routes
//! - **Pipeline**: a plan (state -> trigger) used to walk many movements
//!
//! # Example
//!
//! ```rust
//! use railyard::{fail, Fsm, Movement, Pipeline, Stateful, TableBuilder};
//! use thiserror::Error;
//!
//! #[derive(Debug, Error)]
//! #[error("card declined")]
//! struct Declined;
//!
//! type Order = Stateful<String, u32>;
//!
//! let fsm: Fsm<String, &str, Order> = TableBuilder::new()
//!     .add_movement(
//!         "NEW".to_string(),
//!         "PAY",
//!         Movement::to("PAID".to_string())
//!             .with_action(|order: Order| {
//!                 if order.data == 0 {
//!                     fail(order, Declined)
//!                 } else {
//!                     Ok(order)
//!                 }
//!             })
//!             .recover_on::<Declined>("DECLINE"),
//!     )
//!     .and_then(|b| b.route("NEW".to_string(), "DECLINE", "REJECTED".to_string()))
//!     .and_then(|b| b.route("PAID".to_string(), "SHIP", "SHIPPED".to_string()))
//!     .and_then(|b| b.build_fsm())
//!     .unwrap();
//!
//! let rejected = fsm.fire("PAY", Stateful::new("NEW".to_string(), 0)).unwrap();
//! assert_eq!(rejected.state, "REJECTED");
//!
//! let plan = Pipeline::try_from(vec![
//!     ("NEW".to_string(), "PAY"),
//!     ("PAID".to_string(), "SHIP"),
//! ])
//! .unwrap();
//! let shipped = fsm.walk(Stateful::new("NEW".to_string(), 42), &plan).unwrap();
//! assert_eq!(shipped.state, "SHIPPED");
//! ```

pub mod audit;
pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use builder::{BuildError, MovementBuilder, TableBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::FsmConfig;
pub use crate::core::{
    ActionError, ActionResult, FailureKind, State, StateHistory, StateHolder, StateTransition,
    Stateful, Trigger,
};
pub use engine::{fail, Fsm, Movement, StateConfig, TransitionTable};
pub use error::{FireError, FsmError};
pub use pipeline::{Pipeline, PipelineFsm, PipelineRegistry};
