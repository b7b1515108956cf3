//! Transition table and the dispatch engine that executes it.
//!
//! # Key Concepts
//!
//! - **Movement**: one configured edge with actions, a target state and
//!   failure recovery routes
//! - **StateConfig / TransitionTable**: the static (state, trigger) -> movement
//!   configuration
//! - **Fsm**: executes one movement per `fire`, turning action failures into
//!   recovery movements from the state the holder started in

mod machine;
mod movement;
mod table;

pub use machine::Fsm;
pub use movement::{fail, Movement, MovementAction};
pub use table::{StateConfig, TransitionTable};
