//! Builder API for assembling transition tables.
//!
//! A single flat `TableBuilder` collects (state, trigger) -> movement
//! entries and is finalized by one `build` call. `MovementBuilder` validates
//! that each entry names its source state, trigger and target state.

pub mod error;
pub mod macros;
pub mod movement;
pub mod table;

pub use error::BuildError;
pub use movement::MovementBuilder;
pub use table::TableBuilder;

use crate::core::{State, Trigger};

/// Start a movement from `from` by `on`.
///
/// # Example
///
/// ```
/// use railyard::builder::{movement, TableBuilder};
/// use railyard::core::Stateful;
///
/// let table = TableBuilder::<String, &str, Stateful<String, ()>>::new()
///     .movement(movement("NEW".to_string(), "PAY").to("PAID".to_string()))
///     .and_then(|b| b.build())
///     .unwrap();
///
/// assert!(table.contains_state(&"NEW".to_string()));
/// ```
pub fn movement<S, T, H>(from: S, on: T) -> MovementBuilder<S, T, H>
where
    S: State,
    T: Trigger,
{
    MovementBuilder::new().from(from).on(on)
}
