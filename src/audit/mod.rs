//! Validation-based configuration audits.
//!
//! The engine accepts any table and pipeline, and misconfiguration only
//! shows up when a movement runs. Audits find those shapes ahead of time
//! using Stillwater's `Validation`, accumulating ALL findings in one pass
//! instead of stopping at the first.
//!
//! Audits are advisory: nothing in the engine runs them implicitly.
//!
//! # Example
//!
//! ```rust
//! use railyard::audit::{audit_table, findings};
//! use railyard::builder::TableBuilder;
//! use railyard::core::Stateful;
//! use railyard::engine::Movement;
//!
//! let table = TableBuilder::<String, &str, Stateful<String, ()>>::new()
//!     .add_movement(
//!         "NEW".to_string(),
//!         "PAY",
//!         Movement::to("PAID".to_string()).recover_with("PAY_FAILED"),
//!     )
//!     .and_then(|b| b.build())
//!     .unwrap();
//!
//! let result = audit_table(&table);
//! assert_eq!(findings(&result).len(), 1);
//! ```

pub mod findings;
pub mod rules;

pub use findings::AuditFinding;
pub use rules::{audit_pipeline, audit_table, findings, AuditResult};
