//! Action failures and their kinds.
//!
//! A failure kind is the exact concrete type of the error an action
//! returned. Matching is by identity only: a recovery route registered for
//! one error type never catches a different type, however related.

use std::any::{type_name, TypeId};
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Boxed source error carried by a failed action.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Classification tag for an action failure, matched by exact type identity.
///
/// # Example
///
/// ```rust
/// use railyard::core::FailureKind;
///
/// #[derive(Debug)]
/// struct Timeout;
/// #[derive(Debug)]
/// struct Declined;
///
/// assert_eq!(FailureKind::of::<Timeout>(), FailureKind::of::<Timeout>());
/// assert_ne!(FailureKind::of::<Timeout>(), FailureKind::of::<Declined>());
/// ```
#[derive(Clone, Copy)]
pub struct FailureKind {
    id: TypeId,
    name: &'static str,
}

impl FailureKind {
    /// Kind identified by the concrete type `E`.
    pub fn of<E: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: type_name::<E>(),
        }
    }

    /// Fully qualified type name, for logging.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for FailureKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FailureKind {}

impl Hash for FailureKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FailureKind").field(&self.name).finish()
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Failed action outcome.
///
/// Hands the holder back to the engine together with the failure's kind so
/// the engine can restore the state and reroute.
pub struct ActionError<H> {
    holder: H,
    kind: FailureKind,
    source: BoxError,
}

impl<H> ActionError<H> {
    /// Fail with `error`, classified by its concrete type `E`.
    pub fn new<E>(holder: H, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            holder,
            kind: FailureKind::of::<E>(),
            source: Box::new(error),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn source(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn holder(&self) -> &H {
        &self.holder
    }

    /// Take back the holder, dropping the failure details.
    pub fn into_holder(self) -> H {
        self.holder
    }

    /// Split into holder, kind and source error.
    pub fn into_parts(self) -> (H, FailureKind, BoxError) {
        (self.holder, self.kind, self.source)
    }
}

impl<H> fmt::Debug for ActionError<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionError")
            .field("kind", &self.kind)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Outcome of a movement action.
pub type ActionResult<H> = Result<H, ActionError<H>>;
