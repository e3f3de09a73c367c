//! Conflict resolvers for leaf-level merge conflicts.

use std::convert::Infallible;

use crate::{Key, Value};

/// Decides the value stored when both sides of a merge hold a value at the
/// same key and at least one of them is a leaf.
///
/// Closures are accepted through [`crate::deep_merge_with`] (infallible) and
/// [`crate::try_deep_merge_with`] (fallible); implement this trait directly for
/// reusable or stateful policies.
pub trait ConflictResolver {
    /// Error raised when the resolver refuses a conflict.
    type Error;

    /// Resolve the conflict at `key` between the `base` and `incoming` values.
    ///
    /// # Errors
    ///
    /// Implementations return `Self::Error` to abort the merge.
    fn resolve(&mut self, key: &Key, base: &Value, incoming: &Value) -> Result<Value, Self::Error>;
}

/// The default policy: the incoming value always wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct IncomingWins;

impl ConflictResolver for IncomingWins {
    type Error = Infallible;

    fn resolve(&mut self, _key: &Key, _base: &Value, incoming: &Value) -> Result<Value, Self::Error> {
        Ok(incoming.clone())
    }
}

/// Keep whatever the base already holds; incoming values only fill gaps.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepBase;

impl ConflictResolver for KeepBase {
    type Error = Infallible;

    fn resolve(&mut self, _key: &Key, base: &Value, _incoming: &Value) -> Result<Value, Self::Error> {
        Ok(base.clone())
    }
}

/// Adapter for infallible closures.
pub(crate) struct FnResolver<F>(pub(crate) F);

impl<F> ConflictResolver for FnResolver<F>
where
    F: FnMut(&Key, &Value, &Value) -> Value,
{
    type Error = Infallible;

    fn resolve(&mut self, key: &Key, base: &Value, incoming: &Value) -> Result<Value, Self::Error> {
        Ok((self.0)(key, base, incoming))
    }
}

/// Adapter for fallible closures.
pub(crate) struct TryFnResolver<F>(pub(crate) F);

impl<F, E> ConflictResolver for TryFnResolver<F>
where
    F: FnMut(&Key, &Value, &Value) -> Result<Value, E>,
{
    type Error = E;

    fn resolve(&mut self, key: &Key, base: &Value, incoming: &Value) -> Result<Value, Self::Error> {
        (self.0)(key, base, incoming)
    }
}
