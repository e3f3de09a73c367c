//! Structural deep merge of ribbons.
//!
//! For every key of `incoming`, in insertion order:
//!
//! - keys absent from `base` receive a structural copy of the incoming value;
//! - keys holding containers on both sides are merged recursively;
//! - anything else (leaf against leaf, or leaf against container) is settled
//!   by a [`ConflictResolver`]. Without one, the incoming value wins.
//!
//! Keys only present in `base` are kept. Existing keys keep their position and
//! new keys are appended in `incoming` order. Type mismatches never raise.
//!
//! # Examples
//!
//! ```rust
//! use ribbon::{Ribbon, deep_merge, deep_merge_with};
//! use serde_json::json;
//!
//! let base = Ribbon::from_plain(json!({"a": 1, "b": {"c": 2}}))?;
//! let incoming = Ribbon::from_plain(json!({"b": {"c": 3, "d": 4}, "e": 5}))?;
//! assert_eq!(
//!     deep_merge(&base, &incoming).to_plain(),
//!     json!({"a": 1, "b": {"c": 3, "d": 4}, "e": 5}),
//! );
//!
//! // Sum conflicting numbers instead of letting the incoming side win.
//! let summed = deep_merge_with(&base, &incoming, |_, old, new| {
//!     match (old.as_i64(), new.as_i64()) {
//!         (Some(a), Some(b)) => (a + b).into(),
//!         _ => new.clone(),
//!     }
//! });
//! assert_eq!(summed.peek_path(["b", "c"]).and_then(|v| v.as_i64()), Some(5));
//! # Ok::<_, ribbon::RibbonError>(())
//! ```

mod resolver;

pub use resolver::{ConflictResolver, IncomingWins, KeepBase};

use std::convert::Infallible;

use crate::{Ribbon, Value};

use resolver::{FnResolver, TryFnResolver};

/// Merge `incoming` over `base` into a fresh ribbon; the incoming side wins
/// leaf conflicts. Neither input is modified and the result shares no
/// containers with them.
#[must_use]
pub fn deep_merge(base: &Ribbon, incoming: &Ribbon) -> Ribbon {
    let mut merged = base.clone();
    deep_merge_in_place(&mut merged, incoming);
    merged
}

/// Merge `incoming` over `base` into a fresh ribbon, settling leaf conflicts
/// with `resolver(key, base_value, incoming_value)`.
#[must_use]
pub fn deep_merge_with<F>(base: &Ribbon, incoming: &Ribbon, resolver: F) -> Ribbon
where
    F: FnMut(&crate::Key, &Value, &Value) -> Value,
{
    let mut merged = base.clone();
    deep_merge_in_place_with(&mut merged, incoming, resolver);
    merged
}

/// Merge `incoming` over `base` into a fresh ribbon with a fallible resolver.
///
/// # Errors
///
/// Returns the first error raised by `resolver`; `base` is left untouched.
pub fn try_deep_merge_with<F, E>(base: &Ribbon, incoming: &Ribbon, resolver: F) -> Result<Ribbon, E>
where
    F: FnMut(&crate::Key, &Value, &Value) -> Result<Value, E>,
{
    let mut merged = base.clone();
    try_deep_merge_in_place_with(&mut merged, incoming, resolver)?;
    Ok(merged)
}

/// Merge `incoming` into `base`, returning `base`; the incoming side wins leaf
/// conflicts. Values copied from `incoming` are cloned.
pub fn deep_merge_in_place<'a>(base: &'a mut Ribbon, incoming: &Ribbon) -> &'a mut Ribbon {
    merge_resolved(base, incoming, &mut IncomingWins)
}

/// Merge `incoming` into `base` with an infallible resolver, returning `base`.
pub fn deep_merge_in_place_with<'a, F>(base: &'a mut Ribbon, incoming: &Ribbon, resolver: F) -> &'a mut Ribbon
where
    F: FnMut(&crate::Key, &Value, &Value) -> Value,
{
    merge_resolved(base, incoming, &mut FnResolver(resolver))
}

/// Merge `incoming` into `base` with a fallible resolver, returning `base`.
///
/// # Errors
///
/// Returns the first error raised by `resolver`. The merge is best-effort, not
/// all-or-nothing: keys processed before the failure stay merged into `base`.
pub fn try_deep_merge_in_place_with<'a, F, E>(
    base: &'a mut Ribbon,
    incoming: &Ribbon,
    resolver: F,
) -> Result<&'a mut Ribbon, E>
where
    F: FnMut(&crate::Key, &Value, &Value) -> Result<Value, E>,
{
    merge_with_resolver(base, incoming, &mut TryFnResolver(resolver))
}

/// Merge `incoming` into `base` using any [`ConflictResolver`], returning
/// `base`.
///
/// # Errors
///
/// Returns the first error raised by `resolver`; earlier keys stay merged.
pub fn merge_with_resolver<'a, R>(
    base: &'a mut Ribbon,
    incoming: &Ribbon,
    resolver: &mut R,
) -> Result<&'a mut Ribbon, R::Error>
where
    R: ConflictResolver + ?Sized,
{
    tracing::debug!(
        base_entries = base.len(),
        incoming_entries = incoming.len(),
        "deep merging ribbons"
    );
    merge_into(base, incoming, resolver)?;
    Ok(base)
}

/// Fold `layers` left to right with [`deep_merge_in_place`]; later layers win
/// leaf conflicts.
///
/// ```rust
/// use ribbon::{Ribbon, merge_all};
/// use serde_json::json;
///
/// let defaults = Ribbon::from_plain(json!({"port": 3000, "log": {"level": "info"}}))?;
/// let file = Ribbon::from_plain(json!({"log": {"level": "debug"}}))?;
/// let cli = Ribbon::from_plain(json!({"port": 4000}))?;
///
/// let merged = merge_all([defaults, file, cli]);
/// assert_eq!(merged.to_plain(), json!({"port": 4000, "log": {"level": "debug"}}));
/// # Ok::<_, ribbon::RibbonError>(())
/// ```
#[must_use]
pub fn merge_all<I>(layers: I) -> Ribbon
where
    I: IntoIterator<Item = Ribbon>,
{
    let mut layers = layers.into_iter();
    let mut merged = layers.next().unwrap_or_default();
    for layer in layers {
        deep_merge_in_place(&mut merged, &layer);
    }
    merged
}

fn merge_resolved<'a, R>(base: &'a mut Ribbon, incoming: &Ribbon, resolver: &mut R) -> &'a mut Ribbon
where
    R: ConflictResolver<Error = Infallible>,
{
    match merge_with_resolver(base, incoming, resolver) {
        Ok(merged) => merged,
        Err(never) => match never {},
    }
}

fn merge_into<R>(base: &mut Ribbon, incoming: &Ribbon, resolver: &mut R) -> Result<(), R::Error>
where
    R: ConflictResolver + ?Sized,
{
    for (key, new) in incoming {
        let Some(old) = base.entries_mut().get_mut(key) else {
            base.entries_mut().insert(key.clone(), new.clone());
            continue;
        };
        if let (Some(old_ribbon), Some(new_ribbon)) = (old.as_ribbon_mut(), new.as_ribbon()) {
            merge_into(old_ribbon, new_ribbon, resolver)?;
            continue;
        }
        tracing::trace!(%key, base = old.kind(), incoming = new.kind(), "resolving leaf conflict");
        *old = resolver.resolve(key, old, new)?;
    }
    Ok(())
}

impl Ribbon {
    /// Method form of [`deep_merge`].
    #[must_use]
    pub fn deep_merge(&self, incoming: &Self) -> Self {
        deep_merge(self, incoming)
    }

    /// Method form of [`deep_merge_with`].
    #[must_use]
    pub fn deep_merge_with<F>(&self, incoming: &Self, resolver: F) -> Self
    where
        F: FnMut(&crate::Key, &Value, &Value) -> Value,
    {
        deep_merge_with(self, incoming, resolver)
    }

    /// Method form of [`deep_merge_in_place`].
    pub fn deep_merge_in_place(&mut self, incoming: &Self) -> &mut Self {
        deep_merge_in_place(self, incoming)
    }

    /// Method form of [`deep_merge_in_place_with`].
    pub fn deep_merge_in_place_with<F>(&mut self, incoming: &Self, resolver: F) -> &mut Self
    where
        F: FnMut(&crate::Key, &Value, &Value) -> Value,
    {
        deep_merge_in_place_with(self, incoming, resolver)
    }
}
