//! Depth-first wrap/unwrap rewrites.
//!
//! Both rewrites mutate the tree in place and are idempotent: wrapping an
//! already wrapped tree, or unwrapping a bare one, changes nothing.

use crate::{Ribbon, Value};

use super::Wrapper;

/// Wrap every nested container below `root` and return the root as a
/// [`Wrapper`]. Accepts either a [`Ribbon`] or a [`Wrapper`].
///
/// ```rust
/// use ribbon::{Ribbon, wrap_all};
///
/// let mut ribbon = Ribbon::new();
/// ribbon.child("a")?.child("b")?.put("c", 1);
/// let wrapped = wrap_all(ribbon);
/// assert!(wrapped.peek("a").is_some_and(|a| a.is_wrapped()));
/// # Ok::<_, ribbon::RibbonError>(())
/// ```
#[must_use]
pub fn wrap_all(root: impl Into<Ribbon>) -> Wrapper {
    let mut ribbon = root.into();
    tracing::debug!(entries = ribbon.len(), "wrapping ribbon tree");
    ribbon.wrap_all();
    Wrapper::new(ribbon)
}

/// Unwrap every nested [`Wrapper`] below `root` and return the bare root.
/// Accepts either a [`Ribbon`] or a [`Wrapper`].
#[must_use]
pub fn unwrap_all(root: impl Into<Ribbon>) -> Ribbon {
    let mut ribbon = root.into();
    tracing::debug!(entries = ribbon.len(), "unwrapping ribbon tree");
    ribbon.unwrap_all();
    ribbon
}

impl Ribbon {
    /// Present every nested container below this level through a [`Wrapper`].
    /// Leaves are untouched.
    pub fn wrap_all(&mut self) {
        tracing::trace!(entries = self.len(), "wrapping nested ribbons");
        for value in self.values_mut() {
            let replacement = match value {
                Value::Ribbon(ribbon) => {
                    ribbon.wrap_all();
                    Some(Value::Wrapper(Wrapper::new(std::mem::take(ribbon))))
                }
                Value::Wrapper(wrapper) => {
                    wrapper.ribbon_mut().wrap_all();
                    None
                }
                Value::Leaf(_) => None,
            };
            if let Some(wrapped) = replacement {
                *value = wrapped;
            }
        }
    }

    /// Replace every nested [`Wrapper`] below this level with its bare inner
    /// ribbon. Leaves are untouched.
    pub fn unwrap_all(&mut self) {
        tracing::trace!(entries = self.len(), "unwrapping nested ribbons");
        for value in self.values_mut() {
            let replacement = match value {
                Value::Wrapper(wrapper) => {
                    let mut inner = wrapper.replace(Self::new());
                    inner.unwrap_all();
                    Some(Value::Ribbon(inner))
                }
                Value::Ribbon(ribbon) => {
                    ribbon.unwrap_all();
                    None
                }
                Value::Leaf(_) => None,
            };
            if let Some(bare) = replacement {
                *value = bare;
            }
        }
    }

    /// Returns `true` when no [`Wrapper`] appears anywhere below this level.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.values().all(|value| match value {
            Value::Wrapper(_) => false,
            Value::Ribbon(ribbon) => ribbon.is_bare(),
            Value::Leaf(_) => true,
        })
    }

    /// Returns `true` when every nested container below this level is a
    /// [`Wrapper`].
    #[must_use]
    pub fn is_fully_wrapped(&self) -> bool {
        self.values().all(|value| match value {
            Value::Wrapper(wrapper) => wrapper.is_fully_wrapped(),
            Value::Ribbon(_) => false,
            Value::Leaf(_) => true,
        })
    }
}
