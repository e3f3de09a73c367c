//! The nested container and its map-shaped surface.
//!
//! [`Ribbon`] owns an insertion-ordered map from [`Key`] to [`Value`]. The
//! auto-vivifying accessor protocol lives in `access`, multi-key paths in
//! `path`; this module carries the storage and the plain map operations every
//! container forwards to.

mod access;
mod path;

pub use path::KeyPath;

use indexmap::IndexMap;

use crate::{Key, Value};

/// An ordered, auto-vivifying nested key/value container.
///
/// Iteration and rendering follow insertion order, but equality does not:
/// two ribbons holding the same entries in a different order compare equal.
/// Compare [`Ribbon::keys`] when order matters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ribbon {
    entries: IndexMap<Key, Value>,
}

impl Ribbon {
    /// Create an empty ribbon. No storage is allocated until the first write.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create an empty ribbon with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of entries at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when this level holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when `key` is present. Never auto-vivifies.
    #[must_use]
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }

    /// Mutably iterate over values in insertion order.
    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, Key, Value> {
        self.entries.values_mut()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Mutably iterate over entries in insertion order.
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Key, Value> {
        self.entries.iter_mut()
    }

    /// Remove `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.entries.shift_remove(&key.into())
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) const fn entries(&self) -> &IndexMap<Key, Value> {
        &self.entries
    }

    pub(crate) const fn entries_mut(&mut self) -> &mut IndexMap<Key, Value> {
        &mut self.entries
    }
}

impl<'a> IntoIterator for &'a Ribbon {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a mut Ribbon {
    type Item = (&'a Key, &'a mut Value);
    type IntoIter = indexmap::map::IterMut<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}

impl IntoIterator for Ribbon {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Ribbon
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Ribbon
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}
