//! Multi-key paths through nested ribbons.
//!
//! The methods on [`Ribbon`] accept any sequence of keys. [`KeyPath`] is the
//! parsed form of a dotted identifier path such as `server.tls.port`, used by
//! the [`crate::Wrapper`] convenience surface.

use std::{fmt, str::FromStr};

use crate::{Key, RibbonError, RibbonResult, Value, key::is_identifier};

use super::Ribbon;

/// A parsed dotted path whose segments are identifier-shaped keys.
///
/// ```rust
/// use ribbon::KeyPath;
///
/// let path: KeyPath = "server.tls.port".parse()?;
/// assert_eq!(path.len(), 3);
/// assert!("server..port".parse::<KeyPath>().is_err());
/// # Ok::<_, ribbon::RibbonError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<Key>,
}

impl KeyPath {
    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; parsing rejects empty paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Borrow the segments.
    #[must_use]
    pub fn segments(&self) -> &[Key] {
        &self.segments
    }
}

impl FromStr for KeyPath {
    type Err = RibbonError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        if path.is_empty() {
            return Err(RibbonError::invalid_path(path, "path is empty"));
        }
        let segments = path
            .split('.')
            .map(|segment| {
                if is_identifier(segment) {
                    Ok(Key::from(segment))
                } else {
                    Err(RibbonError::invalid_path(
                        path,
                        format!("segment '{segment}' is not an identifier"),
                    ))
                }
            })
            .collect::<RibbonResult<Vec<_>>>()?;
        Ok(Self { segments })
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl Ribbon {
    /// Descend through `keys`, auto-vivifying every missing segment, and return
    /// the innermost ribbon. An empty sequence returns `self`.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::NotAContainer`] at the first segment holding a
    /// leaf. Segments vivified before that point remain in place.
    pub fn descend<I>(&mut self, keys: I) -> RibbonResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let mut node = self;
        for key in keys {
            node = node.child(key)?;
        }
        Ok(node)
    }

    /// Store `value` at the end of `keys`, vivifying intermediate ribbons.
    ///
    /// ```rust
    /// use ribbon::Ribbon;
    /// use serde_json::json;
    ///
    /// let mut ribbon = Ribbon::new();
    /// ribbon.set_path(["db", "primary", "port"], 5432)?;
    /// assert_eq!(ribbon.to_plain(), json!({"db": {"primary": {"port": 5432}}}));
    /// # Ok::<_, ribbon::RibbonError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::InvalidPath`] for an empty sequence and
    /// [`RibbonError::NotAContainer`] when an intermediate segment is a leaf.
    pub fn set_path<I>(&mut self, keys: I, value: impl Into<Value>) -> RibbonResult<&mut Value>
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let mut keys: Vec<Key> = keys.into_iter().map(Into::into).collect();
        let Some(last) = keys.pop() else {
            return Err(RibbonError::invalid_path("", "path is empty"));
        };
        Ok(self.descend(keys)?.put(last, value))
    }

    /// Read the value at the end of `keys` without creating anything.
    ///
    /// Returns `None` when a segment is missing or a leaf blocks the way.
    #[must_use]
    pub fn peek_path<I>(&self, keys: I) -> Option<&Value>
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        let mut keys = keys.into_iter();
        let mut current = self.peek(keys.next()?)?;
        for key in keys {
            current = current.as_ribbon()?.peek(key)?;
        }
        Some(current)
    }
}
