//! Presentation wrapper over a ribbon.
//!
//! A [`Wrapper`] owns exactly one [`Ribbon`] and forwards every map and
//! accessor operation to it through `Deref`. On top of that it offers the
//! identifier-shaped convenience surface: dotted paths such as
//! `"server.tls.port"` that are parsed into a [`KeyPath`] and walked with
//! auto-vivification.

mod transform;

pub use transform::{unwrap_all, wrap_all};

use std::ops::{Deref, DerefMut};

use crate::{KeyPath, Ribbon, RibbonResult, Value};

/// Convenience presentation of a [`Ribbon`].
///
/// The wrapped ribbon starts empty and only allocates on the first write. It
/// can be replaced wholesale with [`Wrapper::replace`].
///
/// ```rust
/// use ribbon::Wrapper;
/// use serde_json::json;
///
/// let mut settings = Wrapper::default();
/// settings
///     .set("server.host", "localhost")?
///     .set("server.port", 8080)?;
/// assert_eq!(
///     settings.to_plain(),
///     json!({"server": {"host": "localhost", "port": 8080}}),
/// );
/// # Ok::<_, ribbon::RibbonError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wrapper {
    ribbon: Ribbon,
}

impl Wrapper {
    /// Wrap `ribbon`.
    #[must_use]
    pub const fn new(ribbon: Ribbon) -> Self {
        Self { ribbon }
    }

    /// Borrow the wrapped ribbon.
    #[must_use]
    pub const fn ribbon(&self) -> &Ribbon {
        &self.ribbon
    }

    /// Mutably borrow the wrapped ribbon.
    #[must_use]
    pub const fn ribbon_mut(&mut self) -> &mut Ribbon {
        &mut self.ribbon
    }

    /// Replace the wrapped ribbon, returning the previous one.
    pub fn replace(&mut self, ribbon: Ribbon) -> Ribbon {
        std::mem::replace(&mut self.ribbon, ribbon)
    }

    /// Consume the wrapper and return the ribbon it owned.
    #[must_use]
    pub fn into_inner(self) -> Ribbon {
        self.ribbon
    }

    /// Walk a dotted identifier path, vivifying missing segments, and return
    /// the ribbon at its end.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RibbonError::InvalidPath`] for malformed paths and
    /// [`crate::RibbonError::NotAContainer`] when a segment holds a leaf.
    pub fn at(&mut self, path: &str) -> RibbonResult<&mut Ribbon> {
        let path: KeyPath = path.parse()?;
        self.ribbon.descend(&path)
    }

    /// Store `value` at a dotted identifier path and return the wrapper.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RibbonError::InvalidPath`] for malformed paths and
    /// [`crate::RibbonError::NotAContainer`] when an intermediate segment holds
    /// a leaf.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> RibbonResult<&mut Self> {
        let path: KeyPath = path.parse()?;
        self.ribbon.set_path(&path, value)?;
        Ok(self)
    }

    /// Read the value at a dotted identifier path without creating anything.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RibbonError::InvalidPath`] for malformed paths.
    pub fn lookup(&self, path: &str) -> RibbonResult<Option<&Value>> {
        let path: KeyPath = path.parse()?;
        Ok(self.ribbon.peek_path(&path))
    }
}

impl Deref for Wrapper {
    type Target = Ribbon;

    fn deref(&self) -> &Self::Target {
        &self.ribbon
    }
}

impl DerefMut for Wrapper {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.ribbon
    }
}

impl From<Ribbon> for Wrapper {
    fn from(value: Ribbon) -> Self {
        Self::new(value)
    }
}

impl From<Wrapper> for Ribbon {
    fn from(value: Wrapper) -> Self {
        value.into_inner()
    }
}

#[cfg(test)]
mod tests;
