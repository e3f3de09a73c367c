//! The auto-vivifying accessor protocol.

use indexmap::map::Entry;

use crate::{Key, RibbonError, RibbonResult, Value, Wrapper};

use super::Ribbon;

impl Ribbon {
    /// Default read: return the value at `key`, inserting and returning an
    /// empty ribbon when the key is absent.
    ///
    /// Every miss writes back, so a second read returns the same container.
    ///
    /// ```rust
    /// use ribbon::Ribbon;
    ///
    /// let mut ribbon = Ribbon::new();
    /// assert!(ribbon.get("fresh").is_container());
    /// assert!(ribbon.contains_key("fresh"));
    /// ```
    pub fn get(&mut self, key: impl Into<Key>) -> &mut Value {
        match self.entries_mut().entry(key.into()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                tracing::trace!(key = %entry.key(), "auto-vivifying nested ribbon");
                entry.insert(Value::Ribbon(Self::new()))
            }
        }
    }

    /// Chained descent: default-read `key` and return it as a container.
    ///
    /// Wrapped entries yield their inner ribbon.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::NotAContainer`] when `key` holds a leaf. The leaf
    /// is left in place.
    pub fn child(&mut self, key: impl Into<Key>) -> RibbonResult<&mut Self> {
        let key = key.into();
        match self.get(key.clone()) {
            Value::Ribbon(ribbon) => Ok(ribbon),
            Value::Wrapper(wrapper) => Ok(wrapper.ribbon_mut()),
            leaf => Err(RibbonError::not_a_container(key, leaf)),
        }
    }

    /// Store `value` at `key` and return the stored value.
    ///
    /// Overwriting an existing key keeps its position in iteration order.
    pub fn put(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Value {
        let value = value.into();
        match self.entries_mut().entry(key.into()) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                *slot = value;
                slot
            }
            Entry::Vacant(entry) => entry.insert(value),
        }
    }

    /// Store `value` at `key` and return the receiver for fluent chaining.
    ///
    /// ```rust
    /// use ribbon::Ribbon;
    ///
    /// let mut ribbon = Ribbon::new();
    /// ribbon
    ///     .set_and_return_self("host", "localhost")
    ///     .set_and_return_self("port", 8080);
    /// assert_eq!(ribbon.len(), 2);
    /// ```
    pub fn set_and_return_self(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> &mut Self {
        self.put(key, value);
        self
    }

    /// Read `key` without creating it.
    #[must_use]
    pub fn peek(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries().get(&key.into())
    }

    /// Read `key` without creating it, falling back to `default`.
    #[must_use]
    pub fn peek_or<'a>(&'a self, key: impl Into<Key>, default: &'a Value) -> &'a Value {
        self.peek(key).unwrap_or(default)
    }

    /// Wrapped fetch: default-read `key` and present the nested container as a
    /// [`Wrapper`], converting a bare ribbon entry in place.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::NotAContainer`] when `key` holds a leaf.
    pub fn wrapped(&mut self, key: impl Into<Key>) -> RibbonResult<&mut Wrapper> {
        let key = key.into();
        let value = self.get(key.clone());
        if let Value::Ribbon(ribbon) = value {
            let inner = std::mem::take(ribbon);
            *value = Value::Wrapper(Wrapper::new(inner));
        }
        match value {
            Value::Wrapper(wrapper) => Ok(wrapper),
            other => Err(RibbonError::not_a_container(key, other)),
        }
    }
}
