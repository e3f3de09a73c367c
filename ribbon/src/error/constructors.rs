//! Constructors for `RibbonError`.

use crate::{Key, Value};

use super::RibbonError;

impl RibbonError {
    /// Construct a [`RibbonError::NotAContainer`] describing the value found at
    /// `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ribbon::{RibbonError, Value};
    /// let err = RibbonError::not_a_container("port", &Value::from(8080));
    /// assert!(matches!(err, RibbonError::NotAContainer { found: "number", .. }));
    /// ```
    #[must_use]
    pub fn not_a_container(key: impl Into<Key>, found: &Value) -> Self {
        Self::NotAContainer {
            key: key.into(),
            found: found.kind(),
        }
    }

    /// Construct a [`RibbonError::InvalidSource`].
    #[must_use]
    pub fn invalid_source(reason: impl Into<String>) -> Self {
        Self::InvalidSource {
            reason: reason.into(),
        }
    }

    /// Construct a [`RibbonError::InvalidPath`].
    #[must_use]
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Construct a [`RibbonError::Conflict`] for use inside fallible
    /// resolvers.
    ///
    /// # Examples
    ///
    /// ```
    /// use ribbon::{Ribbon, RibbonError, try_deep_merge_with};
    /// use serde_json::json;
    ///
    /// let base = Ribbon::from_plain(json!({"port": 80}))?;
    /// let incoming = Ribbon::from_plain(json!({"port": 8080}))?;
    /// let err = try_deep_merge_with(&base, &incoming, |key, _, _| {
    ///     Err(RibbonError::conflict(key, "ports may not be overridden"))
    /// })
    /// .unwrap_err();
    /// assert!(matches!(err, RibbonError::Conflict { .. }));
    /// # Ok::<_, RibbonError>(())
    /// ```
    #[must_use]
    pub fn conflict(key: impl Into<Key>, message: impl Into<String>) -> Self {
        Self::Conflict {
            key: key.into(),
            message: message.into(),
        }
    }
}
