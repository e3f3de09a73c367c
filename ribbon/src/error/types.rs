//! Primary error enum for container access, ingestion and text collaborators.

use thiserror::Error;

use crate::{Format, Key};

/// Convenience alias for results carrying a [`RibbonError`].
pub type RibbonResult<T> = Result<T, RibbonError>;

/// Errors that can occur while reading, building or converting ribbons.
///
/// Merging never raises on type conflicts and default reads never raise on
/// absent keys; those cases are absorbed by policy.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RibbonError {
    /// Chained descent was attempted through a leaf value.
    #[error("cannot descend through '{key}': it holds a {found}, not a container")]
    NotAContainer {
        /// Key whose value blocked the descent.
        key: Key,
        /// Kind of the value found at `key`.
        found: &'static str,
    },

    /// The source handed to an ingestion helper is not map-shaped.
    #[error("cannot build a ribbon from this source: {reason}")]
    InvalidSource {
        /// Why the source was rejected.
        reason: String,
    },

    /// A key path was empty or contained a malformed segment.
    #[error("invalid key path '{path}': {reason}")]
    InvalidPath {
        /// The offending path as written by the caller.
        path: String,
        /// Why the path was rejected.
        reason: String,
    },

    /// A text collaborator failed to parse its input.
    #[error("failed to parse {format} input: {source}")]
    Parse {
        /// Format being parsed.
        format: Format,
        /// Underlying parser error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A text collaborator failed to render a ribbon.
    #[error("failed to render {format} output: {source}")]
    Render {
        /// Format being rendered.
        format: Format,
        /// Underlying serialiser error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Plain data could not be deserialised into the requested type.
    #[error("failed to deserialise ribbon contents: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// A fallible conflict resolver refused to combine two values.
    #[error("merge conflict at '{key}': {message}")]
    Conflict {
        /// Key at which the conflict occurred.
        key: Key,
        /// Human-readable explanation from the resolver.
        message: String,
    },
}
