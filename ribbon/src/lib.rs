//! Auto-vivifying nested key/value containers with structural deep merge.
//!
//! A [`Ribbon`] is an ordered map whose values are leaves, nested ribbons, or
//! [`Wrapper`]s. Reading an absent key through [`Ribbon::get`] stores and
//! returns a fresh empty ribbon, so deep paths can be built in one chained
//! expression. [`deep_merge`] combines two trees key by key, recursing into
//! nested containers and resolving leaf conflicts with an optional
//! caller-supplied resolver.
//!
//! ```rust
//! use ribbon::{Ribbon, deep_merge};
//! use serde_json::json;
//!
//! let mut defaults = Ribbon::new();
//! defaults.child("server")?.put("port", 3000);
//! defaults.child("server")?.put("host", "localhost");
//!
//! let overrides = Ribbon::from_plain(json!({"server": {"port": 4000}, "debug": true}))?;
//!
//! let merged = deep_merge(&defaults, &overrides);
//! assert_eq!(
//!     merged.to_plain(),
//!     json!({"server": {"port": 4000, "host": "localhost"}, "debug": true}),
//! );
//! # Ok::<_, ribbon::RibbonError>(())
//! ```
//!
//! Plain data crosses the boundary as [`serde_json::Value`]. Text formats are
//! collaborators gated behind Cargo features: JSON is always available,
//! `toml` is enabled by default, and `yaml` and `json5` are opt-in.

mod container;
mod error;
mod key;
pub mod merge;
mod plain;
mod result_ext;
mod value;
mod wrapper;

pub use container::{KeyPath, Ribbon};
pub use error::{RibbonError, RibbonResult};
pub use key::Key;
pub use merge::{
    ConflictResolver, IncomingWins, KeepBase, deep_merge, deep_merge_in_place,
    deep_merge_in_place_with, deep_merge_with, merge_all, try_deep_merge_in_place_with,
    try_deep_merge_with,
};
pub use plain::{Format, from_plain};
pub use result_ext::RibbonResultExt;
pub use value::Value;
pub use wrapper::{Wrapper, unwrap_all, wrap_all};

/// Re-export of `serde_json` so callers can build plain data without adding
/// a direct dependency.
pub use serde_json;
