//! Map keys.
//!
//! Keys are data rather than method names, so any string or integer may be
//! used without colliding with the container's own operations.

use std::fmt;

use serde::{Serialize, Serializer};

/// A key in a [`crate::Ribbon`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A string key.
    Str(String),
    /// An integer key.
    Int(i64),
}

impl Key {
    /// Returns the string form of the key when it is a string key.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// Returns `true` when the key can be spelled as an identifier segment of
    /// a dotted path (`[A-Za-z_][A-Za-z0-9_]*`).
    ///
    /// ```rust
    /// use ribbon::Key;
    ///
    /// assert!(Key::from("server_port").is_identifier());
    /// assert!(!Key::from("server-port").is_identifier());
    /// assert!(!Key::from(7).is_identifier());
    /// ```
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        self.as_str().is_some_and(is_identifier)
    }
}

pub(crate) fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|first| first == '_' || first.is_ascii_alphabetic())
        && chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

/// Plain maps only carry string keys, so keys always serialise through their
/// display form.
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Int(_) => serializer.collect_str(self),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<char> for Key {
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

macro_rules! int_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

int_key!(i8, i16, i32, i64, u8, u16, u32);
