//! Values stored in a ribbon.

use serde::{Serialize, Serializer};
use serde_json::Value as Plain;

use crate::{Ribbon, Wrapper};

/// A value held by a [`Ribbon`].
///
/// Equality is structural and ignores presentation: a [`Value::Ribbon`] and a
/// [`Value::Wrapper`] holding equal entries compare equal. Like
/// [`Ribbon`] equality, it ignores the order of nested keys.
#[derive(Clone, Debug)]
pub enum Value {
    /// An opaque leaf.
    Leaf(Plain),
    /// A nested container.
    Ribbon(Ribbon),
    /// A nested container presented through a [`Wrapper`].
    Wrapper(Wrapper),
}

impl Value {
    /// Returns `true` for nested containers, wrapped or bare.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Ribbon(_) | Self::Wrapper(_))
    }

    /// Returns `true` for leaves.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns `true` when the value is presented through a [`Wrapper`].
    #[must_use]
    pub const fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapper(_))
    }

    /// Borrow the leaf payload.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&Plain> {
        match self {
            Self::Leaf(plain) => Some(plain),
            Self::Ribbon(_) | Self::Wrapper(_) => None,
        }
    }

    /// Borrow the nested ribbon, looking through a wrapper.
    #[must_use]
    pub fn as_ribbon(&self) -> Option<&Ribbon> {
        match self {
            Self::Ribbon(ribbon) => Some(ribbon),
            Self::Wrapper(wrapper) => Some(wrapper.ribbon()),
            Self::Leaf(_) => None,
        }
    }

    /// Mutably borrow the nested ribbon, looking through a wrapper.
    #[must_use]
    pub fn as_ribbon_mut(&mut self) -> Option<&mut Ribbon> {
        match self {
            Self::Ribbon(ribbon) => Some(ribbon),
            Self::Wrapper(wrapper) => Some(wrapper.ribbon_mut()),
            Self::Leaf(_) => None,
        }
    }

    /// Convenience accessor for integer leaves.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_leaf().and_then(Plain::as_i64)
    }

    /// Convenience accessor for string leaves.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_leaf().and_then(Plain::as_str)
    }

    /// Short name of the value's kind, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Ribbon(_) => "ribbon",
            Self::Wrapper(_) => "wrapper",
            Self::Leaf(plain) => plain_kind(plain),
        }
    }

    /// Convert to plain data without mutating `self`.
    #[must_use]
    pub fn to_plain(&self) -> Plain {
        match self {
            Self::Leaf(plain) => plain.clone(),
            Self::Ribbon(ribbon) => ribbon.to_plain(),
            Self::Wrapper(wrapper) => wrapper.to_plain(),
        }
    }
}

pub(crate) const fn plain_kind(plain: &Plain) -> &'static str {
    match plain {
        Plain::Null => "null",
        Plain::Bool(_) => "boolean",
        Plain::Number(_) => "number",
        Plain::String(_) => "string",
        Plain::Array(_) => "array",
        Plain::Object(_) => "object",
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Leaf(a), Self::Leaf(b)) => a == b,
            (Self::Leaf(_), _) | (_, Self::Leaf(_)) => false,
            _ => self.as_ribbon() == other.as_ribbon(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(plain) => plain.serialize(serializer),
            Self::Ribbon(ribbon) => ribbon.serialize(serializer),
            Self::Wrapper(wrapper) => wrapper.ribbon().serialize(serializer),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Ribbon(Ribbon::new())
    }
}

impl From<Ribbon> for Value {
    fn from(value: Ribbon) -> Self {
        Self::Ribbon(value)
    }
}

impl From<Wrapper> for Value {
    fn from(value: Wrapper) -> Self {
        Self::Wrapper(value)
    }
}

/// Objects are ingested into nested ribbons; everything else is a leaf.
impl From<Plain> for Value {
    fn from(value: Plain) -> Self {
        match value {
            Plain::Object(map) => Self::Ribbon(Ribbon::from(map)),
            other => Self::Leaf(other),
        }
    }
}

macro_rules! leaf_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Leaf(Plain::from(value))
                }
            }
        )*
    };
}

leaf_from!(&str, String, bool, i8, i16, i32, i64, u8, u16, u32, u64, f64);

impl<T: Into<Plain>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Leaf(Plain::Array(value.into_iter().map(Into::into).collect()))
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Leaf(Plain::Null), Into::into)
    }
}
