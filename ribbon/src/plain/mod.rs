//! The plain-data boundary.
//!
//! Plain data is a [`serde_json::Value`] tree with no ribbon or wrapper nodes.
//! Ribbons are built from plain maps by copying them in, and rendered back
//! with [`Ribbon::to_plain`], which never mutates its input. Text formats are
//! collaborators layered on this boundary; see `formats`.

mod formats;

pub use formats::Format;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned, ser::SerializeMap};
use serde_json::{Map, Value as Plain};

use crate::{Ribbon, RibbonError, RibbonResult, Value, value::plain_kind};

/// Build a ribbon from plain data. Equivalent to [`Ribbon::from_plain`].
///
/// # Errors
///
/// Returns [`RibbonError::InvalidSource`] when `plain` is not an object.
pub fn from_plain(plain: Plain) -> RibbonResult<Ribbon> {
    Ribbon::from_plain(plain)
}

impl Ribbon {
    /// Build a ribbon from plain data, copying every nested object into a
    /// nested ribbon. Arrays and scalars are stored as leaves.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::InvalidSource`] when `plain` is not an object.
    pub fn from_plain(plain: Plain) -> RibbonResult<Self> {
        match plain {
            Plain::Object(map) => Ok(Self::from(map)),
            other => Err(RibbonError::invalid_source(format!(
                "expected a map, found {}",
                plain_kind(&other)
            ))),
        }
    }

    /// Build a ribbon from any serialisable value that renders as a map.
    ///
    /// ```rust
    /// use ribbon::Ribbon;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Server { host: &'static str, port: u16 }
    ///
    /// let ribbon = Ribbon::from_serialize(&Server { host: "localhost", port: 80 })?;
    /// assert_eq!(ribbon.peek("port").and_then(|v| v.as_i64()), Some(80));
    /// # Ok::<_, ribbon::RibbonError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::InvalidSource`] when the value cannot be rendered
    /// as plain data or does not render as a map.
    pub fn from_serialize<T>(source: &T) -> RibbonResult<Self>
    where
        T: Serialize + ?Sized,
    {
        let plain = serde_json::to_value(source)
            .map_err(|err| RibbonError::invalid_source(err.to_string()))?;
        Self::from_plain(plain)
    }

    /// Render the tree as plain data. Keys are rendered with their `Display`
    /// form; when two keys render identically the later entry wins.
    #[must_use]
    pub fn to_plain(&self) -> Plain {
        Plain::Object(
            self.iter()
                .map(|(key, value)| (key.to_string(), value.to_plain()))
                .collect(),
        )
    }

    /// Deserialise the tree into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::Deserialize`] when the contents do not match `T`.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> RibbonResult<T> {
        Ok(serde_json::from_value(self.to_plain())?)
    }
}

impl From<Map<String, Plain>> for Ribbon {
    fn from(map: Map<String, Plain>) -> Self {
        map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
    }
}

impl TryFrom<Plain> for Ribbon {
    type Error = RibbonError;

    fn try_from(plain: Plain) -> Result<Self, Self::Error> {
        Self::from_plain(plain)
    }
}

impl From<&Ribbon> for Plain {
    fn from(ribbon: &Ribbon) -> Self {
        ribbon.to_plain()
    }
}

impl Serialize for Ribbon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Ribbon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let plain = Plain::deserialize(deserializer)?;
        Self::from_plain(plain).map_err(serde::de::Error::custom)
    }
}

impl Serialize for crate::Wrapper {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ribbon().serialize(serializer)
    }
}
