//! Text collaborators for the plain-data boundary.
//!
//! JSON is always available. TOML is enabled by the default `toml` feature;
//! YAML (`yaml`, backed by `serde-saphyr`) and JSON5 (`json5`) are opt-in.
//! Parsers produce plain data that is ingested with [`Ribbon::from_plain`];
//! renderers serialise the ribbon directly.

use std::fmt;

use serde_json::Value as Plain;

use crate::{Ribbon, RibbonError, RibbonResult, RibbonResultExt};

/// Text formats understood by the collaborators.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Format {
    /// JSON.
    Json,
    /// JSON5.
    Json5,
    /// TOML.
    Toml,
    /// YAML 1.2.
    Yaml,
}

impl Format {
    /// Guess a format from a file extension, ignoring ASCII case.
    ///
    /// ```rust
    /// use ribbon::Format;
    ///
    /// assert_eq!(Format::from_extension("YML"), Some(Format::Yaml));
    /// assert_eq!(Format::from_extension("ini"), None);
    /// ```
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "json5" => Some(Self::Json5),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Json5 => "JSON5",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        })
    }
}

#[cfg_attr(
    all(feature = "toml", feature = "yaml", feature = "json5"),
    expect(dead_code, reason = "every format is compiled in")
)]
fn feature_disabled(format: Format, feature: &str) -> RibbonError {
    RibbonError::Parse {
        format,
        source: Box::new(std::io::Error::other(format!(
            "{feature} feature disabled: enable the '{feature}' feature to support this format"
        ))),
    }
}

impl Ribbon {
    /// Parse `text` in the given `format`.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::Parse`] when the text is malformed or the
    /// format's feature is disabled, and [`RibbonError::InvalidSource`] when
    /// the document is not a map.
    pub fn parse(format: Format, text: &str) -> RibbonResult<Self> {
        match format {
            Format::Json => Self::from_json_str(text),
            Format::Toml => {
                #[cfg(feature = "toml")]
                {
                    Self::from_toml_str(text)
                }
                #[cfg(not(feature = "toml"))]
                {
                    Err(feature_disabled(format, "toml"))
                }
            }
            Format::Yaml => {
                #[cfg(feature = "yaml")]
                {
                    Self::from_yaml_str(text)
                }
                #[cfg(not(feature = "yaml"))]
                {
                    Err(feature_disabled(format, "yaml"))
                }
            }
            Format::Json5 => {
                #[cfg(feature = "json5")]
                {
                    Self::from_json5_str(text)
                }
                #[cfg(not(feature = "json5"))]
                {
                    Err(feature_disabled(format, "json5"))
                }
            }
        }
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::Parse`] for malformed JSON and
    /// [`RibbonError::InvalidSource`] when the document is not an object.
    pub fn from_json_str(text: &str) -> RibbonResult<Self> {
        let plain: Plain = serde_json::from_str(text).into_parse(Format::Json)?;
        Self::from_plain(plain)
    }

    /// Render as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::Render`] when serialisation fails.
    pub fn to_json_string(&self) -> RibbonResult<String> {
        serde_json::to_string(self).into_render(Format::Json)
    }

    /// Render as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::Render`] when serialisation fails.
    pub fn to_json_string_pretty(&self) -> RibbonResult<String> {
        serde_json::to_string_pretty(self).into_render(Format::Json)
    }

    /// Parse a TOML document. Datetimes become string leaves in their RFC 3339
    /// form.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::Parse`] for malformed TOML.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(text: &str) -> RibbonResult<Self> {
        let table: toml::Table = toml::from_str(text).into_parse(Format::Toml)?;
        Self::from_plain(toml_to_plain(toml::Value::Table(table)))
    }

    /// Render as TOML. TOML has no null, so ribbons holding null leaves cannot
    /// be rendered.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::Render`] when the tree cannot be expressed in
    /// TOML.
    #[cfg(feature = "toml")]
    pub fn to_toml_string(&self) -> RibbonResult<String> {
        toml::to_string(self).into_render(Format::Toml)
    }

    /// Parse a YAML 1.2 document. Booleans are strict, so `yes` and `on`
    /// remain strings.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::Parse`] for malformed YAML and
    /// [`RibbonError::InvalidSource`] when the document is not a mapping.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(text: &str) -> RibbonResult<Self> {
        let plain: Plain = serde_saphyr::from_str_with_options(
            text,
            serde_saphyr::Options {
                strict_booleans: true,
                ..serde_saphyr::Options::default()
            },
        )
        .into_parse(Format::Yaml)?;
        Self::from_plain(plain)
    }

    /// Parse a JSON5 document.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::Parse`] for malformed JSON5 and
    /// [`RibbonError::InvalidSource`] when the document is not an object.
    #[cfg(feature = "json5")]
    pub fn from_json5_str(text: &str) -> RibbonResult<Self> {
        let plain: Plain = json5::from_str(text).into_parse(Format::Json5)?;
        Self::from_plain(plain)
    }
}

/// Datetimes have no plain counterpart and are kept as their textual form.
#[cfg(feature = "toml")]
fn toml_to_plain(value: toml::Value) -> Plain {
    match value {
        toml::Value::String(s) => Plain::String(s),
        toml::Value::Integer(n) => Plain::from(n),
        toml::Value::Float(f) => Plain::from(f),
        toml::Value::Boolean(b) => Plain::Bool(b),
        toml::Value::Datetime(dt) => Plain::String(dt.to_string()),
        toml::Value::Array(items) => Plain::Array(items.into_iter().map(toml_to_plain).collect()),
        toml::Value::Table(table) => Plain::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_plain(value)))
                .collect(),
        ),
    }
}
