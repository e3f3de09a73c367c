//! Extensions for mapping collaborator errors into `RibbonResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| RibbonError::Parse { .. })`
//! patterns when a text collaborator reports a failure.
//!
//! - Use [`RibbonResultExt::into_parse`] for errors raised while reading text.
//! - Use [`RibbonResultExt::into_render`] for errors raised while writing text.
//!
//! # Examples
//!
//! ```
//! use ribbon::{Format, RibbonError, RibbonResult, RibbonResultExt};
//!
//! fn parse(text: &str) -> RibbonResult<serde_json::Value> {
//!     serde_json::from_str(text).into_parse(Format::Json)
//! }
//!
//! assert!(matches!(parse("{"), Err(RibbonError::Parse { .. })));
//! ```

use crate::{Format, RibbonError, RibbonResult};

/// Generic extension for tagging foreign errors with the format that raised
/// them.
pub trait RibbonResultExt<T> {
    /// Convert the error into [`RibbonError::Parse`].
    ///
    /// # Errors
    ///
    /// Propagates the original error boxed inside the parse variant.
    fn into_parse(self, format: Format) -> RibbonResult<T>;

    /// Convert the error into [`RibbonError::Render`].
    ///
    /// # Errors
    ///
    /// Propagates the original error boxed inside the render variant.
    fn into_render(self, format: Format) -> RibbonResult<T>;
}

impl<T, E> RibbonResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn into_parse(self, format: Format) -> RibbonResult<T> {
        self.map_err(|e| RibbonError::Parse {
            format,
            source: Box::new(e),
        })
    }

    fn into_render(self, format: Format) -> RibbonResult<T> {
        self.map_err(|e| RibbonError::Render {
            format,
            source: Box::new(e),
        })
    }
}
