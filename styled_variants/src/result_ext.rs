//! Extensions for mapping errors to `StyledResult` concisely.
//!
//! Loader code converts parser errors with
//! [`StyledResultExt::into_styled`] instead of repeating
//! `.map_err(|e| Arc::new(e.into()))`.
//!
//! # Examples
//!
//! ```
//! use styled_variants::{StyledResult, StyledResultExt};
//!
//! fn parse() -> StyledResult<serde_json::Value> {
//!     serde_json::from_str("[\"btn\"]").into_styled()
//! }
//! assert!(parse().is_ok());
//! ```

use std::sync::Arc;

use crate::StyledError;

/// Result alias used by the loading APIs.
pub type StyledResult<T> = Result<T, Arc<StyledError>>;

/// Map any `Result<T, E>` with `E: Into<StyledError>` into a
/// [`StyledResult`].
pub trait StyledResultExt<T, E> {
    /// Convert the error into a shared [`StyledError`].
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion.
    fn into_styled(self) -> StyledResult<T>;
}

impl<T, E> StyledResultExt<T, E> for Result<T, E>
where
    E: Into<StyledError>,
{
    fn into_styled(self) -> StyledResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
