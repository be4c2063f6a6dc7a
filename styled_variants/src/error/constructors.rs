//! Constructors and aggregation helpers for `StyledError`.

use std::sync::Arc;

use super::{AggregatedErrors, StyledError};

impl StyledError {
    /// Tries to build a [`StyledError`] from an iterator of errors.
    ///
    /// Returns `None` for an empty iterator, the error itself when exactly
    /// one uniquely owned error is supplied, and [`Self::Aggregate`]
    /// otherwise.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.len() > 1 {
            return Some(Self::Aggregate(Box::new(AggregatedErrors::new(arcs))));
        }
        let last = arcs.pop()?;
        Some(match Arc::try_unwrap(last) {
            Ok(err) => err,
            Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
        })
    }

    /// Build a [`StyledError`] from at least one error.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty. Use [`StyledError::try_aggregate`] when
    /// the list may be empty.
    #[must_use]
    #[track_caller]
    pub fn aggregate<I, E>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        Self::try_aggregate(errors).map_or_else(
            || panic!("aggregate requires at least one error"),
            |err| err,
        )
    }

    /// Construct an invalid-entry error.
    ///
    /// # Examples
    ///
    /// ```
    /// use styled_variants::StyledError;
    /// let e = StyledError::invalid_entry(2, "expected a string or an object");
    /// assert!(matches!(e, StyledError::InvalidEntry { index: 2, .. }));
    /// ```
    #[must_use]
    pub fn invalid_entry(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidEntry {
            index,
            message: message.into(),
        }
    }

    /// Construct a shape error describing the unexpected top-level value.
    #[must_use]
    pub fn shape(expected: &'static str, found: impl Into<String>) -> Self {
        Self::Shape {
            expected,
            found: found.into(),
        }
    }
}
