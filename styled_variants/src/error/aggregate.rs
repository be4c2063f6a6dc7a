//! Aggregation container for multiple `StyledError` values.

use std::{error::Error, fmt, sync::Arc};

use super::StyledError;

/// Collection of [`StyledError`]s produced by a single load.
///
/// # Examples
///
/// ```
/// use styled_variants::StyledError;
/// let e = StyledError::aggregate(vec![
///     StyledError::invalid_entry(0, "expected a string or an object"),
///     StyledError::invalid_entry(3, "expected a string or an object"),
/// ]);
/// if let StyledError::Aggregate(agg) = e {
///     assert_eq!(agg.len(), 2);
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<Arc<StyledError>>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<Arc<StyledError>>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &StyledError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregation is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a StyledError;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, Arc<StyledError>>,
        fn(&'a Arc<StyledError>) -> &'a StyledError,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().map(Arc::as_ref)
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = Arc<StyledError>;
    type IntoIter = std::vec::IntoIter<Arc<StyledError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
