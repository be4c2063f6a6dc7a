//! Primary error enum for configuration loading.

use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors that can occur while loading style configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StyledError {
    /// The input was not valid JSON.
    #[error("Failed to parse JSON style configuration: {source}")]
    Json {
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// The input was not valid TOML.
    #[cfg(feature = "toml")]
    #[error("Failed to parse TOML style configuration: {source}")]
    Toml {
        /// Underlying parser error.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// The top level of the document had the wrong shape.
    #[error("Style configuration must be {expected}, found {found}")]
    Shape {
        /// Description of the accepted shape.
        expected: &'static str,
        /// Description of what was supplied.
        found: String,
    },

    /// One entry of the list could not be decoded.
    #[error("Invalid style entry at index {index}: {message}")]
    InvalidEntry {
        /// Position of the entry in the list.
        index: usize,
        /// Human-readable explanation.
        message: String,
    },

    /// Several entries failed to decode.
    #[error("multiple style configuration errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
