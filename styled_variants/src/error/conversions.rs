//! Conversions from external error types into `StyledError`.

use super::StyledError;

impl From<serde_json::Error> for StyledError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for StyledError {
    fn from(source: toml::de::Error) -> Self {
        Self::Toml {
            source: Box::new(source),
        }
    }
}
