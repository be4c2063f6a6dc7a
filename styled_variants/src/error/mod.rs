//! Error types produced while loading serialized style configuration.
//!
//! Merging and resolution never fail; only decoding entries from JSON or
//! TOML can.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::StyledError;

#[cfg(test)]
mod tests;
