//! Test helpers shared across crates.
//!
//! This crate provides a recording host component, the configuration
//! fixtures used throughout the behavioural suites and text normalization
//! for step placeholders.

pub mod fixtures;
pub mod recording;
pub mod text;

pub use recording::{RecordingComponent, Rendered};
