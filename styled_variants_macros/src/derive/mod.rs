//! Derive implementations shared by the public macro entry points.

pub(crate) mod crate_path;
pub(crate) mod parse;
pub(crate) mod props;
pub(crate) mod rename;
pub(crate) mod type_utils;
pub(crate) mod value;
