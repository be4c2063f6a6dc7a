//! Loading configuration entries from serialized documents.
//!
//! A JSON document is either a single entry or an array of entries. A TOML
//! document holds the array under an `entries` key, since TOML has no
//! top-level arrays:
//!
//! ```toml
//! entries = [
//!   "btn",
//!   { variants = { size = { sm = "text-sm", lg = "text-lg" } }, defaultVariants = { size = "sm" } },
//! ]
//! ```
//!
//! Every entry is decoded independently so a document with several bad
//! entries reports all of them in one [`StyledError::Aggregate`].

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::entry::{ConfigEntry, VariantSpec};
use crate::{StyledError, StyledResult, StyledResultExt};

#[cfg(feature = "toml")]
const TOML_ENTRIES_KEY: &str = "entries";

/// Parse entries from a JSON string.
///
/// # Examples
///
/// ```
/// use styled_variants::{ConfigEntry, entries_from_json};
///
/// let entries = entries_from_json(r#"["btn", {"variants": {"size": {"lg": "text-lg"}}}]"#)?;
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0], ConfigEntry::from("btn"));
/// # Ok::<_, std::sync::Arc<styled_variants::StyledError>>(())
/// ```
///
/// # Errors
///
/// Returns [`StyledError::Json`] for malformed JSON and
/// [`StyledError::InvalidEntry`] (or an aggregate of them) for entries of
/// the wrong shape.
pub fn entries_from_json(input: &str) -> StyledResult<Vec<ConfigEntry>> {
    let value: Value = serde_json::from_str(input).into_styled()?;
    entries_from_value(value)
}

/// Parse entries from a TOML string holding an `entries` array.
///
/// # Errors
///
/// Returns [`StyledError::Toml`] for malformed TOML,
/// [`StyledError::Shape`] when the `entries` key is missing or not an array,
/// and entry errors as for [`entries_from_json`].
#[cfg(feature = "toml")]
pub fn entries_from_toml(input: &str) -> StyledResult<Vec<ConfigEntry>> {
    let mut document: Value = toml::from_str(input).into_styled()?;
    let entries = document
        .as_object_mut()
        .and_then(|table| table.remove(TOML_ENTRIES_KEY))
        .ok_or_else(|| {
            Arc::new(StyledError::shape(
                "a table with an `entries` array",
                "no `entries` key",
            ))
        })?;
    if !entries.is_array() {
        return Err(Arc::new(StyledError::shape(
            "an `entries` array",
            kind(&entries),
        )));
    }
    entries_from_value(entries)
}

/// Decode entries from an already parsed JSON value.
///
/// # Errors
///
/// Returns [`StyledError::InvalidEntry`] for each entry that is neither a
/// string nor a well-formed variant object, aggregated when there are
/// several.
pub fn entries_from_value(value: Value) -> StyledResult<Vec<ConfigEntry>> {
    let items = match value {
        Value::Array(items) => items,
        single @ (Value::String(_) | Value::Object(_)) => vec![single],
        other => {
            return Err(Arc::new(StyledError::shape(
                "an entry or an array of entries",
                kind(&other),
            )));
        }
    };

    let mut entries = Vec::with_capacity(items.len());
    let mut errors = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match decode_entry(index, item) {
            Ok(entry) => entries.push(entry),
            Err(err) => errors.push(err),
        }
    }
    if let Some(err) = StyledError::try_aggregate(errors) {
        return Err(Arc::new(err));
    }
    debug!(entries = entries.len(), "loaded style entries");
    Ok(entries)
}

fn decode_entry(index: usize, item: Value) -> Result<ConfigEntry, StyledError> {
    match item {
        Value::String(class_names) => Ok(ConfigEntry::ClassNames(class_names)),
        Value::Object(_) => serde_json::from_value::<VariantSpec>(item)
            .map(ConfigEntry::Variants)
            .map_err(|err| StyledError::invalid_entry(index, err.to_string())),
        other => Err(StyledError::invalid_entry(
            index,
            format!("expected a string or an object, found {}", kind(&other)),
        )),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
