//! Scalar values carried by variant configuration and component props.
//!
//! Variant lookups are keyed by the *stringified* value of a prop, so both
//! [`VariantValue`] and [`PropValue`] expose a key rendering that mirrors how
//! the literal would print in markup: `true` becomes `"true"`, `1` becomes
//! `"1"` and `1.0` also becomes `"1"`.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A literal a variant may be keyed on.
///
/// Used for default variants and compound rule requirements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantValue {
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Floating point literal.
    Float(f64),
    /// String literal.
    Str(String),
}

impl VariantValue {
    /// Render the value as a lookup key.
    #[must_use]
    pub fn to_key(&self) -> Cow<'_, str> {
        match self {
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::Int(i) => Cow::Owned(i.to_string()),
            Self::Float(f) => Cow::Owned(float_key(*f)),
            Self::Str(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

/// Floats print without a trailing `.0` so `1.0` and `1` share a key.
fn float_key(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        };
    }
    // `Display` already omits the fractional part for integral floats and
    // prints negative zero as `-0`; markup prints it as `0`.
    if value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_key())
    }
}

impl From<bool> for VariantValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for VariantValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for VariantValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for VariantValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for VariantValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for VariantValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for VariantValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// A value supplied to a component instance.
///
/// Scalars participate in variant resolution. [`PropValue::Opaque`] carries
/// anything else a host component may need (callbacks, child nodes) and is
/// forwarded untouched; it never matches a variant key.
#[derive(Clone)]
pub enum PropValue {
    /// An explicit null.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating point scalar.
    Float(f64),
    /// String scalar.
    Str(String),
    /// Shared value opaque to class resolution.
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl PropValue {
    /// Wrap an arbitrary value as an opaque prop.
    #[must_use]
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(Arc::new(value))
    }

    /// Render the value as a variant lookup key.
    ///
    /// Returns `None` for opaque values, which have no key rendering.
    #[must_use]
    pub fn to_key(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null => Some(Cow::Borrowed("null")),
            Self::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Self::Int(i) => Some(Cow::Owned(i.to_string())),
            Self::Float(f) => Some(Cow::Owned(float_key(*f))),
            Self::Str(s) => Some(Cow::Borrowed(s.as_str())),
            Self::Opaque(_) => None,
        }
    }

    /// Borrow the value as a string slice when it is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Downcast an opaque value to `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Opaque(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<VariantValue> for PropValue {
    fn from(value: VariantValue) -> Self {
        match value {
            VariantValue::Bool(b) => Self::Bool(b),
            VariantValue::Int(i) => Self::Int(i),
            VariantValue::Float(f) => Self::Float(f),
            VariantValue::Str(s) => Self::Str(s),
        }
    }
}

impl From<&VariantValue> for PropValue {
    fn from(value: &VariantValue) -> Self {
        Self::from(value.clone())
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}
