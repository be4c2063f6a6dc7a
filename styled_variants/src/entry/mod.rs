//! Configuration entries accepted by [`crate::styled`].
//!
//! A component definition is an ordered list of [`ConfigEntry`] values. Each
//! entry is either a bare class-name string applied unconditionally or a
//! [`VariantSpec`] describing prop-driven classes. Entries are composed with
//! an [`EntryComposer`] or collected directly from an iterator, and their
//! serialized form uses the camelCase keys familiar from CSS-in-JS tooling:
//!
//! ```json
//! [
//!   "btn",
//!   {
//!     "variants": { "size": { "sm": "text-sm", "lg": "text-lg" } },
//!     "defaultVariants": { "size": "sm" },
//!     "compoundVariants": [{ "size": "lg", "outlined": true, "className": "border-2" }],
//!     "forwardProps": ["size"]
//!   }
//! ]
//! ```

mod codec;
mod composer;

use serde::{Deserialize, Serialize};

use crate::ordered::OrderedMap;
use crate::value::VariantValue;

pub use composer::EntryComposer;

/// One element of a component definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigEntry {
    /// Whitespace-delimited class names applied unconditionally.
    ClassNames(String),
    /// Structured variant configuration.
    Variants(VariantSpec),
}

impl From<&str> for ConfigEntry {
    fn from(value: &str) -> Self {
        Self::ClassNames(value.to_owned())
    }
}

impl From<String> for ConfigEntry {
    fn from(value: String) -> Self {
        Self::ClassNames(value)
    }
}

impl From<VariantSpec> for ConfigEntry {
    fn from(value: VariantSpec) -> Self {
        Self::Variants(value)
    }
}

/// Prop-driven class configuration.
///
/// # Examples
///
/// ```
/// use styled_variants::{CompoundRule, VariantSpec};
///
/// let spec = VariantSpec::new()
///     .variant("intent", [("primary", "bg-blue"), ("danger", "bg-red")])
///     .variant("outlined", [("true", "border")])
///     .default_variant("intent", "primary")
///     .compound(CompoundRule::new([("intent", "danger")], "ring-red").require("outlined", true))
///     .forward("intent");
/// assert_eq!(spec.variants.keys().collect::<Vec<_>>(), vec!["intent", "outlined"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariantSpec {
    /// Variant name to stringified value to class string.
    pub variants: OrderedMap<OrderedMap<String>>,
    /// Values used when a variant prop is absent.
    pub default_variants: OrderedMap<VariantValue>,
    /// Rules applied when several props match at once.
    pub compound_variants: Vec<CompoundRule>,
    /// Variant names passed through to the wrapped component.
    pub forward_props: Vec<String>,
}

impl VariantSpec {
    /// Create an empty specification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variant with its value-to-class mapping.
    ///
    /// Declaring the same variant twice appends the new values; an existing
    /// value is replaced.
    #[must_use]
    pub fn variant<K, C, I>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<VariantValue>,
        C: Into<String>,
    {
        let variant: String = name.into();
        let slot = self.variants.entry_or_default(&variant);
        for (value, classes) in values {
            let key = Into::<VariantValue>::into(value).to_key().into_owned();
            slot.insert(key, classes.into());
        }
        self
    }

    /// Set the value assumed for `name` when the prop is not supplied.
    #[must_use]
    pub fn default_variant(mut self, name: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.default_variants.insert(name, value.into());
        self
    }

    /// Append a compound rule.
    #[must_use]
    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.compound_variants.push(rule);
        self
    }

    /// Mark a variant to be forwarded to the wrapped component.
    #[must_use]
    pub fn forward(mut self, name: impl Into<String>) -> Self {
        self.forward_props.push(name.into());
        self
    }
}

/// Extra classes applied when every listed prop holds the required value.
///
/// Serializes as a flat object: every key except `className` is a
/// requirement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompoundRule {
    /// Variant name to required value.
    pub required_values: OrderedMap<VariantValue>,
    /// Whitespace-delimited classes added on match.
    pub class_name: String,
}

impl CompoundRule {
    /// Create a rule from its requirements and class string.
    #[must_use]
    pub fn new<K, V, I>(requirements: I, class_name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<VariantValue>,
    {
        Self {
            required_values: requirements
                .into_iter()
                .map(|(k, v)| (k, v.into()))
                .collect(),
            class_name: class_name.into(),
        }
    }

    /// Add another requirement.
    #[must_use]
    pub fn require(mut self, name: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.required_values.insert(name, value.into());
        self
    }
}
