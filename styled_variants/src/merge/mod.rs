//! Merging configuration entries into a normalized, queryable form.
//!
//! [`ConfigMerger`] folds entries one at a time and [`ConfigMerger::finish`]
//! produces the immutable [`NormalizedConfig`] a component definition holds
//! for its lifetime. Merging never fails: duplicate variants accumulate,
//! empty tokens are dropped and repeated names are de-duplicated at the end.

use tracing::debug;

use crate::entry::{CompoundRule, ConfigEntry, VariantSpec};
use crate::ordered::OrderedMap;
use crate::value::VariantValue;

/// Compound rule with its class string already tokenized.
#[derive(Clone, Debug, PartialEq)]
pub struct CompoundClasses {
    /// Variant name to required value.
    pub required_values: OrderedMap<VariantValue>,
    /// Classes appended when every requirement matches.
    pub class_names: Vec<String>,
}

/// Normalized configuration shared by every instance of one definition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedConfig {
    default_class_names: Vec<String>,
    variant_classes: OrderedMap<OrderedMap<Vec<String>>>,
    variant_props: Vec<String>,
    forward_props: Vec<String>,
    stripped_props: Vec<String>,
    default_props: OrderedMap<VariantValue>,
    compound_variants: Vec<CompoundClasses>,
}

impl NormalizedConfig {
    /// Merge `entries` in order.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ConfigEntry>,
    {
        let mut merger = ConfigMerger::new();
        for entry in entries {
            merger.merge_entry(entry);
        }
        merger.finish()
    }

    /// Classes applied unconditionally.
    #[must_use]
    pub fn default_class_names(&self) -> &[String] {
        &self.default_class_names
    }

    /// Accumulated classes for `variant` holding the stringified `value`.
    #[must_use]
    pub fn variant_classes(&self, variant: &str, value: &str) -> Option<&[String]> {
        self.variant_classes
            .get(variant)
            .and_then(|values| values.get(value))
            .map(Vec::as_slice)
    }

    /// Every declared variant name in first-seen order.
    #[must_use]
    pub fn variant_props(&self) -> &[String] {
        &self.variant_props
    }

    /// Variant names forwarded to the wrapped component.
    #[must_use]
    pub fn forward_props(&self) -> &[String] {
        &self.forward_props
    }

    /// Variant names removed before forwarding.
    #[must_use]
    pub fn stripped_props(&self) -> &[String] {
        &self.stripped_props
    }

    /// Default value for `variant`, if one was declared.
    #[must_use]
    pub fn default_prop(&self, variant: &str) -> Option<&VariantValue> {
        self.default_props.get(variant)
    }

    /// All declared defaults, last declaration winning.
    #[must_use]
    pub const fn default_props(&self) -> &OrderedMap<VariantValue> {
        &self.default_props
    }

    /// Compound rules in declaration order.
    #[must_use]
    pub fn compound_variants(&self) -> &[CompoundClasses] {
        &self.compound_variants
    }

    /// Whether `prop` is removed before forwarding.
    #[must_use]
    pub fn is_stripped(&self, prop: &str) -> bool {
        self.stripped_props.iter().any(|p| p == prop)
    }
}

/// Merge `entries` in order into a [`NormalizedConfig`].
///
/// # Examples
///
/// ```
/// use styled_variants::{ConfigEntry, VariantSpec, merge};
///
/// let config = merge([
///     ConfigEntry::from("card shadow"),
///     VariantSpec::new()
///         .variant("elevated", [(true, "shadow-lg")])
///         .forward("elevated")
///         .into(),
/// ]);
/// assert_eq!(config.default_class_names(), ["card", "shadow"]);
/// assert_eq!(config.forward_props(), ["elevated"]);
/// assert!(config.stripped_props().is_empty());
/// ```
#[must_use]
pub fn merge<I>(entries: I) -> NormalizedConfig
where
    I: IntoIterator<Item = ConfigEntry>,
{
    NormalizedConfig::from_entries(entries)
}

/// Accumulating merge state.
///
/// Lists are collected with duplicates and only de-duplicated in
/// [`ConfigMerger::finish`], so first-seen order across all entries wins.
#[derive(Debug, Default)]
pub struct ConfigMerger {
    default_class_names: Vec<String>,
    variant_classes: OrderedMap<OrderedMap<Vec<String>>>,
    variant_props: Vec<String>,
    forward_props: Vec<String>,
    default_props: OrderedMap<VariantValue>,
    compound_variants: Vec<CompoundClasses>,
    entries: usize,
}

impl ConfigMerger {
    /// Create an empty merger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one entry into the accumulated state.
    pub fn merge_entry(&mut self, entry: ConfigEntry) {
        self.entries += 1;
        match entry {
            ConfigEntry::ClassNames(class_names) => {
                self.default_class_names.extend(split_classes(&class_names));
            }
            ConfigEntry::Variants(spec) => self.merge_spec(spec),
        }
    }

    fn merge_spec(&mut self, spec: VariantSpec) {
        let VariantSpec {
            variants,
            default_variants,
            compound_variants,
            forward_props,
        } = spec;

        for (name, values) in variants {
            let slot = self.variant_classes.entry_or_default(&name);
            for (value, class_names) in values {
                slot.entry_or_default(&value)
                    .extend(split_classes(&class_names));
            }
            self.variant_props.push(name);
        }
        for (name, value) in default_variants {
            self.default_props.insert(name, value);
        }
        self.forward_props.extend(forward_props);
        self.compound_variants
            .extend(compound_variants.into_iter().map(tokenize_rule));
    }

    /// Finish merging and produce the normalized configuration.
    #[must_use]
    pub fn finish(self) -> NormalizedConfig {
        let default_class_names = unique(self.default_class_names);
        let variant_props = unique(self.variant_props);
        let forward_props = unique(self.forward_props);
        let stripped_props: Vec<String> = variant_props
            .iter()
            .filter(|name| !forward_props.contains(*name))
            .cloned()
            .collect();

        debug!(
            entries = self.entries,
            variants = variant_props.len(),
            stripped = stripped_props.len(),
            compound_rules = self.compound_variants.len(),
            "merged style configuration"
        );

        NormalizedConfig {
            default_class_names,
            variant_classes: self.variant_classes,
            variant_props,
            forward_props,
            stripped_props,
            default_props: self.default_props,
            compound_variants: self.compound_variants,
        }
    }
}

fn tokenize_rule(rule: CompoundRule) -> CompoundClasses {
    CompoundClasses {
        class_names: split_classes(&rule.class_name).collect(),
        required_values: rule.required_values,
    }
}

/// Split a class string on whitespace, dropping empty tokens.
pub(crate) fn split_classes(class_names: &str) -> impl Iterator<Item = String> + '_ {
    class_names.split_whitespace().map(str::to_owned)
}

/// De-duplicate keeping the first occurrence of each item.
pub(crate) fn unique(items: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}
