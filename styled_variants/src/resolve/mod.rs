//! Per-render class resolution.
//!
//! [`resolve`] is a pure function of the normalized configuration, the prop
//! snapshot and the external class name. Class order is: defaults, external
//! classes, per-variant classes in variant declaration order, then compound
//! classes in rule order, de-duplicated keeping the first occurrence.
//!
//! Compound rules read the raw props by default. A compound requirement
//! equal to a declared default is *not* satisfied when the prop is omitted;
//! [`CompoundMatching::EffectiveValues`] opts into matching against the
//! default-substituted values instead.

mod class_list;

use std::borrow::Cow;

use tracing::trace;

use crate::merge::{CompoundClasses, NormalizedConfig, split_classes, unique};
use crate::props::Props;
use crate::value::PropValue;

pub use class_list::ClassList;

/// How compound rules read prop values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CompoundMatching {
    /// Compare requirements against the props exactly as supplied.
    #[default]
    RawProps,
    /// Compare requirements against props with default variants substituted.
    EffectiveValues,
}

/// Outcome of resolving one render.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution<'a> {
    /// Final ordered, de-duplicated classes.
    pub classes: ClassList,
    /// Prop names to remove before forwarding.
    pub strip: &'a [String],
}

/// Resolve classes for `props` with raw-prop compound matching.
///
/// # Examples
///
/// ```
/// use styled_variants::{CompoundRule, Props, VariantSpec, merge, resolve};
///
/// let config = merge([VariantSpec::new()
///     .variant("prop1", [("value1", "class1")])
///     .variant("prop2", [("value2", "class2")])
///     .compound(CompoundRule::new([("prop1", "value1"), ("prop2", "value2")], "class3"))
///     .into()]);
/// let props = Props::new().with("prop1", "value1").with("prop2", "value2");
///
/// let resolution = resolve(&config, &props, None);
/// assert_eq!(resolution.classes.to_string(), "class1 class2 class3");
/// assert_eq!(resolution.strip, ["prop1", "prop2"]);
/// ```
#[must_use]
pub fn resolve<'a>(
    config: &'a NormalizedConfig,
    props: &Props,
    external_class_name: Option<&str>,
) -> Resolution<'a> {
    resolve_with(config, props, external_class_name, CompoundMatching::RawProps)
}

/// Resolve classes for `props` using the given compound matching mode.
#[must_use]
pub fn resolve_with<'a>(
    config: &'a NormalizedConfig,
    props: &Props,
    external_class_name: Option<&str>,
    matching: CompoundMatching,
) -> Resolution<'a> {
    let mut classes: Vec<String> = config.default_class_names().to_vec();
    if let Some(external) = external_class_name {
        classes.extend(split_classes(external));
    }

    for name in config.variant_props() {
        let Some(key) = effective_key(config, props, name) else {
            continue;
        };
        if let Some(variant_classes) = config.variant_classes(name, &key) {
            classes.extend_from_slice(variant_classes);
        }
    }

    for rule in config.compound_variants() {
        if compound_matches(config, props, rule, matching) {
            classes.extend_from_slice(&rule.class_names);
        }
    }

    let resolved = ClassList::from_unique(unique(classes));
    trace!(classes = %resolved, "resolved variant classes");
    Resolution {
        classes: resolved,
        strip: config.stripped_props(),
    }
}

/// Key for `name`: the supplied prop, else the declared default.
fn effective_key<'p>(
    config: &'p NormalizedConfig,
    props: &'p Props,
    name: &str,
) -> Option<Cow<'p, str>> {
    match props.get(name) {
        Some(value) => value.to_key(),
        None => config.default_prop(name).map(|value| value.to_key()),
    }
}

fn compound_matches(
    config: &NormalizedConfig,
    props: &Props,
    rule: &CompoundClasses,
    matching: CompoundMatching,
) -> bool {
    rule.required_values.iter().all(|(name, required)| {
        let actual = match matching {
            CompoundMatching::RawProps => props.get(name).and_then(PropValue::to_key),
            CompoundMatching::EffectiveValues => effective_key(config, props, name),
        };
        actual.is_some_and(|key| key == required.to_key())
    })
}
