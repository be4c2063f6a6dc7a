//! Styled component factory and render delegation.
//!
//! [`styled`] merges the configuration once and captures it in a
//! [`StyledComponent`]. Every render resolves classes from the unmodified
//! prop snapshot, strips variant-only props, sets `className` and hands the
//! rest to the wrapped target together with the caller's node handle.

mod component;
mod memo;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::entry::ConfigEntry;
use crate::merge::NormalizedConfig;
use crate::props::{CLASS_NAME_PROP, NodeRef, Props};
use crate::resolve::{ClassList, CompoundMatching, resolve_with};

pub use component::{Component, Element, ElementNode};

use memo::{ClassMemo, MemoKey, watched_props};

/// Namespace prepended to every styled display name.
pub const DISPLAY_NAME_PREFIX: &str = "styled";

/// Options applied to a styled definition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StyledOptions {
    /// How compound rules read prop values.
    pub compound_matching: CompoundMatching,
    /// Reuse the previous resolution when the watched props are unchanged.
    pub memoize: bool,
}

impl Default for StyledOptions {
    fn default() -> Self {
        Self {
            compound_matching: CompoundMatching::RawProps,
            memoize: true,
        }
    }
}

impl StyledOptions {
    /// Set the compound matching mode.
    #[must_use]
    pub const fn with_compound_matching(mut self, matching: CompoundMatching) -> Self {
        self.compound_matching = matching;
        self
    }

    /// Enable or disable memoization.
    #[must_use]
    pub const fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}

/// A target wrapped with variant-driven class resolution.
pub struct StyledComponent<C> {
    target: C,
    config: Arc<NormalizedConfig>,
    display_name: String,
    options: StyledOptions,
    watched: Vec<String>,
    memo: ClassMemo,
}

/// Wrap `target` with the merged `entries`.
///
/// # Examples
///
/// ```
/// use styled_variants::{ConfigEntry, Element, Props, VariantSpec, styled};
///
/// let button = styled(
///     Element::new("button"),
///     [
///         ConfigEntry::from("btn"),
///         ConfigEntry::from(VariantSpec::new().variant("size", [("lg", "btn-lg")])),
///     ],
/// );
/// let node = button.render(Props::new().with("size", "lg").with("type", "submit"), None);
///
/// assert_eq!(button.display_name(), "styled.button");
/// assert_eq!(node.class_name(), Some("btn btn-lg"));
/// assert!(!node.props.contains("size"));
/// assert!(node.props.contains("type"));
/// ```
pub fn styled<C, I>(target: C, entries: I) -> StyledComponent<C>
where
    C: Component,
    I: IntoIterator<Item = ConfigEntry>,
{
    styled_with(target, entries, StyledOptions::default())
}

/// Wrap `target` with the merged `entries` and explicit options.
pub fn styled_with<C, I>(target: C, entries: I, options: StyledOptions) -> StyledComponent<C>
where
    C: Component,
    I: IntoIterator<Item = ConfigEntry>,
{
    StyledComponent::from_config(target, NormalizedConfig::from_entries(entries), options)
}

impl<C: Component> StyledComponent<C> {
    /// Wrap `target` with an already merged configuration.
    pub fn from_config(
        target: C,
        config: impl Into<Arc<NormalizedConfig>>,
        options: StyledOptions,
    ) -> Self {
        let shared = config.into();
        let display_name = display_name_for(&target);
        let watched = watched_props(&shared);
        debug!(
            component = %display_name,
            variants = shared.variant_props().len(),
            memoize = options.memoize,
            "defined styled component"
        );
        Self {
            target,
            config: shared,
            display_name,
            options,
            watched,
            memo: ClassMemo::default(),
        }
    }

    /// Resolve the classes `props` would render with.
    #[must_use]
    pub fn class_list(&self, props: &Props) -> ClassList {
        let class_name = props.class_name();
        let compute = || {
            resolve_with(
                &self.config,
                props,
                class_name,
                self.options.compound_matching,
            )
            .classes
        };
        if !self.options.memoize {
            return compute();
        }
        MemoKey::new(&self.watched, props, class_name)
            .map_or_else(compute, |key| self.memo.get_or_compute(key, compute))
    }

    /// Render the wrapped target.
    ///
    /// Classes are resolved from `props` before anything is removed, so
    /// stripped variants still select their classes.
    pub fn render(&self, props: Props, node_ref: Option<NodeRef>) -> C::Node {
        let classes = self.class_list(&props);
        let forwarded = self.forward_props(props, &classes);
        self.target.render(forwarded, node_ref)
    }

    fn forward_props(&self, props: Props, classes: &ClassList) -> Props {
        let mut forwarded: Props = props
            .into_iter()
            .filter(|(key, _)| key != CLASS_NAME_PROP && !self.config.is_stripped(key))
            .collect();
        forwarded.insert(CLASS_NAME_PROP, classes.to_string());
        forwarded
    }

    /// The developer-facing name, `styled.<inner>`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The normalized configuration shared by every render.
    #[must_use]
    pub fn config(&self) -> &NormalizedConfig {
        &self.config
    }

    /// The wrapped target.
    #[must_use]
    pub const fn target(&self) -> &C {
        &self.target
    }

    /// Options this definition was created with.
    #[must_use]
    pub const fn options(&self) -> StyledOptions {
        self.options
    }
}

fn display_name_for<C: Component>(target: &C) -> String {
    let inner = target
        .display_name()
        .unwrap_or(Cow::Borrowed("Component"));
    format!("{DISPLAY_NAME_PREFIX}.{inner}")
}

impl<C: Component> Component for StyledComponent<C> {
    type Node = C::Node;

    fn display_name(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.display_name))
    }

    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Self::Node {
        Self::render(self, props, node_ref)
    }
}

impl<C> fmt::Debug for StyledComponent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledComponent")
            .field("display_name", &self.display_name)
            .field("config", &self.config)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
