//! Host component seam and built-in elements.

use std::borrow::Cow;

use crate::props::{NodeRef, Props};

/// A render target a styled component can wrap.
///
/// Implement this for whatever the host framework renders. The styled
/// wrapper only ever calls [`Component::render`] with the forwarded props
/// (including the resolved `className`) and the caller's node handle.
pub trait Component {
    /// What a render produces.
    type Node;

    /// Human-readable name used to derive the styled display name.
    fn display_name(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Render with the given props and node handle.
    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Self::Node;
}

/// A built-in element identified by its tag name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    tag: Cow<'static, str>,
}

impl Element {
    /// Target the element with tag `tag`.
    #[must_use]
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self { tag: tag.into() }
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl From<&'static str> for Element {
    fn from(tag: &'static str) -> Self {
        Self::new(tag)
    }
}

/// Description of a rendered built-in element.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementNode {
    /// Tag name.
    pub tag: String,
    /// Props the element received, `className` included.
    pub props: Props,
    /// Handle attached to the element, if any.
    pub node_ref: Option<NodeRef>,
}

impl ElementNode {
    /// The `className` the element received.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.props.class_name()
    }

    /// Whether the element's `className` contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name()
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

impl Component for Element {
    type Node = ElementNode;

    fn display_name(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.tag()))
    }

    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Self::Node {
        ElementNode {
            tag: self.tag.clone().into_owned(),
            props,
            node_ref,
        }
    }
}

impl<C: Component + ?Sized> Component for &C {
    type Node = C::Node;

    fn display_name(&self) -> Option<Cow<'_, str>> {
        (**self).display_name()
    }

    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Self::Node {
        (**self).render(props, node_ref)
    }
}

impl<C: Component + ?Sized> Component for std::sync::Arc<C> {
    type Node = C::Node;

    fn display_name(&self) -> Option<Cow<'_, str>> {
        (**self).display_name()
    }

    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Self::Node {
        (**self).render(props, node_ref)
    }
}
