//! A host component that remembers every render it receives.
//!
//! # Examples
//!
//! ```
//! use styled_variants::{ConfigEntry, Props, styled};
//! use test_helpers::RecordingComponent;
//!
//! let component = styled(RecordingComponent::named("Card"), [ConfigEntry::from("card")]);
//! component.render(Props::new().with("id", "main"), None);
//!
//! let last = component.target().last().expect("one render");
//! assert_eq!(last.props.class_name(), Some("card"));
//! ```

use std::borrow::Cow;

use anyhow::{Result, anyhow};
use parking_lot::Mutex;
use styled_variants::{Component, NodeRef, Props};

/// What a single render delivered to the target.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendered {
    /// Props after stripping and class merging.
    pub props: Props,
    /// The node handle passed alongside the props.
    pub node_ref: Option<NodeRef>,
}

/// Component recording the props and node handle of each render.
#[derive(Debug, Default)]
pub struct RecordingComponent {
    name: Option<String>,
    renders: Mutex<Vec<Rendered>>,
}

impl RecordingComponent {
    /// Create an anonymous recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder reporting `name` as its display name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            renders: Mutex::default(),
        }
    }

    /// Number of renders received so far.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders.lock().len()
    }

    /// The most recent render, if any.
    #[must_use]
    pub fn last(&self) -> Option<Rendered> {
        self.renders.lock().last().cloned()
    }

    /// The most recent render, or an error naming the missing render.
    ///
    /// # Errors
    ///
    /// Returns an error when nothing has been rendered yet.
    pub fn expect_last(&self) -> Result<Rendered> {
        self.last()
            .ok_or_else(|| anyhow!("recording component has not been rendered"))
    }

    /// Every render received so far, oldest first.
    #[must_use]
    pub fn renders(&self) -> Vec<Rendered> {
        self.renders.lock().clone()
    }
}

impl Component for RecordingComponent {
    type Node = Rendered;

    fn display_name(&self) -> Option<Cow<'_, str>> {
        self.name.as_deref().map(Cow::Borrowed)
    }

    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Self::Node {
        let rendered = Rendered { props, node_ref };
        self.renders.lock().push(rendered.clone());
        rendered
    }
}
