//! Variant-driven class names for styled UI components.
//!
//! A component definition is an ordered list of [`ConfigEntry`] values:
//! bare class strings applied unconditionally and [`VariantSpec`]s mapping
//! prop values to classes. [`styled`] merges them once into a
//! [`NormalizedConfig`] and returns a [`StyledComponent`] that, on every
//! render, resolves the class list from the current props, strips
//! variant-only props and forwards everything else to the wrapped target.
//!
//! ```rust
//! use styled_variants::{CompoundRule, ConfigEntry, Element, Props, VariantSpec, styled};
//!
//! let button = styled(
//!     Element::new("button"),
//!     [
//!         ConfigEntry::from("btn"),
//!         VariantSpec::new()
//!             .variant("intent", [("primary", "btn-primary"), ("danger", "btn-danger")])
//!             .variant("outlined", [(true, "btn-outline")])
//!             .default_variant("intent", "primary")
//!             .compound(
//!                 CompoundRule::new([("intent", "danger")], "ring-danger")
//!                     .require("outlined", true),
//!             )
//!             .into(),
//!     ],
//! );
//!
//! let node = button.render(
//!     Props::new()
//!         .with("intent", "danger")
//!         .with("outlined", true)
//!         .with("className", "w-full"),
//!     None,
//! );
//! assert_eq!(
//!     node.class_name(),
//!     Some("btn w-full btn-danger btn-outline ring-danger")
//! );
//! assert!(!node.props.contains("intent"));
//! ```
//!
//! The merge and resolve steps are also available on their own through
//! [`merge`] and [`resolve`].

extern crate self as styled_variants;

pub use styled_variants_macros::{VariantProps, VariantValue};

mod entry;
mod error;
mod load;
mod merge;
mod ordered;
mod props;
mod resolve;
mod result_ext;
mod styled;
mod value;

pub use entry::{CompoundRule, ConfigEntry, EntryComposer, VariantSpec};
pub use error::{AggregatedErrors, StyledError};
#[cfg(feature = "toml")]
pub use load::entries_from_toml;
pub use load::{entries_from_json, entries_from_value};
pub use merge::{CompoundClasses, ConfigMerger, NormalizedConfig, merge};
pub use ordered::OrderedMap;
pub use props::{CLASS_NAME_PROP, NodeRef, Props, VariantProps};
pub use resolve::{ClassList, CompoundMatching, Resolution, resolve, resolve_with};
pub use result_ext::{StyledResult, StyledResultExt};
pub use styled::{
    Component, DISPLAY_NAME_PREFIX, Element, ElementNode, StyledComponent, StyledOptions, styled,
    styled_with,
};
pub use value::{PropValue, VariantValue};
