//! Prop snapshots supplied to component instances.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::ordered::OrderedMap;
use crate::value::PropValue;

/// Name of the prop carrying an externally supplied class name.
pub const CLASS_NAME_PROP: &str = "className";

/// Insertion-ordered set of props for a single render.
///
/// # Examples
///
/// ```
/// use styled_variants::Props;
///
/// let props = Props::new().with("size", "lg").with("disabled", true);
/// assert_eq!(props.get("size").and_then(|v| v.as_str()), Some("lg"));
/// assert!(props.contains("disabled"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    values: OrderedMap<PropValue>,
}

impl Props {
    /// Create an empty prop set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: OrderedMap::new(),
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a prop, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        self.values.insert(key, value.into())
    }

    /// Look up a prop by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.values.get(key)
    }

    /// Whether a prop with this name was supplied.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove a prop by name.
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.values.remove(key)
    }

    /// The `className` prop, when supplied as a string.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.get(CLASS_NAME_PROP).and_then(PropValue::as_str)
    }

    /// Iterate over the props in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.values.iter()
    }

    /// Iterate over the prop names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys()
    }

    /// Number of props.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no props were supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        props.extend(iter);
        props
    }
}

impl<K: Into<String>, V: Into<PropValue>> Extend<(K, V)> for Props {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<PropValue>, const N: usize> From<[(K, V); N]> for Props {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = std::vec::IntoIter<(String, PropValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Typed props that can be flattened into a [`Props`] snapshot.
///
/// Usually derived with [`macro@crate::VariantProps`], which writes each
/// `Some` field under its prop name and skips `None` fields so absent props
/// stay absent.
pub trait VariantProps {
    /// Write the set fields into `props`.
    fn write_props(&self, props: &mut Props);

    /// Build a fresh [`Props`] from the set fields.
    #[must_use]
    fn to_props(&self) -> Props {
        let mut props = Props::new();
        self.write_props(&mut props);
        props
    }
}

/// Opaque handle to a rendered node, passed through to the wrapped target.
///
/// Two handles compare equal only when they share the same allocation.
#[derive(Clone)]
pub struct NodeRef(Arc<dyn Any + Send + Sync>);

impl NodeRef {
    /// Wrap `value` in a new handle.
    #[must_use]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Downcast the referenced value.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Whether both handles point at the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&Arc::as_ptr(&self.0)).finish()
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeRef, Props};
    use crate::value::PropValue;

    #[test]
    fn class_name_reads_string_prop_only() {
        assert_eq!(Props::new().with("className", "a b").class_name(), Some("a b"));
        assert_eq!(Props::new().with("className", 3).class_name(), None);
    }

    #[test]
    fn array_conversion_keeps_order() {
        let props = Props::from([("b", PropValue::Int(1)), ("a", PropValue::Bool(true))]);
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn node_refs_compare_by_identity() {
        let handle = NodeRef::new(String::from("input"));
        let alias = handle.clone();
        assert_eq!(handle, alias);
        assert_ne!(handle, NodeRef::new(String::from("input")));
        assert_eq!(alias.downcast_ref::<String>().map(String::as_str), Some("input"));
    }
}
