//! Ordered accumulation of configuration entries.

use super::{ConfigEntry, VariantSpec};

/// Builder that accumulates [`ConfigEntry`] values in declaration order.
///
/// Order matters: class names, variant names and forwarded props keep their
/// first-seen position, while default variants follow last-write-wins.
///
/// ```rust
/// use styled_variants::{EntryComposer, VariantSpec, merge};
///
/// let mut composer = EntryComposer::new();
/// composer.push_class_names("btn");
/// composer.push_spec(VariantSpec::new().variant("size", [("lg", "text-lg")]));
/// composer.push_spec(VariantSpec::new().variant("size", [("lg", "px-6")]));
///
/// let config = merge(composer.entries());
/// assert_eq!(
///     config.variant_classes("size", "lg"),
///     Some(&["text-lg".to_owned(), "px-6".to_owned()][..])
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct EntryComposer {
    entries: Vec<ConfigEntry>,
}

impl EntryComposer {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a composer with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Push unconditional class names.
    pub fn push_class_names(&mut self, class_names: impl Into<String>) {
        self.push_entry(ConfigEntry::ClassNames(class_names.into()));
    }

    /// Push a variant specification.
    pub fn push_spec(&mut self, spec: VariantSpec) {
        self.push_entry(ConfigEntry::Variants(spec));
    }

    /// Push an arbitrary entry.
    pub fn push_entry(&mut self, entry: ConfigEntry) {
        self.entries.push(entry);
    }

    /// Number of accumulated entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries have been pushed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the composer and return the accumulated entries.
    #[must_use]
    pub fn entries(self) -> Vec<ConfigEntry> {
        self.entries
    }
}

impl Extend<ConfigEntry> for EntryComposer {
    fn extend<I: IntoIterator<Item = ConfigEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for EntryComposer {
    type Item = ConfigEntry;
    type IntoIter = std::vec::IntoIter<ConfigEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
