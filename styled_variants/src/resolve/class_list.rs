//! Ordered, de-duplicated class list.

use std::fmt;

/// Resolved class names in application order, without duplicates.
///
/// Displays as the space-joined `class` attribute value.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Wrap classes already known to be unique.
    pub(crate) const fn from_unique(classes: Vec<String>) -> Self {
        Self(classes)
    }

    /// Whether `class` is present.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Iterate over the classes in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Borrow the classes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of classes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no classes were resolved.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the list and return the classes.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ClassList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[&str]> for ClassList {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for ClassList {
    fn eq(&self, other: &[&str; N]) -> bool {
        <Self as PartialEq<[&str]>>::eq(self, other.as_slice())
    }
}
