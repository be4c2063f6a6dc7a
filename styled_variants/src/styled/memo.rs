//! Last-result cache for class resolution.
//!
//! The key covers every prop the resolver reads, so a hit is always
//! equivalent to recomputing.

use parking_lot::Mutex;

use crate::merge::NormalizedConfig;
use crate::props::Props;
use crate::resolve::ClassList;

/// Stringified value of each watched prop plus the external class name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MemoKey {
    values: Vec<Option<String>>,
    class_name: Option<String>,
}

/// Prop names whose values influence resolution.
pub(crate) fn watched_props(config: &NormalizedConfig) -> Vec<String> {
    let mut watched: Vec<String> = config.variant_props().to_vec();
    for rule in config.compound_variants() {
        for name in rule.required_values.keys() {
            if !watched.iter().any(|w| w == name) {
                watched.push(name.to_owned());
            }
        }
    }
    watched
}

impl MemoKey {
    /// Build a key, or `None` when a watched prop cannot be stringified.
    pub(crate) fn new(watched: &[String], props: &Props, class_name: Option<&str>) -> Option<Self> {
        let mut values = Vec::with_capacity(watched.len());
        for name in watched {
            match props.get(name) {
                None => values.push(None),
                Some(value) => values.push(Some(value.to_key()?.into_owned())),
            }
        }
        Some(Self {
            values,
            class_name: class_name.map(str::to_owned),
        })
    }
}

/// Most recent resolution for one definition.
#[derive(Debug, Default)]
pub(crate) struct ClassMemo {
    last: Mutex<Option<(MemoKey, ClassList)>>,
}

impl ClassMemo {
    /// Return the cached classes for `key`, computing and storing on a miss.
    pub(crate) fn get_or_compute<F>(&self, key: MemoKey, compute: F) -> ClassList
    where
        F: FnOnce() -> ClassList,
    {
        if let Some((cached_key, classes)) = self.last.lock().as_ref()
            && *cached_key == key
        {
            return classes.clone();
        }
        let classes = compute();
        *self.last.lock() = Some((key, classes.clone()));
        classes
    }
}
