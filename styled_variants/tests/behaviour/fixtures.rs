//! Shared fixtures for the behavioural scenarios.

use std::sync::Arc;

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use styled_variants::{ClassList, ConfigEntry, Props, StyledError};
use test_helpers::Rendered;

/// Scenario state shared between the steps of one scenario.
#[derive(Default, ScenarioState)]
pub struct StyleContext {
    /// Entries collected by the `Given` steps, in order.
    pub entries: Slot<Vec<ConfigEntry>>,
    /// Props for the render or resolution under test.
    pub props: Slot<Props>,
    /// Classes produced by the last resolution.
    pub classes: Slot<ClassList>,
    /// What the recording target received on the last render.
    pub rendered: Slot<Rendered>,
    /// Error returned by the last failed load.
    pub load_error: Slot<Arc<StyledError>>,
}

impl StyleContext {
    /// Append an entry to the definition under construction.
    pub fn push_entry(&self, entry: impl Into<ConfigEntry>) {
        let mut entries = self.entries.get().unwrap_or_default();
        entries.push(entry.into());
        self.entries.set(entries);
    }

    /// Apply `update` to the current props.
    pub fn update_props(&self, update: impl FnOnce(&mut Props)) {
        let mut props = self.props.get().unwrap_or_default();
        update(&mut props);
        self.props.set(props);
    }
}

/// Creates a clean scenario state.
#[fixture]
pub fn style_context() -> StyleContext {
    StyleContext::default()
}
