//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{StyleContext, style_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/resolve_classes.feature",
    fixtures = [style_context: StyleContext]
);
scenarios!(
    "tests/features/styled_render.feature",
    fixtures = [style_context: StyleContext]
);
scenarios!(
    "tests/features/load_entries.feature",
    fixtures = [style_context: StyleContext]
);
