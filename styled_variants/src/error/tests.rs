//! Unit tests for error construction and aggregation.

use std::sync::Arc;

use rstest::rstest;

use super::StyledError;

fn entry_error(index: usize) -> StyledError {
    StyledError::invalid_entry(index, "expected a string or an object")
}

#[test]
fn try_aggregate_of_nothing_is_none() {
    assert!(StyledError::try_aggregate(Vec::<StyledError>::new()).is_none());
}

#[test]
fn single_owned_error_is_unwrapped() {
    let outcome = StyledError::aggregate(vec![entry_error(4)]);
    assert!(
        matches!(outcome, StyledError::InvalidEntry { index: 4, .. }),
        "expected InvalidEntry, got {outcome:?}"
    );
}

#[test]
fn single_shared_error_stays_aggregated() {
    let shared = Arc::new(entry_error(1));
    let outcome = StyledError::aggregate(vec![Arc::clone(&shared)]);
    match outcome {
        StyledError::Aggregate(aggregate) => assert_eq!(aggregate.len(), 1),
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[rstest]
#[case(2)]
#[case(5)]
fn many_errors_are_numbered_in_display(#[case] count: usize) {
    let outcome = StyledError::aggregate((0..count).map(entry_error));
    let StyledError::Aggregate(aggregate) = &outcome else {
        panic!("expected Aggregate, got {outcome:?}");
    };
    assert_eq!(aggregate.len(), count);
    let rendered = outcome.to_string();
    assert!(rendered.starts_with("multiple style configuration errors:"));
    for i in 1..=count {
        assert!(rendered.contains(&format!("{i}: Invalid style entry at index {}", i - 1)));
    }
}

#[test]
fn json_errors_convert() {
    let source = serde_json::from_str::<serde_json::Value>("{").err();
    let converted = source.map(StyledError::from);
    assert!(matches!(converted, Some(StyledError::Json { .. })));
}
