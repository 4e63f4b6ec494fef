// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cap behavior tests for the `count_limited` decorator.

use chunkwise_core::count_limiter::count_limited;
use chunkwise_core::key_equality::key_changes;
use chunkwise_core::pair_scan::scan_split;
use std::convert::Infallible;

fn collect_groups<D>(source: Vec<i32>, split: D) -> Vec<Vec<i32>>
where
    D: FnMut(&i32, &i32) -> Result<bool, Infallible>,
{
    let mut groups = Vec::new();
    let result: Result<(), Infallible> = scan_split(source, Vec::new(), split, |group| {
        groups.push(group);
        Ok(())
    });
    assert!(result.is_ok());
    groups
}

#[test]
fn test_cap_alone_chunks_with_final_short_group() {
    // Arrange & Act
    let groups = collect_groups(vec![1, 2, 3, 4, 5], count_limited(2, |_, _| Ok(false)));

    // Assert
    assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
}

#[test]
fn test_cap_larger_than_source_yields_one_group() {
    // Arrange & Act
    let groups = collect_groups(vec![1, 2, 3], count_limited(10, |_, _| Ok(false)));

    // Assert
    assert_eq!(groups, vec![vec![1, 2, 3]]);
}

#[test]
fn test_cap_zero_means_no_cap() {
    // Arrange & Act
    let groups = collect_groups(vec![1, 2, 3, 4], count_limited(0, |_, _| Ok(false)));

    // Assert - rule-only behavior, single final flush
    assert_eq!(groups, vec![vec![1, 2, 3, 4]]);
}

#[test]
fn test_rule_split_resets_counter() {
    // Arrange - key rule splits at the sign change, cap would fire later
    let source = vec![1, 2, -1, -2, -3];

    // Act
    let groups = collect_groups(
        source,
        count_limited(3, key_changes(|n: &i32| *n < 0)),
    );

    // Assert - the cap measures elements since the last flush, so the
    // negative run is re-counted from zero and stays whole
    assert_eq!(groups, vec![vec![1, 2], vec![-1, -2, -3]]);
}

#[test]
fn test_cap_short_circuits_wrapped_rule() {
    // Arrange
    let mut rule_calls = 0;

    // Act - cap of 1 fires on every evaluation
    let groups = collect_groups(
        vec![1, 2, 3],
        count_limited(1, |_, _| {
            rule_calls += 1;
            Ok(false)
        }),
    );

    // Assert - at the cap the wrapped rule is never consulted
    assert_eq!(groups, vec![vec![1], vec![2], vec![3]]);
    assert_eq!(rule_calls, 0);
}

#[test]
fn test_no_group_exceeds_cap() {
    // Arrange
    let source: Vec<i32> = (0..37).collect();

    // Act
    let groups = collect_groups(source.clone(), count_limited(4, |_, _| Ok(false)));

    // Assert
    assert!(groups.iter().all(|g| g.len() <= 4));
    let rebuilt: Vec<i32> = groups.into_iter().flatten().collect();
    assert_eq!(rebuilt, source);
}
