// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Run-grouping tests for the `key_changes` adapter.

use chunkwise_core::key_equality::key_changes;
use chunkwise_core::pair_scan::scan_split;
use std::convert::Infallible;

fn collect_groups<T, D>(source: Vec<T>, split: D) -> Vec<Vec<T>>
where
    D: FnMut(&T, &T) -> Result<bool, Infallible>,
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
fn test_non_adjacent_runs_are_never_merged() {
    // Arrange - two 'A' runs separated by a 'B' run
    let source = vec![('A', 1), ('A', 2), ('B', 3), ('A', 4)];

    // Act
    let groups = collect_groups(source, key_changes(|(key, _): &(char, i32)| *key));

    // Assert
    assert_eq!(
        groups,
        vec![
            vec![('A', 1), ('A', 2)],
            vec![('B', 3)],
            vec![('A', 4)],
        ]
    );
}

#[test]
fn test_constant_key_yields_one_group() {
    // Arrange & Act
    let groups = collect_groups(vec![1, 2, 3], key_changes(|_: &i32| "same"));

    // Assert
    assert_eq!(groups, vec![vec![1, 2, 3]]);
}

#[test]
fn test_two_absent_keys_compare_equal() {
    // Arrange - even numbers have no key
    let source = vec![2, 4, 3, 5, 6];
    let key_of = |n: &i32| if n % 2 == 0 { None } else { Some(*n) };

    // Act
    let groups = collect_groups(source, key_changes(key_of));

    // Assert - 2 and 4 group together (both keyless); 3 and 5 differ by value
    assert_eq!(groups, vec![vec![2, 4], vec![3], vec![5], vec![6]]);
}
