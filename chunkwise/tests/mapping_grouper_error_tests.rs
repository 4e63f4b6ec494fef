// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error propagation tests for the fallible `MappingGrouper` operations.

use chunkwise::{ChunkError, MappingGrouper};
use chunkwise_test_utils::failing_sink;
use std::collections::{BTreeMap, HashMap};

#[test]
fn test_sink_failure_aborts_and_keeps_delivered_groups() {
    // Arrange
    let source = BTreeMap::from([(1, "a"), (2, "b"), (3, "c"), (4, "d")]);
    let mut delivered: Vec<HashMap<i32, &str>> = Vec::new();

    // Act - the sink fails on the second flush
    let result = MappingGrouper::new(source)
        .try_group_every(1, failing_sink(1, |group| delivered.push(group)));

    // Assert
    assert!(result.is_err());
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].get(&1), Some(&"a"));
}

#[test]
fn test_rule_failure_aborts_scan() {
    // Arrange
    let source = BTreeMap::from([(1, "a"), (2, "b"), (3, "c")]);
    let mut calls = 0;

    // Act
    let result = MappingGrouper::new(source).try_group_by(
        |_, _| Err(ChunkError::group_error("rule failed")),
        |_group| {
            calls += 1;
            Ok(())
        },
    );

    // Assert
    assert!(matches!(
        result,
        Err(ChunkError::GroupProcessingError { .. })
    ));
    assert_eq!(calls, 0);
}

#[test]
fn test_successful_try_call_returns_ok() -> anyhow::Result<()> {
    // Arrange
    let source = BTreeMap::from([(1, "a"), (2, "a"), (3, "b")]);
    let mut groups: Vec<HashMap<i32, &str>> = Vec::new();

    // Act
    MappingGrouper::new(source).try_group_by_key(
        |entry| entry.1,
        |group| {
            groups.push(group);
            Ok(())
        },
    )?;

    // Assert
    assert_eq!(groups.len(), 2);
    Ok(())
}
