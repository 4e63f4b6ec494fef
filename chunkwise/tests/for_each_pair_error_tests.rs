// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error propagation tests for the fallible pairwise family.

use chunkwise::{ChunkError, SequenceGrouper};

#[test]
fn test_pair_callback_failure_aborts() {
    // Arrange
    let mut actioned = Vec::new();

    // Act - callback fails on the second actioned pair
    let result = SequenceGrouper::new(vec![1, 2, 3, 4]).try_for_each_pair(
        |_, _| Ok(true),
        |current, next| {
            if actioned.len() == 1 {
                return Err(ChunkError::group_error("pair delivery failed"));
            }
            actioned.push((*current, *next));
            Ok(())
        },
    );

    // Assert - the first delivery stays delivered
    assert!(result.is_err());
    assert_eq!(actioned, vec![(1, 2)]);
}

#[test]
fn test_rule_failure_aborts_before_callback() {
    // Arrange
    let mut calls = 0;

    // Act
    let result = SequenceGrouper::new(vec![1, 2, 3]).try_for_each_pair(
        |_, _| Err(ChunkError::group_error("rule failed")),
        |_: &i32, _: &i32| {
            calls += 1;
            Ok(())
        },
    );

    // Assert
    assert!(result.is_err());
    assert_eq!(calls, 0);
}

#[test]
fn test_successful_capped_pairwise_returns_ok() -> anyhow::Result<()> {
    // Arrange
    let mut pairs = Vec::new();

    // Act
    SequenceGrouper::new(vec![1, 2, 3, 4, 5]).try_for_each_pair_every(2, |current, next| {
        pairs.push((*current, *next));
        Ok(())
    })?;

    // Assert
    assert_eq!(pairs, vec![(2, 3), (4, 5)]);
    Ok(())
}
