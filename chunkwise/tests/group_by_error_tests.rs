// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error propagation tests for the fallible `SequenceGrouper` operations.

use chunkwise::{ChunkError, ResultExt, SequenceGrouper};
use chunkwise_test_utils::{failing_rule, failing_sink};

#[test]
fn test_sink_failure_aborts_and_keeps_delivered_groups() {
    // Arrange
    let mut delivered: Vec<Vec<i32>> = Vec::new();

    // Act - the sink fails on the second flush
    let result = SequenceGrouper::new(vec![1, 2, 3, 4]).try_group_every(
        1,
        failing_sink(1, |group| delivered.push(group)),
    );

    // Assert - no rollback of the first group
    assert!(result.is_err());
    assert_eq!(delivered, vec![vec![1]]);
}

#[test]
fn test_rule_failure_aborts_scan() {
    // Arrange
    let mut delivered: Vec<Vec<i32>> = Vec::new();

    // Act - the rule fails on its third evaluation, mid-accumulation
    let result = SequenceGrouper::new(vec![1, 2, 3, 4, 5]).try_group_by(
        failing_rule(2),
        |group| {
            delivered.push(group);
            Ok(())
        },
    );

    // Assert - nothing was flushed before the failure
    assert!(matches!(
        result,
        Err(ChunkError::GroupProcessingError { .. })
    ));
    assert!(delivered.is_empty());
}

#[test]
fn test_successful_try_call_returns_ok() -> anyhow::Result<()> {
    // Arrange
    let mut groups: Vec<Vec<i32>> = Vec::new();

    // Act
    SequenceGrouper::new(vec![1, 1, 2]).try_group_by(
        |current, next| Ok(current != next),
        |group| {
            groups.push(group);
            Ok(())
        },
    )?;

    // Assert
    assert_eq!(groups, vec![vec![1, 1], vec![2]]);
    Ok(())
}

#[test]
fn test_user_error_variant_propagates_unchanged() {
    // Arrange
    #[derive(Debug, thiserror::Error)]
    #[error("bulk endpoint returned 503")]
    struct EndpointUnavailable;

    // Act
    let result = SequenceGrouper::new(vec![1, 2]).try_group_every(2, |_group| {
        Err(ChunkError::user_error(EndpointUnavailable))
    });

    // Assert
    let err = result.expect_err("sink error must propagate");
    assert!(matches!(err, ChunkError::UserError(_)));
}

#[test]
fn test_context_can_be_chained_onto_aborts() {
    // Arrange
    #[derive(Debug, thiserror::Error)]
    #[error("row too wide")]
    struct RowTooWide;

    // Act
    let result = SequenceGrouper::new(vec![1, 2])
        .try_group_every(2, |_group| Err(ChunkError::user_error(RowTooWide)))
        .context("inserting customer batch");

    // Assert - user error re-wrapped with the call-site context
    let err = result.expect_err("abort must propagate");
    assert!(err.to_string().contains("inserting customer batch"));
}

#[test]
fn test_capped_try_variants_delegate_on_zero_cap() -> anyhow::Result<()> {
    // Arrange
    let mut groups: Vec<Vec<i32>> = Vec::new();

    // Act - cap of zero behaves exactly like the uncapped rule-only form
    SequenceGrouper::new(vec![1, 2, 3]).try_group_by_capped(
        0,
        |_, _| Ok(false),
        |group| {
            groups.push(group);
            Ok(())
        },
    )?;

    // Assert
    assert_eq!(groups, vec![vec![1, 2, 3]]);
    Ok(())
}
