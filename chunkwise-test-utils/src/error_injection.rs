// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Callback wrappers that fail at a chosen position.
//!
//! These helpers build the fallible split rules and group sinks used to test
//! error propagation: each succeeds until its 0-indexed trigger position is
//! reached, then returns a [`ChunkError`] exactly once.

use chunkwise_core::ChunkError;

/// A group sink that fails at the given 0-indexed flush position.
///
/// Groups delivered before the trigger are recorded through `record`, so a
/// test can assert that output delivered before the failure stays delivered.
///
/// # Examples
///
/// ```
/// use chunkwise_core::pair_scan::scan_split;
/// use chunkwise_test_utils::failing_sink;
///
/// let mut delivered: Vec<Vec<i32>> = Vec::new();
/// let result = scan_split(
///     vec![1, 2, 3],
///     Vec::new(),
///     |_, _| Ok(true),
///     failing_sink(1, |group| delivered.push(group)),
/// );
/// assert!(result.is_err());
/// assert_eq!(delivered, vec![vec![1]]);
/// ```
pub fn failing_sink<G, R>(
    fail_at: usize,
    mut record: R,
) -> impl FnMut(G) -> Result<(), ChunkError>
where
    R: FnMut(G),
{
    let mut flushes = 0;
    move |group| {
        if flushes == fail_at {
            return Err(ChunkError::group_error(format!(
                "injected sink failure at flush {fail_at}"
            )));
        }
        flushes += 1;
        record(group);
        Ok(())
    }
}

/// A split rule that fails at the given 0-indexed evaluation position.
///
/// Until the trigger the rule answers `false` (never split), so the failure
/// happens mid-accumulation.
pub fn failing_rule<T>(fail_at: usize) -> impl FnMut(&T, &T) -> Result<bool, ChunkError> {
    let mut evaluations = 0;
    move |_, _| {
        if evaluations == fail_at {
            return Err(ChunkError::group_error(format!(
                "injected rule failure at evaluation {fail_at}"
            )));
        }
        evaluations += 1;
        Ok(false)
    }
}
