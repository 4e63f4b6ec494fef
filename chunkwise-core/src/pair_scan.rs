// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-pass pair-split scans over a finite ordered source.
//!
//! # Overview
//!
//! Both scans in this module walk the source once, visiting it in adjacent
//! pairs `(current, next)` and asking a caller-supplied decision function
//! whether a split occurs between them:
//!
//! - [`scan_split`] routes elements into an [`Accumulator`] and flushes the
//!   finished group to a sink at each split and, unconditionally, at
//!   end-of-source. The final partial group is never dropped and no element is
//!   delivered twice.
//! - [`scan_pairs`] skips accumulation and hands the adjacent pair itself to a
//!   callback whenever the decision function answers `true`, delivering the
//!   final pair once at termination if the rule did not action it.
//!
//! The decision function is evaluated exactly once per adjacent pair, never
//! re-evaluated and never skipped, so the produced groups depend only on the
//! source order and the decision outputs. Decision function and callback run
//! synchronously on the caller's thread, in source order.
//!
//! # Error Handling
//!
//! Both scans are generic over the error type: a failing decision function or
//! callback aborts the scan immediately and the error propagates to the
//! caller. Groups already delivered stay delivered; there is no rollback.
//! Infallible callers instantiate the error type at [`Infallible`] and
//! discharge the `Result` statically.
//!
//! [`Infallible`]: core::convert::Infallible

use crate::accumulator::Accumulator;

/// Scans a source in adjacent pairs, accumulating contiguous groups and
/// flushing each finished group to `sink`.
///
/// Walks the source once. Each element joins the active accumulator; whenever
/// `split` answers `true` for the pair `(current, next)` the accumulator is
/// flushed and a fresh group starts with `next`. After the last element the
/// remaining group is always flushed, so every element is delivered exactly
/// once and concatenating the groups in delivery order reproduces the source.
///
/// # Arguments
///
/// * `source` - The finite ordered source to partition. May be empty.
/// * `accumulator` - The empty accumulation target groups are built in.
/// * `split` - Decision function over adjacent elements; `true` ends the
///   current group between the two.
/// * `sink` - Receives each finished group, in source order.
///
/// # Behavior
///
/// - Empty source: `sink` is never invoked.
/// - Single element: `sink` is invoked once with a one-element group.
/// - `split` is evaluated exactly once per adjacent pair.
/// - An error from `split` or `sink` aborts the scan immediately; groups
///   already delivered stay delivered.
///
/// # Errors
///
/// Propagates the first error returned by `split` or `sink`.
///
/// # Examples
///
/// ```
/// use chunkwise_core::pair_scan::scan_split;
/// use std::convert::Infallible;
///
/// let mut groups: Vec<Vec<i32>> = Vec::new();
/// let result: Result<(), Infallible> = scan_split(
///     vec![1, 1, 2, 2, 3],
///     Vec::new(),
///     |current, next| Ok(current != next),
///     |group| {
///         groups.push(group);
///         Ok(())
///     },
/// );
/// assert!(result.is_ok());
/// assert_eq!(groups, vec![vec![1, 1], vec![2, 2], vec![3]]);
/// ```
pub fn scan_split<I, A, D, S, E>(
    source: I,
    mut accumulator: A,
    mut split: D,
    mut sink: S,
) -> Result<(), E>
where
    I: IntoIterator,
    A: Accumulator<I::Item>,
    D: FnMut(&I::Item, &I::Item) -> Result<bool, E>,
    S: FnMut(A::Group) -> Result<(), E>,
{
    let mut iter = source.into_iter();
    let Some(mut current) = iter.next() else {
        return Ok(());
    };

    for next in iter {
        // The decision cannot observe the accumulator, so evaluating it on
        // borrows before the append leaves the grouping unchanged while the
        // append can still move `current`.
        let split_here = split(&current, &next)?;
        accumulator.push(current);
        if split_here {
            sink(accumulator.take())?;
        }
        current = next;
    }

    // Final flush: the last element always belongs to a group.
    accumulator.push(current);
    sink(accumulator.take())?;
    Ok(())
}

/// Scans a source in adjacent pairs, invoking `on_pair` on every pair the
/// rule actions.
///
/// The same traversal as [`scan_split`], without accumulation: `hit` answers
/// whether to act on the pair `(current, next)`. If the final pair of the
/// source was not actioned by the rule, it is delivered once at termination,
/// mirroring the unconditional final flush of the grouping scan.
///
/// # Behavior
///
/// - Empty or single-element source: `on_pair` is never invoked (no pair
///   exists).
/// - `hit` is evaluated exactly once per adjacent pair.
/// - The final pair is delivered at most once: either because the rule
///   actioned it, or as the terminal delivery, never both.
///
/// # Errors
///
/// Propagates the first error returned by `hit` or `on_pair`.
///
/// # Examples
///
/// ```
/// use chunkwise_core::pair_scan::scan_pairs;
/// use std::convert::Infallible;
///
/// let mut pairs: Vec<(i32, i32)> = Vec::new();
/// let result: Result<(), Infallible> = scan_pairs(
///     vec![1, 2, 2, 3],
///     |current, next| Ok(current == next),
///     |current, next| {
///         pairs.push((*current, *next));
///         Ok(())
///     },
/// );
/// assert!(result.is_ok());
/// // (2, 2) actioned by the rule, (2, 3) delivered at termination.
/// assert_eq!(pairs, vec![(2, 2), (2, 3)]);
/// ```
pub fn scan_pairs<I, D, S, E>(source: I, mut hit: D, mut on_pair: S) -> Result<(), E>
where
    I: IntoIterator,
    D: FnMut(&I::Item, &I::Item) -> Result<bool, E>,
    S: FnMut(&I::Item, &I::Item) -> Result<(), E>,
{
    let mut iter = source.into_iter().peekable();
    let Some(mut current) = iter.next() else {
        return Ok(());
    };

    while let Some(next) = iter.next() {
        let actioned = hit(&current, &next)?;
        if actioned {
            on_pair(&current, &next)?;
        }

        if iter.peek().is_some() {
            current = next;
        } else if !actioned {
            // Terminal delivery of the unactioned final pair.
            on_pair(&current, &next)?;
        }
    }

    Ok(())
}
