// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Grouping operations over ordered sequences.
//!
//! # Overview
//!
//! [`SequenceGrouper`] wraps any finite [`IntoIterator`] source and partitions
//! it into contiguous, non-empty groups, delivering each finished `Vec` to a
//! callback exactly once, in source order. Concatenating the delivered groups
//! reproduces the source exactly.
//!
//! Splits come from three kinds of rule, freely combined with a hard size cap:
//!
//! - a **pairwise rule** over adjacent elements ([`group_by`](SequenceGrouper::group_by)),
//! - a **key extraction** whose output must stay constant within a group
//!   ([`group_by_key`](SequenceGrouper::group_by_key)),
//! - the **cap alone**, i.e. fixed-size chunking with a final short chunk
//!   ([`group_every`](SequenceGrouper::group_every)).
//!
//! A parallel pairwise family ([`for_each_pair`](SequenceGrouper::for_each_pair)
//! and friends) skips accumulation and acts on the adjacent pairs themselves.
//!
//! Each operation exists in an infallible form and a `try_` form whose rule
//! and callback may fail; a failure aborts the call immediately and groups
//! already delivered stay delivered.
//!
//! # Basic Usage
//!
//! ```
//! use chunkwise::SequenceGrouper;
//!
//! let mut batches = Vec::new();
//! SequenceGrouper::new(vec![1, 2, 3, 4, 5])
//!     .group_every(2, |batch| batches.push(batch));
//!
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use crate::logging::trace_abort;
use crate::util::discharge;
use chunkwise_core::{count_limited, key_changes, scan_pairs, scan_split, Result};

/// Partitions a finite ordered source into contiguous groups.
///
/// Every operation consumes the grouper and drives the source to completion in
/// a single pass, invoking the group callback synchronously on the caller's
/// thread. A fresh grouper is needed per grouping call, matching the
/// single-pass nature of the source.
pub struct SequenceGrouper<I> {
    source: I,
}

impl<T: Clone> SequenceGrouper<Vec<T>> {
    /// Wraps a borrowed slice, cloning its elements into an owned source.
    pub fn from_slice(items: &[T]) -> Self {
        Self::new(items.to_vec())
    }
}

impl<I> SequenceGrouper<I>
where
    I: IntoIterator,
{
    /// Wraps a finite ordered source.
    pub fn new(source: I) -> Self {
        Self { source }
    }

    /// Groups elements, splitting wherever `split` answers `true` for a pair
    /// of adjacent elements.
    ///
    /// # Behavior
    ///
    /// - Empty source: `sink` is never invoked.
    /// - Single element: `sink` is invoked once with a one-element group.
    /// - `split` is evaluated exactly once per adjacent pair; a `true` answer
    ///   ends the current group after the first element of the pair.
    /// - The final (possibly incomplete) group is always delivered.
    ///
    /// # Examples
    ///
    /// ```
    /// use chunkwise::SequenceGrouper;
    ///
    /// let mut groups = Vec::new();
    /// SequenceGrouper::new(vec![1, 1, 2, 2, 3])
    ///     .group_by(|current, next| current != next, |group| groups.push(group));
    ///
    /// assert_eq!(groups, vec![vec![1, 1], vec![2, 2], vec![3]]);
    /// ```
    pub fn group_by<D, S>(self, mut split: D, mut sink: S)
    where
        D: FnMut(&I::Item, &I::Item) -> bool,
        S: FnMut(Vec<I::Item>),
    {
        discharge(scan_split(
            self.source,
            Vec::new(),
            |current, next| Ok(split(current, next)),
            |group| {
                sink(group);
                Ok(())
            },
        ));
    }

    /// Like [`group_by`](Self::group_by), with a hard cap on group size.
    ///
    /// A split is forced every `max_size` elements even while `split` keeps
    /// answering `false`; a `true` answer from `split` still ends the group
    /// early and restarts the cap count. `max_size == 0` means no cap.
    ///
    /// # Examples
    ///
    /// ```
    /// use chunkwise::SequenceGrouper;
    ///
    /// let mut groups = Vec::new();
    /// SequenceGrouper::new(vec![1, 1, 1, 1, 9])
    ///     .group_by_capped(3, |current, next| current != next, |group| groups.push(group));
    ///
    /// // Cap splits the run of ones; the rule still splits before 9.
    /// assert_eq!(groups, vec![vec![1, 1, 1], vec![1], vec![9]]);
    /// ```
    pub fn group_by_capped<D, S>(self, max_size: usize, mut split: D, mut sink: S)
    where
        D: FnMut(&I::Item, &I::Item) -> bool,
        S: FnMut(Vec<I::Item>),
    {
        if max_size == 0 {
            return self.group_by(split, sink);
        }
        discharge(scan_split(
            self.source,
            Vec::new(),
            count_limited(max_size, move |current, next| Ok(split(current, next))),
            |group| {
                sink(group);
                Ok(())
            },
        ));
    }

    /// Groups maximal consecutive runs of elements sharing the same derived
    /// key.
    ///
    /// A new group starts whenever the key extracted from the next element
    /// differs from the current one (`PartialEq`). Non-adjacent runs with the
    /// same key are never merged.
    ///
    /// # Examples
    ///
    /// ```
    /// use chunkwise::SequenceGrouper;
    ///
    /// let mut groups = Vec::new();
    /// SequenceGrouper::new(vec![("a", 1), ("a", 2), ("b", 3), ("a", 4)])
    ///     .group_by_key(|entry| entry.0, |group| groups.push(group));
    ///
    /// assert_eq!(
    ///     groups,
    ///     vec![
    ///         vec![("a", 1), ("a", 2)],
    ///         vec![("b", 3)],
    ///         vec![("a", 4)],
    ///     ]
    /// );
    /// ```
    pub fn group_by_key<K, F, S>(self, key_of: F, mut sink: S)
    where
        K: PartialEq,
        F: FnMut(&I::Item) -> K,
        S: FnMut(Vec<I::Item>),
    {
        discharge(scan_split(
            self.source,
            Vec::new(),
            key_changes(key_of),
            |group| {
                sink(group);
                Ok(())
            },
        ));
    }

    /// Like [`group_by_key`](Self::group_by_key), with a hard cap on group
    /// size.
    ///
    /// The cap forces mid-run splits; a key change still ends the group even
    /// when the cap has not been reached. `max_size == 0` means no cap.
    pub fn group_by_key_capped<K, F, S>(self, max_size: usize, key_of: F, mut sink: S)
    where
        K: PartialEq,
        F: FnMut(&I::Item) -> K,
        S: FnMut(Vec<I::Item>),
    {
        if max_size == 0 {
            return self.group_by_key(key_of, sink);
        }
        discharge(scan_split(
            self.source,
            Vec::new(),
            count_limited(max_size, key_changes(key_of)),
            |group| {
                sink(group);
                Ok(())
            },
        ));
    }

    /// Fixed-size chunking: delivers groups of `max_size` elements and a
    /// final short chunk.
    ///
    /// With `max_size == 0` the whole source arrives as one group.
    pub fn group_every<S>(self, max_size: usize, sink: S)
    where
        S: FnMut(Vec<I::Item>),
    {
        self.group_by_capped(max_size, |_, _| false, sink);
    }

    /// Fallible form of [`group_by`](Self::group_by).
    ///
    /// An error from `split` or `sink` aborts the call immediately and
    /// propagates; groups already delivered stay delivered (the operation is
    /// not transactional).
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `split` or `sink`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chunkwise::{ChunkError, SequenceGrouper};
    ///
    /// let result = SequenceGrouper::new(vec![1, 2, 3]).try_group_by(
    ///     |_, _| Ok(true),
    ///     |group| {
    ///         if group == vec![2] {
    ///             Err(ChunkError::group_error("bulk insert rejected"))
    ///         } else {
    ///             Ok(())
    ///         }
    ///     },
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn try_group_by<D, S>(self, split: D, sink: S) -> Result<()>
    where
        D: FnMut(&I::Item, &I::Item) -> Result<bool>,
        S: FnMut(Vec<I::Item>) -> Result<()>,
    {
        trace_abort(
            "group_by",
            scan_split(self.source, Vec::new(), split, sink),
        )
    }

    /// Fallible form of [`group_by_capped`](Self::group_by_capped).
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `split` or `sink`.
    pub fn try_group_by_capped<D, S>(self, max_size: usize, split: D, sink: S) -> Result<()>
    where
        D: FnMut(&I::Item, &I::Item) -> Result<bool>,
        S: FnMut(Vec<I::Item>) -> Result<()>,
    {
        if max_size == 0 {
            return self.try_group_by(split, sink);
        }
        trace_abort(
            "group_by_capped",
            scan_split(
                self.source,
                Vec::new(),
                count_limited(max_size, split),
                sink,
            ),
        )
    }

    /// Fallible form of [`group_by_key`](Self::group_by_key).
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `sink`.
    pub fn try_group_by_key<K, F, S>(self, key_of: F, sink: S) -> Result<()>
    where
        K: PartialEq,
        F: FnMut(&I::Item) -> K,
        S: FnMut(Vec<I::Item>) -> Result<()>,
    {
        trace_abort(
            "group_by_key",
            scan_split(self.source, Vec::new(), key_changes(key_of), sink),
        )
    }

    /// Fallible form of [`group_by_key_capped`](Self::group_by_key_capped).
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `sink`.
    pub fn try_group_by_key_capped<K, F, S>(self, max_size: usize, key_of: F, sink: S) -> Result<()>
    where
        K: PartialEq,
        F: FnMut(&I::Item) -> K,
        S: FnMut(Vec<I::Item>) -> Result<()>,
    {
        if max_size == 0 {
            return self.try_group_by_key(key_of, sink);
        }
        trace_abort(
            "group_by_key_capped",
            scan_split(
                self.source,
                Vec::new(),
                count_limited(max_size, key_changes(key_of)),
                sink,
            ),
        )
    }

    /// Fallible form of [`group_every`](Self::group_every).
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `sink`.
    pub fn try_group_every<S>(self, max_size: usize, sink: S) -> Result<()>
    where
        S: FnMut(Vec<I::Item>) -> Result<()>,
    {
        self.try_group_by_capped(max_size, |_, _| Ok(false), sink)
    }

    /// Invokes `on_pair` on every adjacent pair the rule actions, without
    /// building groups.
    ///
    /// The rule doubles as "should I act on this pair". If the final pair of
    /// the source was not actioned by the rule, it is delivered once at
    /// termination, mirroring the final flush of the grouping operations.
    /// Sources with fewer than two elements produce no pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use chunkwise::SequenceGrouper;
    ///
    /// let mut jumps = Vec::new();
    /// SequenceGrouper::new(vec![1, 2, 10, 11])
    ///     .for_each_pair(
    ///         |current, next| next - current > 5,
    ///         |current, next| jumps.push((*current, *next)),
    ///     );
    ///
    /// // (2, 10) actioned by the rule, (10, 11) delivered at termination.
    /// assert_eq!(jumps, vec![(2, 10), (10, 11)]);
    /// ```
    pub fn for_each_pair<D, P>(self, mut hit: D, mut on_pair: P)
    where
        D: FnMut(&I::Item, &I::Item) -> bool,
        P: FnMut(&I::Item, &I::Item),
    {
        discharge(scan_pairs(
            self.source,
            |current, next| Ok(hit(current, next)),
            |current, next| {
                on_pair(current, next);
                Ok(())
            },
        ));
    }

    /// Like [`for_each_pair`](Self::for_each_pair), additionally actioning a
    /// pair every `max_size` evaluations. `max_size == 0` means no cap.
    pub fn for_each_pair_capped<D, P>(self, max_size: usize, mut hit: D, mut on_pair: P)
    where
        D: FnMut(&I::Item, &I::Item) -> bool,
        P: FnMut(&I::Item, &I::Item),
    {
        if max_size == 0 {
            return self.for_each_pair(hit, on_pair);
        }
        discharge(scan_pairs(
            self.source,
            count_limited(max_size, move |current, next| Ok(hit(current, next))),
            |current, next| {
                on_pair(current, next);
                Ok(())
            },
        ));
    }

    /// Actions a pair every `max_size` evaluations, with no semantic rule.
    ///
    /// With `max_size == 0` only the final pair is delivered.
    pub fn for_each_pair_every<P>(self, max_size: usize, on_pair: P)
    where
        P: FnMut(&I::Item, &I::Item),
    {
        self.for_each_pair_capped(max_size, |_, _| false, on_pair);
    }

    /// Fallible form of [`for_each_pair`](Self::for_each_pair).
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `hit` or `on_pair`.
    pub fn try_for_each_pair<D, P>(self, hit: D, on_pair: P) -> Result<()>
    where
        D: FnMut(&I::Item, &I::Item) -> Result<bool>,
        P: FnMut(&I::Item, &I::Item) -> Result<()>,
    {
        trace_abort("for_each_pair", scan_pairs(self.source, hit, on_pair))
    }

    /// Fallible form of [`for_each_pair_capped`](Self::for_each_pair_capped).
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `hit` or `on_pair`.
    pub fn try_for_each_pair_capped<D, P>(self, max_size: usize, hit: D, on_pair: P) -> Result<()>
    where
        D: FnMut(&I::Item, &I::Item) -> Result<bool>,
        P: FnMut(&I::Item, &I::Item) -> Result<()>,
    {
        if max_size == 0 {
            return self.try_for_each_pair(hit, on_pair);
        }
        trace_abort(
            "for_each_pair_capped",
            scan_pairs(self.source, count_limited(max_size, hit), on_pair),
        )
    }

    /// Fallible form of [`for_each_pair_every`](Self::for_each_pair_every).
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `on_pair`.
    pub fn try_for_each_pair_every<P>(self, max_size: usize, on_pair: P) -> Result<()>
    where
        P: FnMut(&I::Item, &I::Item) -> Result<()>,
    {
        self.try_for_each_pair_capped(max_size, |_, _| Ok(false), on_pair)
    }
}
