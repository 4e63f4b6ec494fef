// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Grouping operations over key/value mappings.
//!
//! # Overview
//!
//! [`MappingGrouper`] wraps any finite source of `(K, V)` entries (a
//! `HashMap`, a `BTreeMap`, an entry vector) and partitions it into
//! sub-mappings. Group membership follows the source's iteration order,
//! treated as fixed for the duration of one grouping call; each delivered
//! group is a `HashMap<K, V>`, so only key-set partitioning is guaranteed,
//! not entry order within a group. The union of the delivered key sets equals
//! the source's key set, each key appearing in exactly one group.
//!
//! Only the grouping family exists here; the pairwise family is specific to
//! ordered sequences.
//!
//! # Basic Usage
//!
//! ```
//! use chunkwise::MappingGrouper;
//! use std::collections::BTreeMap;
//!
//! let scores = BTreeMap::from([("ada", 90), ("ana", 85), ("bob", 70)]);
//!
//! let mut groups = Vec::new();
//! MappingGrouper::new(scores)
//!     .group_by_key(|entry| entry.0.chars().next(), |group| groups.push(group));
//!
//! // BTreeMap iterates in key order: the two 'a' names, then "bob".
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].len(), 2);
//! assert_eq!(groups[1].get("bob"), Some(&70));
//! ```

use crate::logging::trace_abort;
use crate::util::discharge;
use chunkwise_core::{count_limited, key_changes, scan_split, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// Partitions a finite key/value mapping into contiguous sub-mappings.
///
/// Contiguity is relative to the source's own iteration order. Every
/// operation consumes the grouper and drives the source in a single pass,
/// invoking the group callback synchronously on the caller's thread. An empty
/// source produces zero callback invocations.
pub struct MappingGrouper<M> {
    source: M,
}

impl<M, K, V> MappingGrouper<M>
where
    M: IntoIterator<Item = (K, V)>,
    K: Eq + Hash,
{
    /// Wraps a finite source of key/value entries.
    pub fn new(source: M) -> Self {
        Self { source }
    }

    /// Groups entries, splitting wherever `split` answers `true` for a pair
    /// of adjacent entries in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chunkwise::MappingGrouper;
    /// use std::collections::BTreeMap;
    ///
    /// let readings = BTreeMap::from([(1, "a"), (2, "b"), (10, "c")]);
    ///
    /// let mut groups = Vec::new();
    /// MappingGrouper::new(readings)
    ///     .group_by(|current, next| next.0 - current.0 > 1, |group| groups.push(group));
    ///
    /// // The gap between 2 and 10 splits the mapping in two.
    /// assert_eq!(groups.len(), 2);
    /// assert_eq!(groups[0].len(), 2);
    /// assert_eq!(groups[1].get(&10), Some(&"c"));
    /// ```
    pub fn group_by<D, S>(self, mut split: D, mut sink: S)
    where
        D: FnMut(&(K, V), &(K, V)) -> bool,
        S: FnMut(HashMap<K, V>),
    {
        discharge(scan_split(
            self.source,
            HashMap::new(),
            |current, next| Ok(split(current, next)),
            |group| {
                sink(group);
                Ok(())
            },
        ));
    }

    /// Like [`group_by`](Self::group_by), with a hard cap on group size.
    ///
    /// `max_size == 0` means no cap.
    pub fn group_by_capped<D, S>(self, max_size: usize, mut split: D, mut sink: S)
    where
        D: FnMut(&(K, V), &(K, V)) -> bool,
        S: FnMut(HashMap<K, V>),
    {
        if max_size == 0 {
            return self.group_by(split, sink);
        }
        discharge(scan_split(
            self.source,
            HashMap::new(),
            count_limited(max_size, move |current, next| Ok(split(current, next))),
            |group| {
                sink(group);
                Ok(())
            },
        ));
    }

    /// Groups maximal consecutive runs of entries sharing the same derived
    /// key, in iteration order.
    pub fn group_by_key<C, F, S>(self, key_of: F, mut sink: S)
    where
        C: PartialEq,
        F: FnMut(&(K, V)) -> C,
        S: FnMut(HashMap<K, V>),
    {
        discharge(scan_split(
            self.source,
            HashMap::new(),
            key_changes(key_of),
            |group| {
                sink(group);
                Ok(())
            },
        ));
    }

    /// Like [`group_by_key`](Self::group_by_key), with a hard cap on group
    /// size. `max_size == 0` means no cap.
    pub fn group_by_key_capped<C, F, S>(self, max_size: usize, key_of: F, mut sink: S)
    where
        C: PartialEq,
        F: FnMut(&(K, V)) -> C,
        S: FnMut(HashMap<K, V>),
    {
        if max_size == 0 {
            return self.group_by_key(key_of, sink);
        }
        discharge(scan_split(
            self.source,
            HashMap::new(),
            count_limited(max_size, key_changes(key_of)),
            |group| {
                sink(group);
                Ok(())
            },
        ));
    }

    /// Fixed-size chunking of the entry sequence, with a final short group.
    ///
    /// With `max_size == 0` the whole mapping arrives as one group.
    pub fn group_every<S>(self, max_size: usize, sink: S)
    where
        S: FnMut(HashMap<K, V>),
    {
        self.group_by_capped(max_size, |_, _| false, sink);
    }

    /// Fallible form of [`group_by`](Self::group_by).
    ///
    /// An error from `split` or `sink` aborts the call immediately and
    /// propagates; groups already delivered stay delivered.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `split` or `sink`.
    pub fn try_group_by<D, S>(self, split: D, sink: S) -> Result<()>
    where
        D: FnMut(&(K, V), &(K, V)) -> Result<bool>,
        S: FnMut(HashMap<K, V>) -> Result<()>,
    {
        trace_abort(
            "mapping group_by",
            scan_split(self.source, HashMap::new(), split, sink),
        )
    }

    /// Fallible form of [`group_by_capped`](Self::group_by_capped).
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `split` or `sink`.
    pub fn try_group_by_capped<D, S>(self, max_size: usize, split: D, sink: S) -> Result<()>
    where
        D: FnMut(&(K, V), &(K, V)) -> Result<bool>,
        S: FnMut(HashMap<K, V>) -> Result<()>,
    {
        if max_size == 0 {
            return self.try_group_by(split, sink);
        }
        trace_abort(
            "mapping group_by_capped",
            scan_split(
                self.source,
                HashMap::new(),
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
    pub fn try_group_by_key<C, F, S>(self, key_of: F, sink: S) -> Result<()>
    where
        C: PartialEq,
        F: FnMut(&(K, V)) -> C,
        S: FnMut(HashMap<K, V>) -> Result<()>,
    {
        trace_abort(
            "mapping group_by_key",
            scan_split(self.source, HashMap::new(), key_changes(key_of), sink),
        )
    }

    /// Fallible form of [`group_by_key_capped`](Self::group_by_key_capped).
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `sink`.
    pub fn try_group_by_key_capped<C, F, S>(self, max_size: usize, key_of: F, sink: S) -> Result<()>
    where
        C: PartialEq,
        F: FnMut(&(K, V)) -> C,
        S: FnMut(HashMap<K, V>) -> Result<()>,
    {
        if max_size == 0 {
            return self.try_group_by_key(key_of, sink);
        }
        trace_abort(
            "mapping group_by_key_capped",
            scan_split(
                self.source,
                HashMap::new(),
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
        S: FnMut(HashMap<K, V>) -> Result<()>,
    {
        self.try_group_by_capped(max_size, |_, _| Ok(false), sink)
    }
}
