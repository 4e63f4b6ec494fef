// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversion traits wrapping existing containers into groupers.
//!
//! These blanket traits make grouping read fluently off the source container
//! instead of going through the constructors:
//!
//! ```
//! use chunkwise::IntoSequenceGrouper;
//!
//! let mut batches = Vec::new();
//! vec![1, 2, 3, 4, 5]
//!     .into_grouper()
//!     .group_every(2, |batch| batches.push(batch));
//!
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use crate::mapping_grouper::MappingGrouper;
use crate::sequence_grouper::SequenceGrouper;
use std::hash::Hash;

/// Wraps any finite ordered source into a [`SequenceGrouper`].
pub trait IntoSequenceGrouper: IntoIterator + Sized {
    /// Consumes the source and returns a grouper over it.
    fn into_grouper(self) -> SequenceGrouper<Self> {
        SequenceGrouper::new(self)
    }
}

impl<I> IntoSequenceGrouper for I where I: IntoIterator {}

/// Wraps any finite source of key/value entries into a [`MappingGrouper`].
pub trait IntoMappingGrouper<K, V>: IntoIterator<Item = (K, V)> + Sized
where
    K: Eq + Hash,
{
    /// Consumes the mapping and returns a grouper over its entries.
    fn into_mapping_grouper(self) -> MappingGrouper<Self> {
        MappingGrouper::new(self)
    }
}

impl<M, K, V> IntoMappingGrouper<K, V> for M
where
    M: IntoIterator<Item = (K, V)>,
    K: Eq + Hash,
{
}
