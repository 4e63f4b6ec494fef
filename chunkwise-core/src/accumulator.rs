// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Accumulation targets for the pair-split scan.
//!
//! An [`Accumulator`] is where the scan parks elements between two splits.
//! Flushing hands the accumulated group to the caller and leaves the
//! accumulator empty, ready for the next contiguous run.
//!
//! Two implementations are provided:
//!
//! - `Vec<T>` : ordered groups for sequence sources; input order is preserved
//!   within and across groups.
//! - `HashMap<K, V>` over `(K, V)` items — groups for mapping sources; only
//!   key-set partitioning is guaranteed, not entry order.

use core::mem::take;
use std::collections::HashMap;
use std::hash::Hash;

/// A growable group under construction.
///
/// The scan appends one element at a time and takes the finished group out
/// at each split. Taking must leave the accumulator empty so the same value
/// can accumulate the next group without reallocation of the accumulator
/// itself.
pub trait Accumulator<T> {
    /// The finished group handed to the caller on flush.
    type Group;

    /// Append one element to the group under construction.
    fn push(&mut self, item: T);

    /// `true` if no element has been appended since the last [`take`](Self::take).
    fn is_empty(&self) -> bool;

    /// Take the finished group out, leaving the accumulator empty.
    fn take(&mut self) -> Self::Group;
}

impl<T> Accumulator<T> for Vec<T> {
    type Group = Vec<T>;

    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn take(&mut self) -> Self::Group {
        take(self)
    }
}

impl<K, V> Accumulator<(K, V)> for HashMap<K, V>
where
    K: Eq + Hash,
{
    type Group = HashMap<K, V>;

    fn push(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }

    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }

    fn take(&mut self) -> Self::Group {
        take(self)
    }
}
