// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Chunkwise
//!
//! A small generic library for partitioning an ordered sequence (or a
//! key/value mapping) into contiguous groups, so that batch operations such
//! as bulk network calls or grouped inserts can be expressed without
//! hand-written loop-and-buffer boilerplate.
//!
//! ## Overview
//!
//! The caller supplies a rule for where one group ends and the next begins:
//! either a pairwise predicate over adjacent elements, or a key-extraction
//! function whose output must stay constant within a group. An optional hard
//! cap on group size forces a split regardless of the rule. Each finished
//! group is delivered to a callback exactly once, in the order encountered.
//!
//! - **[`SequenceGrouper`]** groups elements of an ordered sequence into
//!   `Vec`s, preserving input order within and across groups.
//! - **[`MappingGrouper`]** groups key/value entries into `HashMap`s; the key
//!   sets of the delivered groups partition the source's key set exactly.
//!
//! Everything is synchronous and single-pass: a grouping call fully drives
//! its source to completion before returning, invoking the callback in-line
//! on the caller's thread. Sources must be finite.
//!
//! ## Quick Start
//!
//! ```rust
//! use chunkwise::IntoSequenceGrouper;
//!
//! // Bulk-insert per customer, at most 100 rows per statement.
//! vec![("rossi", 1), ("rossi", 2), ("bianchi", 3)]
//!     .into_grouper()
//!     .group_by_key_capped(100, |order| order.0, |batch| {
//!         // one bulk call per batch
//!         assert!(!batch.is_empty());
//!     });
//! ```
//!
//! ## Error Handling
//!
//! Every operation has a `try_` form whose rule and callback return
//! [`Result`]; the first error aborts the call and propagates as a
//! [`ChunkError`]. Groups delivered before the failure stay delivered: the
//! operation is not transactional, and recovery or retry policy belongs to
//! the caller that owns the callback.

mod logging;
mod util;

pub mod into_grouper;
pub mod mapping_grouper;
pub mod sequence_grouper;

// Re-export core types
pub use chunkwise_core::{ChunkError, Result, ResultExt};

pub use into_grouper::{IntoMappingGrouper, IntoSequenceGrouper};
pub use mapping_grouper::MappingGrouper;
pub use sequence_grouper::SequenceGrouper;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::into_grouper::{IntoMappingGrouper, IntoSequenceGrouper};
    pub use crate::mapping_grouper::MappingGrouper;
    pub use crate::sequence_grouper::SequenceGrouper;
    pub use chunkwise_core::{ChunkError, Result};
}
