// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core primitives for the chunkwise grouping library.
//!
//! This crate holds the algorithmic heart shared by the `chunkwise` facade:
//! a single-pass pair-split scan, the accumulation abstraction it flushes
//! through, and the two decision-function decorators everything else is
//! wired from.
//!
//! # Architecture
//!
//! - **[`pair_scan`]**: the traversal. [`scan_split`](pair_scan::scan_split)
//!   partitions a source into contiguous groups; [`scan_pairs`](pair_scan::scan_pairs)
//!   acts on adjacent pairs directly.
//! - **[`Accumulator`]**: where a group grows between splits. `Vec<T>` keeps
//!   sequence groups ordered; `HashMap<K, V>` backs mapping groups.
//! - **[`count_limited`]**: forces a split every N elements on top of any
//!   rule.
//! - **[`key_changes`]**: turns a key extraction into a split-on-key-change
//!   rule.
//! - **[`ChunkError`]**: the root error type fallible grouping calls
//!   propagate.
//!
//! The scans are generic over the error type, so infallible callers pay
//! nothing: they instantiate it at `core::convert::Infallible` and the
//! `Result` is discharged statically.
//!
//! Everything here is synchronous and call-scoped. A grouping call owns its
//! accumulator and the decorators' counters; no state outlives or is shared
//! across calls.

pub mod accumulator;
pub mod chunk_error;
pub mod count_limiter;
pub mod key_equality;
pub mod pair_scan;

pub use accumulator::Accumulator;
pub use chunk_error::{ChunkError, Result, ResultExt};
pub use count_limiter::count_limited;
pub use key_equality::key_changes;
pub use pair_scan::{scan_pairs, scan_split};
