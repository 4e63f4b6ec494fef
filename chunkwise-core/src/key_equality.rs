// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Key-equality adapter turning a key extraction into a decision function.
//!
//! [`key_changes`] implements "group maximal consecutive runs of elements
//! sharing the same derived key": the produced decision function answers
//! `true` exactly when two adjacent elements map to different keys. Equality
//! is by value (`PartialEq`); extracting into `Option<K>` treats two `None`
//! keys as equal, so absent keys group together.

/// Adapts a key-extraction function into a split-on-key-change decision
/// function.
///
/// The key is extracted from both elements of each adjacent pair and the pair
/// splits when the keys differ. Non-adjacent runs with the same key are never
/// merged; the adapter only ever looks at one pair at a time.
///
/// # Examples
///
/// ```
/// use chunkwise_core::key_equality::key_changes;
/// use chunkwise_core::pair_scan::scan_split;
/// use std::convert::Infallible;
///
/// let words = vec!["ant", "axe", "bee", "arc"];
/// let mut groups: Vec<Vec<&str>> = Vec::new();
/// let result: Result<(), Infallible> = scan_split(
///     words,
///     Vec::new(),
///     key_changes(|word: &&str| word.chars().next()),
///     |group| {
///         groups.push(group);
///         Ok(())
///     },
/// );
/// assert!(result.is_ok());
/// // The two 'a' runs stay separate: only consecutive equal keys group.
/// assert_eq!(groups, vec![vec!["ant", "axe"], vec!["bee"], vec!["arc"]]);
/// ```
pub fn key_changes<T, K, F, E>(mut key_of: F) -> impl FnMut(&T, &T) -> Result<bool, E>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    move |current, next| Ok(key_of(current) != key_of(next))
}
