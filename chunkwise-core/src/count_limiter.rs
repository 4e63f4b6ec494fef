// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Size-cap decorator for decision functions.
//!
//! [`count_limited`] wraps any decision function so that a split is also
//! forced every `max_size` elements, regardless of the wrapped rule's answer.
//! The counter lives inside the returned closure, scoped to one grouping
//! call; it is reset on every split the decorator reports, so the cap always
//! measures "elements since the last flush".

/// Wraps a decision function with a hard group-size cap.
///
/// On each pairwise evaluation the captured counter is incremented. Once it
/// reaches `max_size` the decorator reports a split without consulting the
/// wrapped rule and resets the counter; below the cap it defers to the
/// wrapped rule. The counter is also reset when the wrapped rule itself
/// triggers the split, so no group ever exceeds `max_size` elements.
///
/// A `max_size` of `0` means no cap: the wrapped rule alone decides. Callers
/// that want the decorator skipped entirely should branch before composing,
/// as the grouper front-ends do.
///
/// # Examples
///
/// ```
/// use chunkwise_core::count_limiter::count_limited;
/// use chunkwise_core::pair_scan::scan_split;
/// use std::convert::Infallible;
///
/// let mut groups: Vec<Vec<i32>> = Vec::new();
/// let result: Result<(), Infallible> = scan_split(
///     vec![1, 2, 3, 4, 5],
///     Vec::new(),
///     count_limited(2, |_: &i32, _: &i32| Ok(false)),
///     |group| {
///         groups.push(group);
///         Ok(())
///     },
/// );
/// assert!(result.is_ok());
/// assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn count_limited<T, D, E>(
    max_size: usize,
    mut split: D,
) -> impl FnMut(&T, &T) -> Result<bool, E>
where
    D: FnMut(&T, &T) -> Result<bool, E>,
{
    let mut since_flush = 0usize;
    move |current, next| {
        since_flush += 1;
        // Cap check first: at the cap the wrapped rule is not consulted.
        let split_here = (max_size > 0 && since_flush >= max_size) || split(current, next)?;
        if split_here {
            since_flush = 0;
        }
        Ok(split_here)
    }
}
