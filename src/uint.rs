//! Sorting by an unsigned integer key.

use crate::algo;

/// Sorts the slice by the `u64` returned by `key`.
///
/// The sort is not stable. For a stable sort, use [`sort_stable`].
pub fn sort<T, F>(v: &mut [T], mut key: F)
where
    F: FnMut(&T) -> u64,
{
    v.sort_unstable_by(|a, b| key(a).cmp(&key(b)));
}

/// Stable version of [`sort`].
pub fn sort_stable<T, F>(v: &mut [T], mut key: F)
where
    F: FnMut(&T) -> u64,
{
    v.sort_by(|a, b| key(a).cmp(&key(b)));
}

/// Tests whether the slice is sorted by the `u64` returned by `key`.
pub fn is_sorted<T, F>(v: &[T], mut key: F) -> bool
where
    F: FnMut(&T) -> u64,
{
    algo::is_sorted_by_less(v, |a, b| key(a) < key(b))
}
