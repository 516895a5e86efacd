//! Sorting by a floating point key.
//!
//! Numbers keep their natural order, so `-0.0` and `0.0` are equal keys and a
//! stable sort leaves them in input order. NaN keys are equal to each other
//! and sort after every number, which keeps the order total.

use crate::algo;
use crate::core::NanLast;

/// Sorts the slice by the `f64` returned by `key`.
///
/// The sort is not stable. For a stable sort, use [`sort_stable`].
pub fn sort<T, F>(v: &mut [T], mut key: F)
where
    F: FnMut(&T) -> f64,
{
    v.sort_unstable_by(|a, b| key(a).nan_last_cmp(key(b)));
}

/// Stable version of [`sort`].
pub fn sort_stable<T, F>(v: &mut [T], mut key: F)
where
    F: FnMut(&T) -> f64,
{
    v.sort_by(|a, b| key(a).nan_last_cmp(key(b)));
}

/// Tests whether the slice is sorted by the `f64` returned by `key`.
pub fn is_sorted<T, F>(v: &[T], mut key: F) -> bool
where
    F: FnMut(&T) -> f64,
{
    algo::is_sorted_by_less(v, |a, b| key(a).nan_last_less(key(b)))
}
