//! Sorting by a text key.
//!
//! ```
//! use keysort::string;
//!
//! let mut pairs = vec![("b", 2), ("a", 1), ("z", 4), ("x", 3)];
//! assert!(!string::is_sorted(&pairs, |p| p.0));
//!
//! string::sort(&mut pairs, |p| p.0);
//! assert!(string::is_sorted(&pairs, |p| p.0));
//! assert_eq!(pairs, [("a", 1), ("b", 2), ("x", 3), ("z", 4)]);
//! ```

use crate::algo;

/// Sorts the slice by the string returned by `key`, byte-wise.
///
/// The sort is not stable. For a stable sort, use [`sort_stable`].
pub fn sort<T, F>(v: &mut [T], mut key: F)
where
    F: for<'a> FnMut(&'a T) -> &'a str,
{
    v.sort_unstable_by(|a, b| key(a).cmp(key(b)));
}

/// Stable version of [`sort`].
pub fn sort_stable<T, F>(v: &mut [T], mut key: F)
where
    F: for<'a> FnMut(&'a T) -> &'a str,
{
    v.sort_by(|a, b| key(a).cmp(key(b)));
}

/// Tests whether the slice is sorted by the string returned by `key`.
pub fn is_sorted<T, F>(v: &[T], mut key: F) -> bool
where
    F: for<'a> FnMut(&'a T) -> &'a str,
{
    algo::is_sorted_by_less(v, |a, b| key(a) < key(b))
}
