//! Sorting engines shared by every key kind.
//!
//! The in-place sorts hand a three-way comparator straight to the standard
//! library. This module holds the sortedness check they share and the
//! index-based entry points:
//! - [`argsort`] / [`argsort_stable`]: compute the sorting permutation of a
//!   [`KeyAccessor`] without moving anything.
//! - [`is_sorted`]: check a [`KeyAccessor`] for order.
//! - [`apply_permutation`]: carry a computed permutation over to a slice.

use crate::core::{KeyAccessor, SortKey};

/// Returns the indices that put the accessor's keys in ascending order.
///
/// The collection itself is not modified. Indices of equal keys come out in an
/// unspecified order; use [`argsort_stable`] to keep them ascending.
///
/// # Examples
///
/// ```
/// use keysort::argsort;
///
/// let data = vec!["banana", "apple", "cherry"];
/// let indices = argsort(&data);
///
/// assert_eq!(indices, vec![1, 0, 2]); // apple, banana, cherry
/// ```
pub fn argsort<A: KeyAccessor + ?Sized>(provider: &A) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..provider.len()).collect();
    indices.sort_unstable_by(|&a, &b| provider.get_key(a).key_cmp(&provider.get_key(b)));
    indices
}

/// Like [`argsort`], but indices of equal keys stay in ascending order.
pub fn argsort_stable<A: KeyAccessor + ?Sized>(provider: &A) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..provider.len()).collect();
    indices.sort_by(|&a, &b| provider.get_key(a).key_cmp(&provider.get_key(b)));
    indices
}

/// Returns `true` if no key of the accessor orders strictly before the key at
/// the previous position.
pub fn is_sorted<A: KeyAccessor + ?Sized>(provider: &A) -> bool {
    (1..provider.len()).all(|i| !provider.get_key(i).key_less(&provider.get_key(i - 1)))
}

/// Reorders `data` so that position `k` holds what was at `order[k]`.
///
/// Follows the permutation's cycles with swaps, so `T` need not be `Clone`.
///
/// # Panics
///
/// If `order` is not a permutation of `0..data.len()`.
///
/// # Examples
///
/// ```
/// use keysort::{apply_permutation, argsort, by_position};
///
/// let mut people = vec![("bo", 41), ("ann", 29), ("cy", 35)];
/// let order = argsort(&by_position(people.len(), |i| people[i].1));
/// apply_permutation(&mut people, order);
///
/// assert_eq!(people, [("ann", 29), ("cy", 35), ("bo", 41)]);
/// ```
pub fn apply_permutation<T>(data: &mut [T], mut order: Vec<usize>) {
    assert_eq!(
        order.len(),
        data.len(),
        "permutation has {} entries for a slice of length {}",
        order.len(),
        data.len()
    );

    let mut seen = vec![false; order.len()];
    for &index in &order {
        assert!(
            index < seen.len() && !seen[index],
            "order is not a permutation of 0..{}: bad index {}",
            seen.len(),
            index
        );
        seen[index] = true;
    }

    for i in 0..data.len() {
        let mut current = i;
        while order[current] != i {
            let next = order[current];
            data.swap(current, next);
            order[current] = current; // Mark as placed
            current = next;
        }
        order[current] = current;
    }
}

/// Checks every adjacent pair: `v[i + 1]` must not be less than `v[i]`.
pub(crate) fn is_sorted_by_less<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}
