//! Sorting by composite keys.
//!
//! The key function returns a [`Tuple`]: one [`Component`] per sort column.
//! Tuples are compared lexicographically, left to right, descending into the
//! next column only while the current columns are equal.
//!
//! Every tuple handed to one comparison must have the same length, and the
//! components in one column must all be of the same kind. Violations are
//! programming errors and panic with a [`KeyError`] message. Booleans can be
//! tested for equality but not ordered, so a boolean column always panics when
//! sorted.
//!
//! ```
//! use keysort::tuple;
//!
//! let mut rows: Vec<(&str, i32)> = vec![("b", 2), ("b", 1), ("z", 0), ("x", 3)];
//!
//! tuple::sort(&mut rows, |r| vec![r.0.into(), r.1.into()]);
//! assert_eq!(rows, [("b", 1), ("b", 2), ("x", 3), ("z", 0)]);
//!
//! tuple::sort(&mut rows, |r| vec![r.1.into(), r.0.into()]);
//! assert_eq!(rows, [("z", 0), ("b", 1), ("b", 2), ("x", 3)]);
//! ```

use std::cmp::Ordering;

use crate::algo;
use crate::core::{Component, NanLast, Tuple};
use crate::error::KeyError;

/// Sorts the slice by the composite key returned by `key`.
///
/// The sort is not stable. For a stable sort, use [`sort_stable`].
///
/// # Panics
///
/// If two keys differ in length, or a column mixes component kinds, holds a
/// `Bool`, or holds an unsupported type.
pub fn sort<T, F>(v: &mut [T], mut key: F)
where
    F: for<'a> FnMut(&'a T) -> Tuple<'a>,
{
    v.sort_unstable_by(|a, b| cmp(&key(a), &key(b)));
}

/// Sorts the slice by the composite key returned by `key`, keeping elements
/// with equal keys in their original order.
///
/// # Panics
///
/// Under the same conditions as [`sort`].
pub fn sort_stable<T, F>(v: &mut [T], mut key: F)
where
    F: for<'a> FnMut(&'a T) -> Tuple<'a>,
{
    v.sort_by(|a, b| cmp(&key(a), &key(b)));
}

/// Returns `true` if no element's key orders strictly before its predecessor's.
///
/// # Panics
///
/// Under the same conditions as [`sort`].
pub fn is_sorted<T, F>(v: &[T], mut key: F) -> bool
where
    F: for<'a> FnMut(&'a T) -> Tuple<'a>,
{
    algo::is_sorted_by_less(v, |a, b| less(&key(a), &key(b)))
}

/// Returns `true` if tuple `a` orders strictly before tuple `b`.
///
/// Fully equal tuples are never less than each other.
///
/// # Panics
///
/// On any [`KeyError`], see [`try_less`].
pub fn less(a: &[Component<'_>], b: &[Component<'_>]) -> bool {
    try_less(a, b).unwrap_or_else(|err| panic!("{}", err))
}

/// Checked form of [`less`].
///
/// Walks both tuples column by column. The first column where `a` is smaller
/// decides `true`, the first column where they differ otherwise decides
/// `false`. Columns after the deciding one are never inspected.
///
/// ```
/// use keysort::tuple::try_less;
/// use keysort::{Component, KeyError};
///
/// let a: Vec<Component> = vec![1i64.into(), "a".into()];
/// let b: Vec<Component> = vec![1i64.into(), "b".into()];
/// assert_eq!(try_less(&a, &b), Ok(true));
/// assert_eq!(try_less(&b, &a), Ok(false));
///
/// let short: Vec<Component> = vec![1i64.into()];
/// assert_eq!(
///     try_less(&short, &a),
///     Err(KeyError::LengthMismatch { left: 1, right: 2 })
/// );
/// ```
pub fn try_less(a: &[Component<'_>], b: &[Component<'_>]) -> Result<bool, KeyError> {
    if a.len() != b.len() {
        return Err(KeyError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    for (x, y) in a.iter().zip(b) {
        if try_component_less(x, y)? {
            return Ok(true);
        }
        if !try_component_eq(x, y)? {
            return Ok(false);
        }
    }

    Ok(false)
}

/// Three-way form of [`less`]: `Less` exactly when `less(a, b)` holds, `Equal`
/// when every column is equal, `Greater` otherwise.
///
/// # Panics
///
/// On any [`KeyError`], see [`try_cmp`].
pub fn cmp(a: &[Component<'_>], b: &[Component<'_>]) -> Ordering {
    try_cmp(a, b).unwrap_or_else(|err| panic!("{}", err))
}

/// Checked form of [`cmp`]. Faults under exactly the same conditions as
/// [`try_less`], since it walks the columns the same way.
///
/// ```
/// use std::cmp::Ordering;
/// use keysort::tuple::try_cmp;
/// use keysort::Component;
///
/// let a: Vec<Component> = vec!["x".into(), 2u8.into()];
/// let b: Vec<Component> = vec!["x".into(), 1u8.into()];
/// assert_eq!(try_cmp(&a, &b), Ok(Ordering::Greater));
/// assert_eq!(try_cmp(&b, &a), Ok(Ordering::Less));
/// assert_eq!(try_cmp(&a, &a), Ok(Ordering::Equal));
/// ```
pub fn try_cmp(a: &[Component<'_>], b: &[Component<'_>]) -> Result<Ordering, KeyError> {
    if a.len() != b.len() {
        return Err(KeyError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    for (x, y) in a.iter().zip(b) {
        if try_component_less(x, y)? {
            return Ok(Ordering::Less);
        }
        if !try_component_eq(x, y)? {
            return Ok(Ordering::Greater);
        }
    }

    Ok(Ordering::Equal)
}

/// Returns `true` if component `a` orders strictly before component `b`.
///
/// # Panics
///
/// On any [`KeyError`], see [`try_component_less`].
pub fn component_less(a: &Component<'_>, b: &Component<'_>) -> bool {
    try_component_less(a, b).unwrap_or_else(|err| panic!("{}", err))
}

/// Returns `true` if components `a` and `b` are equal.
///
/// # Panics
///
/// On any [`KeyError`], see [`try_component_eq`].
pub fn component_eq(a: &Component<'_>, b: &Component<'_>) -> bool {
    try_component_eq(a, b).unwrap_or_else(|err| panic!("{}", err))
}

/// Checked form of [`component_less`].
///
/// Dispatches on the kind of `a`: an unsupported `a` fails with
/// [`KeyError::UnsupportedType`], a `Bool` with [`KeyError::Unordered`], and a
/// `b` of another kind with [`KeyError::MismatchedTypes`].
pub fn try_component_less(a: &Component<'_>, b: &Component<'_>) -> Result<bool, KeyError> {
    use Component::*;

    match (a, b) {
        (Unsupported(name), _) => Err(KeyError::UnsupportedType(*name)),
        (Bool(_), _) => Err(KeyError::Unordered(a.kind())),
        (Str(x), Str(y)) => Ok(**x < **y),
        (I8(x), I8(y)) => Ok(x < y),
        (I16(x), I16(y)) => Ok(x < y),
        (I32(x), I32(y)) => Ok(x < y),
        (I64(x), I64(y)) => Ok(x < y),
        (Isize(x), Isize(y)) => Ok(x < y),
        (U8(x), U8(y)) => Ok(x < y),
        (U16(x), U16(y)) => Ok(x < y),
        (U32(x), U32(y)) => Ok(x < y),
        (U64(x), U64(y)) => Ok(x < y),
        (Usize(x), Usize(y)) => Ok(x < y),
        (F32(x), F32(y)) => Ok(x.nan_last_less(*y)),
        (F64(x), F64(y)) => Ok(x.nan_last_less(*y)),
        _ => Err(mismatch(a, b)),
    }
}

/// Checked form of [`component_eq`].
///
/// Same dispatch as [`try_component_less`], except that `Bool` is supported.
pub fn try_component_eq(a: &Component<'_>, b: &Component<'_>) -> Result<bool, KeyError> {
    use Component::*;

    match (a, b) {
        (Unsupported(name), _) => Err(KeyError::UnsupportedType(*name)),
        (Str(x), Str(y)) => Ok(**x == **y),
        (I8(x), I8(y)) => Ok(x == y),
        (I16(x), I16(y)) => Ok(x == y),
        (I32(x), I32(y)) => Ok(x == y),
        (I64(x), I64(y)) => Ok(x == y),
        (Isize(x), Isize(y)) => Ok(x == y),
        (U8(x), U8(y)) => Ok(x == y),
        (U16(x), U16(y)) => Ok(x == y),
        (U32(x), U32(y)) => Ok(x == y),
        (U64(x), U64(y)) => Ok(x == y),
        (Usize(x), Usize(y)) => Ok(x == y),
        (F32(x), F32(y)) => Ok(x.nan_last_eq(*y)),
        (F64(x), F64(y)) => Ok(x.nan_last_eq(*y)),
        (Bool(x), Bool(y)) => Ok(x == y),
        _ => Err(mismatch(a, b)),
    }
}

fn mismatch(a: &Component<'_>, b: &Component<'_>) -> KeyError {
    KeyError::MismatchedTypes {
        left: a.kind(),
        right: b.kind(),
    }
}
