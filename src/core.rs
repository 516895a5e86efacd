//! Core traits and types for keysort.
//!
//! This module defines:
//! - [`Component`]: one scalar value inside a composite key.
//! - [`Tuple`]: a composite key, compared lexicographically.
//! - [`SortKey`]: the comparison every key type provides.
//! - [`KeyAccessor`]: position-addressed keys for the index-based sorts.

use std::any::{Any, type_name};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::tuple;

/// A composite key: one [`Component`] per sort column, most significant first.
pub type Tuple<'a> = Vec<Component<'a>>;

/// A single value inside a composite key.
///
/// Components of the same kind compare by their natural order. For floats
/// `-0.0 == 0.0`, and NaN equals NaN and sorts after every number. `Bool`
/// supports equality only.
///
/// Values of any other type can only enter through [`Component::of`], which
/// turns them into [`Component::Unsupported`]. Comparing such a component
/// panics with the type's name.
#[derive(Debug, Clone)]
pub enum Component<'a> {
    Str(Cow<'a, str>),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Bool(bool),
    Unsupported(&'static str),
}

impl<'a> Component<'a> {
    /// Builds a component from a value whose type is only known generically.
    ///
    /// Supported scalar types map to their variant. `String` and `&'static str`
    /// become [`Component::Str`]. Everything else becomes
    /// [`Component::Unsupported`] carrying the type name.
    ///
    /// ```
    /// use keysort::Component;
    ///
    /// assert!(matches!(Component::of(&7u16), Component::U16(7)));
    /// assert!(matches!(Component::of(&vec![1u8]), Component::Unsupported(_)));
    /// ```
    pub fn of<T: Any>(value: &'a T) -> Self {
        let any = value as &dyn Any;

        macro_rules! try_scalar {
            ($($ty:ty => $variant:ident),* $(,)?) => {
                $(
                    if let Some(v) = any.downcast_ref::<$ty>() {
                        return Component::$variant(*v);
                    }
                )*
            };
        }

        if let Some(s) = any.downcast_ref::<String>() {
            return Component::Str(Cow::Borrowed(s.as_str()));
        }
        if let Some(s) = any.downcast_ref::<&'static str>() {
            return Component::Str(Cow::Borrowed(*s));
        }

        try_scalar! {
            i8 => I8,
            i16 => I16,
            i32 => I32,
            i64 => I64,
            isize => Isize,
            u8 => U8,
            u16 => U16,
            u32 => U32,
            u64 => U64,
            usize => Usize,
            f32 => F32,
            f64 => F64,
            bool => Bool,
        }

        Component::Unsupported(type_name::<T>())
    }

    /// Name of this component's kind, as used in fault messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Str(_) => "str",
            Component::I8(_) => "i8",
            Component::I16(_) => "i16",
            Component::I32(_) => "i32",
            Component::I64(_) => "i64",
            Component::Isize(_) => "isize",
            Component::U8(_) => "u8",
            Component::U16(_) => "u16",
            Component::U32(_) => "u32",
            Component::U64(_) => "u64",
            Component::Usize(_) => "usize",
            Component::F32(_) => "f32",
            Component::F64(_) => "f64",
            Component::Bool(_) => "bool",
            Component::Unsupported(name) => *name,
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Component<'_> {
                fn from(value: $ty) -> Self {
                    Component::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    bool => Bool,
}

impl<'a> From<&'a str> for Component<'a> {
    fn from(value: &'a str) -> Self {
        Component::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Component<'a> {
    fn from(value: &'a String) -> Self {
        Component::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Component<'_> {
    fn from(value: String) -> Self {
        Component::Str(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Component<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Component::Str(value)
    }
}

/// A key that can say whether it orders strictly before another key.
///
/// This is the only thing the sorting entry points ask of a key. The ordering
/// must be consistent across calls for the result to be sorted.
pub trait SortKey {
    /// Returns `true` if `self` orders strictly before `other`.
    fn key_less(&self, other: &Self) -> bool;

    /// Three-way comparison, used by the sorts so each comparison reads both
    /// keys once.
    ///
    /// The default derives it from [`key_less`](SortKey::key_less).
    fn key_cmp(&self, other: &Self) -> Ordering {
        if self.key_less(other) {
            Ordering::Less
        } else if other.key_less(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

macro_rules! impl_sort_key_ord {
    ($($ty:ty),*) => {
        $(
            impl SortKey for $ty {
                #[inline]
                fn key_less(&self, other: &Self) -> bool {
                    self < other
                }

                #[inline]
                fn key_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_sort_key_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, String, &str, &[u8]
);

/// Natural IEEE order for numbers, with NaN after every number.
///
/// `-0.0` and `0.0` are equal, and all NaNs are equal to each other, which
/// keeps the order total without splitting keys that `==` calls equal.
pub(crate) trait NanLast: Copy + PartialOrd {
    fn is_nan(self) -> bool;

    #[inline]
    fn nan_last_less(self, other: Self) -> bool {
        self < other || (!self.is_nan() && other.is_nan())
    }

    #[inline]
    fn nan_last_eq(self, other: Self) -> bool {
        self == other || (self.is_nan() && other.is_nan())
    }

    #[inline]
    fn nan_last_cmp(self, other: Self) -> Ordering {
        if self.nan_last_less(other) {
            Ordering::Less
        } else if self.nan_last_eq(other) {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

impl NanLast for f32 {
    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl NanLast for f64 {
    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

impl SortKey for f32 {
    #[inline]
    fn key_less(&self, other: &Self) -> bool {
        self.nan_last_less(*other)
    }

    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.nan_last_cmp(*other)
    }
}

impl SortKey for f64 {
    #[inline]
    fn key_less(&self, other: &Self) -> bool {
        self.nan_last_less(*other)
    }

    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.nan_last_cmp(*other)
    }
}

// Panics on malformed tuples, see `tuple::less`.
impl SortKey for Tuple<'_> {
    #[inline]
    fn key_less(&self, other: &Self) -> bool {
        tuple::less(self, other)
    }

    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        tuple::cmp(self, other)
    }
}

/// A trait for reading the sort key at a position of a collection.
///
/// This is the position-addressed counterpart of the key closures taken by the
/// in-place sorts: [`crate::argsort`] asks for the key at `index` as often as it
/// needs, so `get_key` must be a pure function of the element at that index.
///
/// # Examples
///
/// ```
/// use keysort::{argsort, KeyAccessor};
///
/// struct Scores {
///     names: Vec<&'static str>,
///     points: Vec<u32>,
/// }
///
/// impl KeyAccessor for Scores {
///     type Key<'a> = u32;
///
///     fn get_key(&self, index: usize) -> u32 {
///         self.points[index]
///     }
///
///     fn len(&self) -> usize {
///         self.points.len()
///     }
/// }
///
/// let scores = Scores { names: vec!["ann", "bo", "cy"], points: vec![30, 10, 20] };
/// let order = argsort(&scores);
/// let ranked: Vec<_> = order.iter().map(|&i| scores.names[i]).collect();
/// assert_eq!(ranked, ["bo", "cy", "ann"]);
/// ```
pub trait KeyAccessor {
    /// The key type handed out for each position.
    type Key<'a>: SortKey
    where
        Self: 'a;

    /// Returns the key of the item at the given index.
    fn get_key(&self, index: usize) -> Self::Key<'_>;

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Strings sort by themselves.
impl<T: AsRef<str>> KeyAccessor for [T] {
    type Key<'a>
        = &'a str
    where
        Self: 'a;

    fn get_key(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<str>> KeyAccessor for Vec<T> {
    type Key<'a>
        = &'a str
    where
        Self: 'a;

    fn get_key(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<str>> KeyAccessor for VecDeque<T> {
    type Key<'a>
        = &'a str
    where
        Self: 'a;

    fn get_key(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// A [`KeyAccessor`] backed by a closure from position to key.
///
/// Built with [`by_position`].
#[derive(Clone, Copy, Debug)]
pub struct Positions<F> {
    len: usize,
    key: F,
}

/// Wraps a key function over positions `0..len` as a [`KeyAccessor`].
///
/// The closure usually borrows the collection it reads from:
///
/// ```
/// use keysort::{argsort, by_position};
///
/// let words = ["pear", "fig", "apple"];
/// let order = argsort(&by_position(words.len(), |i| words[i].len()));
/// assert_eq!(order, [1, 0, 2]);
/// ```
pub fn by_position<K, F>(len: usize, key: F) -> Positions<F>
where
    K: SortKey,
    F: Fn(usize) -> K,
{
    Positions { len, key }
}

impl<K, F> KeyAccessor for Positions<F>
where
    K: SortKey,
    F: Fn(usize) -> K,
{
    type Key<'a>
        = K
    where
        Self: 'a;

    fn get_key(&self, index: usize) -> K {
        (self.key)(index)
    }

    fn len(&self) -> usize {
        self.len
    }
}
