//! # Keysort
//!
//! `keysort` sorts slices by a key function instead of a comparator. You say
//! *what* to sort by, the crate builds the comparison and hands it to the
//! standard library's sorts.
//!
//! ## Key Features
//!
//! - **Single keys**: [`string`], [`int`], [`uint`] and [`float`] sort by one
//!   scalar extracted from each element.
//! - **Composite keys**: [`tuple`] sorts by several columns of possibly
//!   different types, compared lexicographically. Each column holds a
//!   [`Component`].
//! - **Stable and unstable**: every key kind has `sort`, `sort_stable` and
//!   `is_sorted`.
//! - **Index-based sorting**: [`argsort`] computes the sorting permutation of
//!   any [`KeyAccessor`] (including a plain closure over positions, see
//!   [`by_position`]), and [`apply_permutation`] moves a slice into that order.
//!
//! ## Usage
//!
//! ### Single Key
//!
//! ```rust
//! use keysort::string;
//!
//! struct Fruit {
//!     name: String,
//!     grams: u32,
//! }
//!
//! let mut basket = vec![
//!     Fruit { name: "pear".into(), grams: 180 },
//!     Fruit { name: "apple".into(), grams: 150 },
//! ];
//!
//! string::sort(&mut basket, |f| f.name.as_str());
//! assert_eq!(basket[0].name, "apple");
//! ```
//!
//! ### Composite Key
//!
//! ```rust
//! use keysort::tuple;
//!
//! let mut rows: Vec<(&str, u32)> = vec![("b", 2), ("b", 1), ("a", 9)];
//!
//! // By name, then by number.
//! tuple::sort(&mut rows, |r| vec![r.0.into(), r.1.into()]);
//! assert_eq!(rows, [("a", 9), ("b", 1), ("b", 2)]);
//! ```
//!
//! ## Faults
//!
//! Composite keys are checked while they are compared. Tuples of different
//! lengths, columns that mix component kinds, ordering booleans, and values of
//! unsupported types are programming errors: the sort panics with a
//! [`KeyError`] message. Use [`tuple::try_less`] to check keys without
//! panicking.
//!
//! ## Performance Characteristics
//!
//! - The key function runs on every comparison, so O(N log N) times for a sort
//!   and N - 1 times for `is_sorted`. Keep it cheap.
//! - Composite keys allocate a `Vec` per call.
//! - [`argsort`] allocates one `Vec<usize>` of N indices.

pub mod algo;
pub mod core;
pub mod error;
pub mod float;
pub mod int;
pub mod string;
pub mod tuple;
pub mod uint;

pub use crate::algo::{apply_permutation, argsort, argsort_stable, is_sorted};
pub use crate::core::{Component, KeyAccessor, Positions, SortKey, Tuple, by_position};
pub use crate::error::KeyError;

pub mod prelude {
    pub use crate::algo::{apply_permutation, argsort, argsort_stable};
    pub use crate::core::{Component, KeyAccessor, SortKey, Tuple, by_position};
    pub use crate::error::KeyError;
    pub use crate::{float, int, string, tuple, uint};
}
