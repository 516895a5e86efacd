//! Faults raised while comparing key tuples.

use std::fmt;

/// A contract violation detected by the tuple comparator.
///
/// The sorting entry points panic with the `Display` text of this error. The
/// `try_*` functions in [`crate::tuple`] return it instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The two tuples being compared have different lengths.
    LengthMismatch { left: usize, right: usize },

    /// The two components at the same position are of different kinds.
    MismatchedTypes {
        left: &'static str,
        right: &'static str,
    },

    /// The component kind is outside the supported set.
    UnsupportedType(&'static str),

    /// The component kind supports equality but has no ordering.
    Unordered(&'static str),
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::LengthMismatch { left, right } => {
                write!(
                    f,
                    "key tuples have mismatched lengths: {} vs {}",
                    left, right
                )
            }
            KeyError::MismatchedTypes { left, right } => {
                write!(
                    f,
                    "mismatched key component types: {} vs {}",
                    left, right
                )
            }
            KeyError::UnsupportedType(name) => {
                write!(f, "unsupported type {} provided by key function", name)
            }
            KeyError::Unordered(name) => {
                write!(
                    f,
                    "unsupported type {} provided by key function: values can be compared for equality but not ordered",
                    name
                )
            }
        }
    }
}

impl std::error::Error for KeyError {}
