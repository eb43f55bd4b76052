//! Typed errors for list operations.

use std::fmt;

/// Error returned by fallible list operations.
///
/// Each variant carries enough context to report the failure without
/// consulting the list again. A failed operation never mutates the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// An insertion was given a negative value. The list only stores
    /// non-negative integers.
    NegativeValue {
        /// The rejected value.
        value: i64,
    },
    /// An insertion position past the end of the list. Insertions accept
    /// positions `0..=len` (position `len` appends).
    InvalidIndex {
        /// The rejected position.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
    /// A read or removal position at or past the end of the list. Reads and
    /// removals accept positions `0..len`.
    IndexOutOfRange {
        /// The rejected position.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::NegativeValue { value } => {
                write!(f, "negative value ({value}) not allowed")
            }
            ListError::InvalidIndex { index, len } => {
                write!(f, "insertion index ({index}) past the end of a list of {len}")
            }
            ListError::IndexOutOfRange { index, len } => {
                write!(f, "index ({index}) out of range for a list of {len}")
            }
        }
    }
}

impl std::error::Error for ListError {}
