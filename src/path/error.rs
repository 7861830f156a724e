//! Error types for document path resolution.

use std::fmt;

/// Errors that can occur while resolving a path against a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// An object step named a key the object does not contain.
    KeyNotFound { key: String, at: String },
    /// An array step indexed past the end of the array.
    IndexOutOfBounds {
        index: usize,
        len: usize,
        at: String,
    },
    /// A step tried to descend into a scalar value.
    NotAContainer { at: String },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::KeyNotFound { key, at } => {
                write!(f, "Key \"{}\" not found at {}", key, at)
            }
            PathError::IndexOutOfBounds { index, len, at } => write!(
                f,
                "Index {} out of bounds for array of length {} at {}",
                index, len, at
            ),
            PathError::NotAContainer { at } => {
                write!(f, "Value at {} is not a container", at)
            }
        }
    }
}

impl std::error::Error for PathError {}
