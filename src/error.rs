//! Error types for by-key type construction.

use std::fmt;

/// Errors that can occur when constructing a value through a
/// [`TypeRegistry`](crate::TypeRegistry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The identity key does not match any registered type.
    UnknownType {
        /// The identity key that was looked up.
        key: String,
    },
    /// The key names an abstract entry registered without a factory.
    NotConstructible {
        /// The identity key of the abstract entry.
        key: String,
    },
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType { key } => {
                write!(f, "no type registered under key '{key}'")
            }
            Self::NotConstructible { key } => {
                write!(f, "type '{key}' is registered without a factory")
            }
        }
    }
}

impl std::error::Error for SelectorError {}
