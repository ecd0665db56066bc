//! Error types for attribute map operations.
//!
//! Lookups fail in two ways: the key (or one token of a path key) is missing,
//! or a value along the path has a shape that cannot be indexed. Attribute
//! access reports misses with its own variant so callers can tell the two
//! access styles apart.

use thiserror::Error;

use super::Key;

/// Structured error types for [`AttrMap`](super::AttrMap) operations.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AttrMapError {
    /// A key, or the first unresolved token of a path key, was not found
    #[error("missing key: {key}")]
    MissingKey { key: Key },

    /// An entry was requested from an empty map
    #[error("missing key: map is empty")]
    Empty,

    /// A value along a path does not support the attempted operation
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A nested map on the path is mutably borrowed through another handle
    #[error("nested map is already borrowed")]
    Borrowed,

    /// Attribute-style lookup or deletion of a name that is not present
    #[error("no attribute '{name}'")]
    NoAttribute { name: String },
}

impl AttrMapError {
    pub(crate) fn missing(key: impl Into<Key>) -> Self {
        AttrMapError::MissingKey { key: key.into() }
    }

    pub(crate) fn type_mismatch(expected: &str, actual: &str) -> Self {
        AttrMapError::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    pub(crate) fn no_attribute(name: impl Into<String>) -> Self {
        AttrMapError::NoAttribute { name: name.into() }
    }

    /// Check if this error is a missing-key error
    pub fn is_missing_key(&self) -> bool {
        matches!(self, AttrMapError::MissingKey { .. } | AttrMapError::Empty)
    }

    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, AttrMapError::TypeMismatch { .. })
    }

    /// Check if this error came from attribute-style access
    pub fn is_attribute_error(&self) -> bool {
        matches!(self, AttrMapError::NoAttribute { .. })
    }

    /// Get the key that failed to resolve, if this is a missing-key error
    pub fn key(&self) -> Option<&Key> {
        match self {
            AttrMapError::MissingKey { key } => Some(key),
            _ => None,
        }
    }

    /// Get the attribute name, if this is an attribute error
    pub fn name(&self) -> Option<&str> {
        match self {
            AttrMapError::NoAttribute { name } => Some(name),
            _ => None,
        }
    }
}

// Conversion from AttrMapError to the main Error type
impl From<AttrMapError> for crate::Error {
    fn from(err: AttrMapError) -> Self {
        crate::Error::Map(err)
    }
}
