//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Formatting a record and capturing a state never fail; these variants only
/// surface at the serialized boundary of a snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A state could not be serialized.
    #[error("failed to encode state: {0}")]
    Encode(String),

    /// Bytes could not be decoded into the requested state shape.
    #[error("failed to decode state: {0}")]
    Decode(String),

    /// A snapshot was handed to a view other than the one that captured it.
    #[error("snapshot owner mismatch (expected: {expected}, actual: {actual})")]
    OwnerMismatch { expected: String, actual: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn owner_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::OwnerMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
