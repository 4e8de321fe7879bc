//! Error types for document operations.

use sjson_types::{DocumentHandle, TypeError};
use thiserror::Error;

/// Errors that can occur during document operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocError {
    /// No live document has this handle.
    #[error("document not found: {0}")]
    HandleNotFound(DocumentHandle),

    /// A document with this handle already exists.
    #[error("document already exists: {0}")]
    AlreadyExists(DocumentHandle),

    /// The field is absent from the namespace the operation targets.
    #[error("key not found in {handle}: {key}")]
    KeyNotFound { handle: DocumentHandle, key: String },

    /// The field is already present in the namespace the operation targets.
    #[error("duplicate key in {handle}: {key}")]
    DuplicateKey { handle: DocumentHandle, key: String },

    /// The supplied text does not satisfy the requested kind.
    #[error("invalid value: {0}")]
    InvalidValue(#[from] TypeError),
}

impl DocError {
    /// Returns `true` for either flavor of "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HandleNotFound(_) | Self::KeyNotFound { .. })
    }
}

/// Convenience type alias for document operations.
pub type DocResult<T> = std::result::Result<T, DocError>;
