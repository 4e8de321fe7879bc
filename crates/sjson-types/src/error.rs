use thiserror::Error;

use crate::kind::ValueKind;

/// Errors produced by type operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// The text does not satisfy the pattern of the requested kind.
    #[error("value {value:?} is not a valid {kind}")]
    InvalidValue { kind: ValueKind, value: String },

    /// A legacy numeric kind code outside `1..=5`.
    #[error("unsupported value kind code: {0}")]
    UnsupportedKindCode(i32),

    /// A kind name that does not parse.
    #[error("unknown value kind: {0}")]
    UnknownKind(String),
}
