//! Foundation types for sjson.
//!
//! This crate provides the identity and classification types shared by every
//! other sjson crate, plus the pure validator that decides whether a piece of
//! text is acceptable for a requested [`ValueKind`].
//!
//! # Key Types
//!
//! - [`DocumentHandle`] - Caller-chosen integer identifying a live document
//! - [`ValueKind`] - The five recognized value categories
//! - [`validate()`] / [`is_valid`] - Accept or reject text for a kind
//! - [`classify`] - Detect the first kind a piece of text satisfies

pub mod error;
pub mod handle;
pub mod kind;
pub mod validate;

pub use error::TypeError;
pub use handle::DocumentHandle;
pub use kind::ValueKind;
pub use validate::{classify, is_valid, is_valid_for_code, validate};
