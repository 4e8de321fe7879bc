//! The [`DocumentStore`] trait defining the registry interface.
//!
//! Every operation is keyed by a caller-chosen [`DocumentHandle`] and fails
//! with [`DocError::HandleNotFound`](crate::DocError::HandleNotFound) when no
//! live document has that handle. Failed operations never leave partial
//! changes behind.

use std::collections::BTreeMap;

use sjson_types::{DocumentHandle, ValueKind};

use crate::error::DocResult;

/// A registry of documents.
///
/// Implementations must be thread-safe (`Send + Sync`) and must serialize
/// mutations so that each operation observes and leaves a consistent
/// registry.
pub trait DocumentStore: Send + Sync {
    /// Register a new empty document under `handle`.
    ///
    /// Fails with `AlreadyExists` if the handle is live.
    fn create(&self, handle: DocumentHandle) -> DocResult<()>;

    /// Remove a document and all of its fields.
    fn delete_document(&self, handle: DocumentHandle) -> DocResult<()>;

    /// Returns `true` if `handle` names a live document.
    fn contains(&self, handle: DocumentHandle) -> bool;

    /// All live handles in ascending order.
    fn handles(&self) -> Vec<DocumentHandle>;

    /// Add a scalar field. Checks, in order: handle, duplicate key, value.
    fn add_field(
        &self,
        handle: DocumentHandle,
        key: &str,
        value: &str,
        kind: ValueKind,
    ) -> DocResult<()>;

    /// Overwrite a scalar field. Checks, in order: handle, key, value.
    fn modify_field(
        &self,
        handle: DocumentHandle,
        key: &str,
        value: &str,
        kind: ValueKind,
    ) -> DocResult<()>;

    /// Remove a scalar field.
    fn delete_field(&self, handle: DocumentHandle, key: &str) -> DocResult<()>;

    /// Stored text of a scalar field, with distinct errors for a missing
    /// handle and a missing key.
    fn field(&self, handle: DocumentHandle, key: &str) -> DocResult<String>;

    /// Replace every scalar field with `fields`. Values are not validated.
    fn replace_scalar_fields(
        &self,
        handle: DocumentHandle,
        fields: BTreeMap<String, String>,
    ) -> DocResult<()>;

    /// Add an array field. Checks, in order: handle, duplicate key.
    fn add_array(&self, handle: DocumentHandle, key: &str, elements: Vec<String>)
        -> DocResult<()>;

    /// Remove an array field.
    fn delete_array(&self, handle: DocumentHandle, key: &str) -> DocResult<()>;

    /// Elements of an array field, or `None` if the handle or key is missing.
    fn array(&self, handle: DocumentHandle, key: &str) -> Option<Vec<String>>;

    /// Render a document as text, or `None` if the handle is missing.
    fn render(&self, handle: DocumentHandle) -> Option<String>;

    /// Stored text of a scalar field, or `None` if the handle or key is
    /// missing.
    fn field_value(&self, handle: DocumentHandle, key: &str) -> Option<String> {
        self.field(handle, key).ok()
    }

    /// Number of live documents.
    fn len(&self) -> usize {
        self.handles().len()
    }

    /// Returns `true` if there are no live documents.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
