//! Integer status codes for callers that predate [`DocError`].
//!
//! Codes are numbered per operation, not globally. `0` is always success:
//!
//! | Operation | 1 | 2 | 3 |
//! |---|---|---|---|
//! | create | handle exists | | |
//! | add_field | duplicate key | handle missing | invalid value |
//! | modify_field | key missing | handle missing | invalid value |
//! | delete_field | key missing | handle missing | |
//! | delete_document | handle missing | | |
//! | replace_scalar_fields | handle missing | | |
//! | add_array | duplicate key | handle missing | |
//! | delete_array | key missing | handle missing | |
//!
//! Reads return plain text, empty when anything is missing.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use sjson_types::{DocumentHandle, TypeError, ValueKind};

use crate::error::{DocError, DocResult};
use crate::traits::DocumentStore;

/// Status code for a successful operation.
pub const OK: i32 = 0;

/// Returned when an error has no code in the operation's table.
pub const UNMAPPED: i32 = -1;

/// The status-returning operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    AddField,
    ModifyField,
    DeleteField,
    DeleteDocument,
    ReplaceScalarFields,
    AddArray,
    DeleteArray,
}

impl Operation {
    /// Map an operation result to its status code.
    pub fn status_code(self, result: &DocResult<()>) -> i32 {
        let err = match result {
            Ok(()) => return OK,
            Err(err) => err,
        };
        match (self, err) {
            (Self::Create, DocError::AlreadyExists(_)) => 1,

            (Self::AddField | Self::AddArray, DocError::DuplicateKey { .. }) => 1,
            (
                Self::ModifyField | Self::DeleteField | Self::DeleteArray,
                DocError::KeyNotFound { .. },
            ) => 1,
            (
                Self::AddField
                | Self::ModifyField
                | Self::DeleteField
                | Self::AddArray
                | Self::DeleteArray,
                DocError::HandleNotFound(_),
            ) => 2,
            (Self::AddField | Self::ModifyField, DocError::InvalidValue(_)) => 3,

            (Self::DeleteDocument | Self::ReplaceScalarFields, DocError::HandleNotFound(_)) => 1,

            _ => UNMAPPED,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Create => "create",
            Self::AddField => "add_field",
            Self::ModifyField => "modify_field",
            Self::DeleteField => "delete_field",
            Self::DeleteDocument => "delete_document",
            Self::ReplaceScalarFields => "replace_scalar_fields",
            Self::AddArray => "add_array",
            Self::DeleteArray => "delete_array",
        };
        f.write_str(name)
    }
}

/// Status-code facade over any [`DocumentStore`].
///
/// Handles are raw integers and kinds are legacy codes (`1..=5`). An
/// unsupported kind code behaves like a value that fails validation.
#[derive(Debug, Default)]
pub struct StatusApi<S> {
    store: S,
}

impl<S: DocumentStore> StatusApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn create(&self, handle: i32) -> i32 {
        let result = self.store.create(handle.into());
        Operation::Create.status_code(&result)
    }

    pub fn add_field(&self, handle: i32, key: &str, value: &str, kind: i32) -> i32 {
        let handle = DocumentHandle::from(handle);
        let result = match ValueKind::from_code(kind) {
            Ok(kind) => self.store.add_field(handle, key, value, kind),
            Err(unsupported) => self.reject_add(handle, key, unsupported),
        };
        Operation::AddField.status_code(&result)
    }

    pub fn modify_field(&self, handle: i32, key: &str, value: &str, kind: i32) -> i32 {
        let handle = DocumentHandle::from(handle);
        let result = match ValueKind::from_code(kind) {
            Ok(kind) => self.store.modify_field(handle, key, value, kind),
            Err(unsupported) => self.reject_modify(handle, key, unsupported),
        };
        Operation::ModifyField.status_code(&result)
    }

    pub fn delete_field(&self, handle: i32, key: &str) -> i32 {
        let result = self.store.delete_field(handle.into(), key);
        Operation::DeleteField.status_code(&result)
    }

    pub fn delete_document(&self, handle: i32) -> i32 {
        let result = self.store.delete_document(handle.into());
        Operation::DeleteDocument.status_code(&result)
    }

    /// Stored text, or `""` if the handle or key is missing.
    pub fn get_field_value(&self, handle: i32, key: &str) -> String {
        self.store
            .field_value(handle.into(), key)
            .unwrap_or_default()
    }

    pub fn replace_scalar_fields(&self, handle: i32, fields: BTreeMap<String, String>) -> i32 {
        let result = self.store.replace_scalar_fields(handle.into(), fields);
        Operation::ReplaceScalarFields.status_code(&result)
    }

    pub fn add_array(&self, handle: i32, key: &str, elements: Vec<String>) -> i32 {
        let result = self.store.add_array(handle.into(), key, elements);
        Operation::AddArray.status_code(&result)
    }

    pub fn delete_array(&self, handle: i32, key: &str) -> i32 {
        let result = self.store.delete_array(handle.into(), key);
        Operation::DeleteArray.status_code(&result)
    }

    /// Rendered document, or `""` if the handle is missing.
    pub fn render(&self, handle: i32) -> String {
        self.store.render(handle.into()).unwrap_or_default()
    }

    // The handle and key checks still take precedence over the kind.
    fn reject_add(&self, handle: DocumentHandle, key: &str, err: TypeError) -> DocResult<()> {
        match self.store.field(handle, key) {
            Err(DocError::HandleNotFound(h)) => Err(DocError::HandleNotFound(h)),
            Ok(_) => Err(DocError::DuplicateKey {
                handle,
                key: key.to_string(),
            }),
            Err(_) => Err(DocError::InvalidValue(err)),
        }
    }

    fn reject_modify(&self, handle: DocumentHandle, key: &str, err: TypeError) -> DocResult<()> {
        match self.store.field(handle, key) {
            Ok(_) => Err(DocError::InvalidValue(err)),
            Err(missing) => Err(missing),
        }
    }
}
