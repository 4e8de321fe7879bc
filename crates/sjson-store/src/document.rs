//! A single document: typed scalar fields plus untyped string arrays.
//!
//! The two namespaces are independent, so `tags` may exist both as a scalar
//! field and as an array field. Both are kept in key order, which is the order
//! the renderer emits them in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sjson_types::{validate, DocumentHandle, ValueKind};

use crate::error::{DocError, DocResult};

/// One document owned by a registry.
///
/// Every mutating method checks all of its preconditions before touching
/// state, so a failed call leaves the document unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    handle: DocumentHandle,
    scalars: BTreeMap<String, String>,
    arrays: BTreeMap<String, Vec<String>>,
}

impl Document {
    /// Create an empty document.
    pub fn new(handle: DocumentHandle) -> Self {
        Self {
            handle,
            scalars: BTreeMap::new(),
            arrays: BTreeMap::new(),
        }
    }

    pub fn handle(&self) -> DocumentHandle {
        self.handle
    }

    /// Insert a new scalar field after validating `value` against `kind`.
    pub fn add_field(&mut self, key: &str, value: &str, kind: ValueKind) -> DocResult<()> {
        if self.scalars.contains_key(key) {
            return Err(self.duplicate(key));
        }
        validate(value, kind)?;
        self.scalars.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Overwrite an existing scalar field.
    ///
    /// `kind` is checked fresh on every call; the kind used when the field was
    /// added plays no part.
    pub fn modify_field(&mut self, key: &str, value: &str, kind: ValueKind) -> DocResult<()> {
        let handle = self.handle;
        let slot = self
            .scalars
            .get_mut(key)
            .ok_or_else(|| DocError::KeyNotFound {
                handle,
                key: key.to_string(),
            })?;
        validate(value, kind)?;
        *slot = value.to_string();
        Ok(())
    }

    /// Remove a scalar field, returning its stored text.
    pub fn delete_field(&mut self, key: &str) -> DocResult<String> {
        self.scalars.remove(key).ok_or_else(|| self.missing(key))
    }

    /// Stored text of a scalar field.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.scalars.get(key).map(String::as_str)
    }

    /// Discard every scalar field and install `fields` unvalidated.
    ///
    /// Array fields are not affected.
    pub fn replace_fields<I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.scalars = fields.into_iter().collect();
    }

    /// Insert a new array field. Elements keep their order and may repeat.
    pub fn add_array(&mut self, key: &str, elements: Vec<String>) -> DocResult<()> {
        if self.arrays.contains_key(key) {
            return Err(self.duplicate(key));
        }
        self.arrays.insert(key.to_string(), elements);
        Ok(())
    }

    /// Remove an array field, returning its elements.
    pub fn delete_array(&mut self, key: &str) -> DocResult<Vec<String>> {
        self.arrays.remove(key).ok_or_else(|| self.missing(key))
    }

    pub fn array(&self, key: &str) -> Option<&[String]> {
        self.arrays.get(key).map(Vec::as_slice)
    }

    /// Scalar fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.scalars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Array fields in key order.
    pub fn arrays(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.arrays.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn field_count(&self) -> usize {
        self.scalars.len()
    }

    pub fn array_count(&self) -> usize {
        self.arrays.len()
    }

    /// Returns `true` if the document has no fields of either kind.
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty() && self.arrays.is_empty()
    }

    fn duplicate(&self, key: &str) -> DocError {
        DocError::DuplicateKey {
            handle: self.handle,
            key: key.to_string(),
        }
    }

    fn missing(&self, key: &str) -> DocError {
        DocError::KeyNotFound {
            handle: self.handle,
            key: key.to_string(),
        }
    }
}
