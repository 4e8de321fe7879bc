//! In-memory document registry.
//!
//! [`InMemoryDocumentStore`] keeps every document in a `HashMap` behind a
//! single `RwLock`. Each mutation holds the write lock for its whole
//! duration, so operations on the same handle are serialized. Data is lost
//! when the store is dropped.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use sjson_types::{DocumentHandle, ValueKind};
use tracing::debug;

use crate::config::StoreConfig;
use crate::document::Document;
use crate::error::{DocError, DocResult};
use crate::render::render_document;
use crate::traits::DocumentStore;

/// An in-memory implementation of [`DocumentStore`].
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<DocumentHandle, Document>>,
    config: StoreConfig,
}

impl InMemoryDocumentStore {
    /// Create an empty registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty registry with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// A copy of the document under `handle`.
    pub fn document(&self, handle: DocumentHandle) -> Option<Document> {
        self.documents.read().get(&handle).cloned()
    }

    /// Remove every document.
    pub fn clear(&self) {
        let mut docs = self.documents.write();
        debug!(count = docs.len(), "clearing registry");
        docs.clear();
    }

    /// Run `f` against the document under `handle` while holding the write
    /// lock.
    fn with_document<T>(
        &self,
        handle: DocumentHandle,
        f: impl FnOnce(&mut Document) -> DocResult<T>,
    ) -> DocResult<T> {
        let mut docs = self.documents.write();
        let doc = docs
            .get_mut(&handle)
            .ok_or(DocError::HandleNotFound(handle))?;
        f(doc)
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn create(&self, handle: DocumentHandle) -> DocResult<()> {
        let mut docs = self.documents.write();
        if docs.contains_key(&handle) {
            return Err(DocError::AlreadyExists(handle));
        }
        docs.insert(handle, Document::new(handle));
        debug!(%handle, "document created");
        Ok(())
    }

    fn delete_document(&self, handle: DocumentHandle) -> DocResult<()> {
        let removed = self.documents.write().remove(&handle);
        match removed {
            Some(_) => {
                debug!(%handle, "document deleted");
                Ok(())
            }
            None => Err(DocError::HandleNotFound(handle)),
        }
    }

    fn contains(&self, handle: DocumentHandle) -> bool {
        self.documents.read().contains_key(&handle)
    }

    fn handles(&self) -> Vec<DocumentHandle> {
        let mut handles: Vec<DocumentHandle> = self.documents.read().keys().copied().collect();
        handles.sort();
        handles
    }

    fn add_field(
        &self,
        handle: DocumentHandle,
        key: &str,
        value: &str,
        kind: ValueKind,
    ) -> DocResult<()> {
        self.with_document(handle, |doc| doc.add_field(key, value, kind))?;
        debug!(%handle, key, %kind, "field added");
        Ok(())
    }

    fn modify_field(
        &self,
        handle: DocumentHandle,
        key: &str,
        value: &str,
        kind: ValueKind,
    ) -> DocResult<()> {
        self.with_document(handle, |doc| doc.modify_field(key, value, kind))?;
        debug!(%handle, key, %kind, "field modified");
        Ok(())
    }

    fn delete_field(&self, handle: DocumentHandle, key: &str) -> DocResult<()> {
        self.with_document(handle, |doc| doc.delete_field(key))?;
        debug!(%handle, key, "field deleted");
        Ok(())
    }

    fn field(&self, handle: DocumentHandle, key: &str) -> DocResult<String> {
        let docs = self.documents.read();
        let doc = docs.get(&handle).ok_or(DocError::HandleNotFound(handle))?;
        doc.field(key)
            .map(str::to_string)
            .ok_or_else(|| DocError::KeyNotFound {
                handle,
                key: key.to_string(),
            })
    }

    fn replace_scalar_fields(
        &self,
        handle: DocumentHandle,
        fields: BTreeMap<String, String>,
    ) -> DocResult<()> {
        let count = fields.len();
        self.with_document(handle, |doc| {
            doc.replace_fields(fields);
            Ok(())
        })?;
        debug!(%handle, count, "scalar fields replaced");
        Ok(())
    }

    fn add_array(
        &self,
        handle: DocumentHandle,
        key: &str,
        elements: Vec<String>,
    ) -> DocResult<()> {
        let len = elements.len();
        self.with_document(handle, |doc| doc.add_array(key, elements))?;
        debug!(%handle, key, len, "array added");
        Ok(())
    }

    fn delete_array(&self, handle: DocumentHandle, key: &str) -> DocResult<()> {
        self.with_document(handle, |doc| doc.delete_array(key))?;
        debug!(%handle, key, "array deleted");
        Ok(())
    }

    fn array(&self, handle: DocumentHandle, key: &str) -> Option<Vec<String>> {
        let docs = self.documents.read();
        docs.get(&handle)?.array(key).map(<[String]>::to_vec)
    }

    fn render(&self, handle: DocumentHandle) -> Option<String> {
        let docs = self.documents.read();
        let doc = docs.get(&handle)?;
        Some(render_document(doc, &self.config.render))
    }

    fn len(&self) -> usize {
        self.documents.read().len()
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDocumentStore")
            .field("document_count", &self.len())
            .field("config", &self.config)
            .finish()
    }
}
