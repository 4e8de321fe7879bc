//! In-memory document registry for sjson.
//!
//! A registry maps caller-chosen [`DocumentHandle`]s to documents. Each
//! document holds two independent namespaces: scalar fields, whose text is
//! validated against a requested [`ValueKind`] on every typed write, and array
//! fields, which hold ordered, untyped string elements.
//!
//! # Modules
//!
//! - [`error`] - [`DocError`] and the [`DocResult`] alias
//! - [`document`] - The [`Document`] type and its field operations
//! - [`traits`] - The [`DocumentStore`] trait defining the registry interface
//! - [`memory`] - [`InMemoryDocumentStore`], a lock-protected registry
//! - [`render`] - Text rendering of documents
//! - [`status`] - [`StatusApi`], the integer status-code facade
//! - [`config`] - [`StoreConfig`] loaded from TOML

pub mod config;
pub mod document;
pub mod error;
pub mod memory;
pub mod render;
pub mod status;
pub mod traits;

pub use config::{ConfigError, StoreConfig};
pub use document::Document;
pub use error::{DocError, DocResult};
pub use memory::InMemoryDocumentStore;
pub use render::{render_document, RenderOptions, MAX_INDENT};
pub use sjson_types::{DocumentHandle, ValueKind};
pub use status::{Operation, StatusApi};
pub use traits::DocumentStore;
