//! Document store abstraction
//!
//! Recipes live in a schemaless document store addressed by collection name.
//! The application only ever needs two operations: append a document and
//! list every document of a collection in insertion order.
//!
//! Two backends ship with the crate:
//! - [`SqliteDocumentStore`]: JSON bodies in a single SQLite table (default)
//! - [`InMemoryDocumentStore`]: process-local, with failure injection

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

mod memory;
mod sqlite;

pub use memory::InMemoryDocumentStore;
pub use sqlite::SqliteDocumentStore;

/// Opaque identifier assigned by the store when a document is created
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Mint a fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DocumentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DocumentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A document as returned by [`DocumentStore::list_documents`]
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub body: Value,
}

/// Document store failures
///
/// Every variant is recoverable from the application's point of view: the
/// triggering screen reports it and the user may try again.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend (SQLite) operation failed
    #[error("Store backend error: {0}")]
    Backend(#[from] sqlx::Error),

    /// Document body could not be encoded or decoded
    #[error("Malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Store refused or could not serve the request
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Minimal document store contract used by the recipe screens
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append `body` to `collection`, returning the id assigned to it
    async fn add_document(&self, collection: &str, body: Value) -> Result<DocumentId, StoreError>;

    /// List every document of `collection` in insertion order
    async fn list_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError>;
}
