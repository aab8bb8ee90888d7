//! Process-local document store
//!
//! Backs `--in-memory` runs and the test suites. Reads and writes can be
//! made to fail on demand to exercise the error paths of the screens.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{DocumentId, DocumentStore, StoreError, StoredDocument};

#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: Mutex<HashMap<String, Vec<StoredDocument>>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    write_calls: AtomicUsize,
    read_calls: AtomicUsize,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `add_document` fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `list_documents` fail (or succeed again)
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Number of `add_document` calls received, failed ones included
    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    /// Number of `list_documents` calls received, failed ones included
    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<StoredDocument>>>, StoreError> {
        self.collections
            .lock()
            .map_err(|_| StoreError::Unavailable("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn add_document(&self, collection: &str, body: Value) -> Result<DocumentId, StoreError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("write rejected".to_string()));
        }

        let id = DocumentId::generate();
        self.lock()?
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id: id.clone(), body });
        Ok(id)
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("read rejected".to_string()));
        }

        Ok(self.lock()?.get(collection).cloned().unwrap_or_default())
    }
}
