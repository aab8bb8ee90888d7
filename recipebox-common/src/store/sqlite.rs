//! SQLite-backed document store
//!
//! Documents are kept as serialized JSON in the `documents` table created by
//! [`crate::db::init_database`]. Insertion order is the table's rowid order.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::debug;

use super::{DocumentId, DocumentStore, StoreError, StoredDocument};

/// Document store over a SQLite connection pool
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn add_document(&self, collection: &str, body: Value) -> Result<DocumentId, StoreError> {
        let id = DocumentId::generate();
        let encoded = serde_json::to_string(&body)?;

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES (?, ?, ?)")
            .bind(id.as_str())
            .bind(collection)
            .bind(&encoded)
            .execute(&self.pool)
            .await?;

        debug!("Inserted document {} into '{}'", id, collection);
        Ok(id)
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT id, body FROM documents WHERE collection = ? ORDER BY rowid ASC",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, body)| -> Result<StoredDocument, StoreError> {
                Ok(StoredDocument {
                    id: DocumentId::from(id),
                    body: serde_json::from_str(&body)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use serde_json::json;
    use tempfile::TempDir;

    async fn setup_store() -> (TempDir, SqliteDocumentStore) {
        let dir = TempDir::new().unwrap();
        let pool = init_database(&dir.path().join("recipebox.db")).await.unwrap();
        (dir, SqliteDocumentStore::new(pool))
    }

    #[tokio::test]
    async fn test_documents_listed_in_insertion_order() {
        let (_dir, store) = setup_store().await;

        let first = store.add_document("recipes", json!({"name": "Soup"})).await.unwrap();
        let second = store.add_document("recipes", json!({"name": "Bread"})).await.unwrap();

        let docs = store.list_documents("recipes").await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, first);
        assert_eq!(docs[0].body["name"], "Soup");
        assert_eq!(docs[1].id, second);
        assert_eq!(docs[1].body["name"], "Bread");
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let (_dir, store) = setup_store().await;

        store.add_document("recipes", json!({"name": "Soup"})).await.unwrap();
        store.add_document("drafts", json!({"name": "Stew"})).await.unwrap();

        assert_eq!(store.list_documents("recipes").await.unwrap().len(), 1);
        assert_eq!(store.list_documents("drafts").await.unwrap().len(), 1);
        assert!(store.list_documents("empty").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_body_is_reported() {
        let (_dir, store) = setup_store().await;

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES ('x', 'recipes', '{not json')")
            .execute(store.pool())
            .await
            .unwrap();

        let result = store.list_documents("recipes").await;
        assert!(matches!(result, Err(StoreError::Malformed(_))));
    }
}
