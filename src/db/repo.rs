//! SQLite-backed ledger store.

use crate::store::{LedgerStore, StoreError};
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use tracing::debug;

/// Repository for ledger documents in the `kv_store` table.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Fetch the document stored under `key`.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_document(&self, key: &str) -> Result<Option<String>, sqlx::Error> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get::<String, _>("value")))
    }

    /// Insert or overwrite the document stored under `key`.
    ///
    /// # Errors
    /// Returns an error if the upsert fails.
    pub async fn put_document(&self, key: &str, value: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(chrono::Utc::now().timestamp_millis())
        .execute(&self.pool)
        .await?;

        debug!(key, bytes = value.len(), "Stored ledger document");
        Ok(())
    }
}

#[async_trait]
impl LedgerStore for Repository {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get_document(key).await?)
    }

    async fn replace(&self, key: &str, json: &str) -> Result<(), StoreError> {
        Ok(self.put_document(key, json).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use tempfile::TempDir;

    async fn setup_repo() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string();
        let pool = init_db(&db_path).await.expect("init_db failed");
        (Repository::new(pool), temp_dir)
    }

    #[tokio::test]
    async fn test_get_missing_document() {
        let (repo, _temp) = setup_repo().await;
        assert_eq!(repo.get_document("data").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_then_overwrite() {
        let (repo, _temp) = setup_repo().await;

        repo.put_document("data", r#"{"2024-03-10":{}}"#).await.unwrap();
        repo.put_document("data", r#"{"2024-03-11":{}}"#).await.unwrap();

        assert_eq!(
            repo.get_document("data").await.unwrap().as_deref(),
            Some(r#"{"2024-03-11":{}}"#)
        );

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM kv_store")
            .fetch_one(&repo.pool)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let (repo, _temp) = setup_repo().await;

        repo.replace("data", "{}").await.unwrap();
        repo.replace("backup", "[]").await.unwrap();

        assert_eq!(repo.load("data").await.unwrap().as_deref(), Some("{}"));
        assert_eq!(repo.load("backup").await.unwrap().as_deref(), Some("[]"));
    }
}
