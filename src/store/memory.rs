//! In-process ledger store for tests and ephemeral runs.

use super::{LedgerStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Ledger store backed by a map held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document under `key`.
    pub fn with_document(mut self, key: &str, json: &str) -> Self {
        self.docs
            .get_mut()
            .insert(key.to_string(), json.to_string());
        self
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.docs.read().await.get(key).cloned())
    }

    async fn replace(&self, key: &str, json: &str) -> Result<(), StoreError> {
        self.docs
            .write()
            .await
            .insert(key.to_string(), json.to_string());
        Ok(())
    }
}
