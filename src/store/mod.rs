//! Whole-blob ledger persistence.
//!
//! The ledger is stored as one JSON document per key. Stores only load and
//! replace whole documents; there are no partial updates and no validation,
//! and concurrent writers simply overwrite each other.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod memory;

pub use memory::MemoryStore;

/// Storage backend for ledger blobs.
#[async_trait]
pub trait LedgerStore: Send + Sync + fmt::Debug {
    /// Load the document stored under `key`, if any.
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the document stored under `key`.
    async fn replace(&self, key: &str, json: &str) -> Result<(), StoreError>;
}

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}
