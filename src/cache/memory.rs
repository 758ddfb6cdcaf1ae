//! Shared in-memory cache backend.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheStore, InMemoryStore};
use crate::error::Result;

/// Process-wide handle to an [`InMemoryStore`].
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    store: Arc<RwLock<InMemoryStore>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Purges expired entries, returning how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    /// Remaining TTL in seconds for a live key.
    pub async fn ttl(&self, key: &str) -> Option<u64> {
        self.store.read().await.ttl(key)
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // Write lock: expired entries are dropped on access
        Ok(self.store.write().await.get(key))
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        self.store
            .write()
            .await
            .set(key.to_string(), value.to_string(), ttl_secs)
    }

    async fn del(&self, keys: &[String]) -> Result<usize> {
        Ok(self.store.write().await.delete(keys))
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        Ok(self.store.read().await.keys(pattern))
    }
}
