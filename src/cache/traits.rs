use async_trait::async_trait;

use crate::error::Result;

/// Key-value cache store with string keys and values.
///
/// Each call is expected to be atomic on its own; nothing here spans
/// multiple calls.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Gets the value stored under `key`, or `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, expiring after `ttl_secs` seconds.
    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()>;

    /// Deletes every listed key and returns how many existed.
    async fn del(&self, keys: &[String]) -> Result<usize>;

    /// Lists keys matching a glob pattern (`*` wildcard).
    async fn keys(&self, pattern: &str) -> Result<Vec<String>>;
}
