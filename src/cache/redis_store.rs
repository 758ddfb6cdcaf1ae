//! Redis cache backend.
//!
//! Maps the store operations one-to-one onto `GET`, `SET EX`, `DEL` and
//! `KEYS`. The connection manager reconnects on its own; a request made
//! while the server is unreachable fails with `TodoError::CacheStore`.

use async_trait::async_trait;
use redis::AsyncCommands;

use crate::cache::CacheStore;
use crate::error::{Result, TodoError};

fn map_redis_error(err: redis::RedisError) -> TodoError {
    TodoError::CacheStore(err.to_string())
}

/// Redis-backed [`CacheStore`] sharing one multiplexed connection.
#[derive(Clone)]
pub struct RedisCacheStore {
    conn: redis::aio::ConnectionManager,
}

impl RedisCacheStore {
    /// Connects to Redis at `url` (e.g. `redis://localhost:6379`).
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(map_redis_error)
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let mut conn = self.conn.clone();
        // SET EX rejects a zero expiry
        conn.set_ex::<_, _, ()>(key, value, ttl_secs.max(1))
            .await
            .map_err(map_redis_error)
    }

    async fn del(&self, keys: &[String]) -> Result<usize> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.conn.clone();
        conn.del(keys).await.map_err(map_redis_error)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        conn.keys(pattern).await.map_err(map_redis_error)
    }
}
