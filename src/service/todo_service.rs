//! Caching todo service.
//!
//! Read-through on `get`/`get_all`, invalidate-on-write for
//! `create`/`update`/`remove`:
//! - item entries live under `todo:<id>` for the item TTL
//! - list entries live under `todos:all:<page>:<limit>` for the list TTL
//! - every write sweeps all list entries, update/remove also drop the item entry
//!
//! The repository write always completes before invalidation starts. A
//! reader racing a write can still repopulate stale data; that window is
//! bounded by the TTLs.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, trace, warn};

use crate::cache::{
    item_key, list_key, CacheCounters, CacheStats, CacheStore, ITEM_TTL_SECS, LIST_KEY_PATTERN,
    LIST_TTL_SECS,
};
use crate::error::{Result, TodoError};
use crate::models::{NewTodo, Todo, TodoPatch};
use crate::repository::TodoRepository;

/// Expiry applied to each key family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtls {
    /// Seconds a `todo:<id>` entry lives
    pub item: u64,
    /// Seconds a `todos:all:<page>:<limit>` entry lives
    pub list: u64,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            item: ITEM_TTL_SECS,
            list: LIST_TTL_SECS,
        }
    }
}

/// Which counter a probe result lands in.
#[derive(Debug, Clone, Copy)]
enum KeyFamily {
    Item,
    List,
}

// == Todo Service ==
/// Repository contract with a cache interposed.
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
    cache: Arc<dyn CacheStore>,
    ttls: CacheTtls,
    counters: CacheCounters,
}

impl TodoService {
    /// Creates a service with the default 300s item / 60s list TTLs.
    pub fn new(repository: Arc<dyn TodoRepository>, cache: Arc<dyn CacheStore>) -> Self {
        Self::with_ttls(repository, cache, CacheTtls::default())
    }

    pub fn with_ttls(
        repository: Arc<dyn TodoRepository>,
        cache: Arc<dyn CacheStore>,
        ttls: CacheTtls,
    ) -> Self {
        Self {
            repository,
            cache,
            ttls,
            counters: CacheCounters::new(),
        }
    }

    /// Snapshot of hit/miss counters since startup.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot()
    }

    // == Reads ==
    /// Returns the todo for `id`, serving from cache when possible.
    ///
    /// A cache hit never reaches the repository. A miss fetches from the
    /// repository and stores the result unless the todo does not exist.
    pub async fn get(&self, id: i64) -> Result<Option<Todo>> {
        let key = item_key(id);

        if let Some(todo) = self.probe::<Todo>(&key, KeyFamily::Item).await {
            return Ok(Some(todo));
        }

        let todo = self.repository.get(id).await?;
        if let Some(todo) = &todo {
            self.populate(&key, todo, self.ttls.item).await;
        }

        Ok(todo)
    }

    /// Returns one page of todos, serving from cache when possible.
    ///
    /// `page` and `limit` are used as given; validation happens upstream.
    pub async fn get_all(&self, page: u32, limit: u32) -> Result<Vec<Todo>> {
        let key = list_key(page, limit);

        if let Some(todos) = self.probe::<Vec<Todo>>(&key, KeyFamily::List).await {
            return Ok(todos);
        }

        let todos = self.repository.get_all(page, limit).await?;
        self.populate(&key, &todos, self.ttls.list).await;

        Ok(todos)
    }

    // == Writes ==
    /// Creates a todo and invalidates every cached page.
    ///
    /// The new todo's item entry is filled lazily on its first `get`.
    pub async fn create(&self, data: NewTodo) -> Result<Todo> {
        let todo = self.repository.create(data).await?;
        self.sweep_lists().await?;

        debug!(todo_id = todo.id, "Todo created");
        Ok(todo)
    }

    /// Updates a todo, then drops its item entry and every cached page.
    ///
    /// Invalidation runs even when the repository reports no such todo.
    pub async fn update(&self, id: i64, data: TodoPatch) -> Result<Option<Todo>> {
        let todo = self.repository.update(id, data).await?;
        self.invalidate_todo(id).await?;

        debug!(todo_id = id, found = todo.is_some(), "Todo updated");
        Ok(todo)
    }

    /// Removes a todo, then drops its item entry and every cached page.
    ///
    /// Invalidation runs even when the repository reports no such todo.
    pub async fn remove(&self, id: i64) -> Result<bool> {
        let removed = self.repository.remove(id).await?;
        self.invalidate_todo(id).await?;

        debug!(todo_id = id, removed, "Todo removed");
        Ok(removed)
    }

    // == Cache Helpers ==
    /// Looks up `key`, treating unreachable stores and undecodable values as misses.
    async fn probe<T: DeserializeOwned>(&self, key: &str, family: KeyFamily) -> Option<T> {
        let cached = match self.cache.get(key).await {
            Ok(cached) => cached,
            Err(err) => {
                warn!(key, error = %err, "Cache probe failed, falling back to repository");
                None
            }
        };

        let value = cached.and_then(|raw| match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "Cached value could not be decoded");
                None
            }
        });

        match (family, value.is_some()) {
            (KeyFamily::Item, true) => self.counters.record_item_hit(),
            (KeyFamily::Item, false) => self.counters.record_item_miss(),
            (KeyFamily::List, true) => self.counters.record_list_hit(),
            (KeyFamily::List, false) => self.counters.record_list_miss(),
        }
        trace!(key, hit = value.is_some(), "Cache probe");

        value
    }

    /// Stores a fresh repository result. Failures are logged, never returned:
    /// the caller already holds the authoritative value.
    async fn populate<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl_secs: u64) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(key, error = %err, "Failed to encode value for cache");
                return;
            }
        };

        if let Err(err) = self.cache.set(key, &encoded, ttl_secs).await {
            warn!(key, ttl_secs, error = %err, "Failed to populate cache");
        }
    }

    /// Drops the item entry for `id` and sweeps all list entries.
    ///
    /// Both steps are attempted; the first failure is returned.
    async fn invalidate_todo(&self, id: i64) -> Result<()> {
        let key = item_key(id);
        let item = self.cache.del(std::slice::from_ref(&key)).await;
        if let Err(err) = &item {
            error!(key = %key, error = %err, "Failed to invalidate cached todo");
        }

        let lists = self.sweep_lists().await;
        item.map(|_| ()).and(lists)
    }

    /// Deletes every list entry in one batch. Skips the delete when none exist.
    async fn sweep_lists(&self) -> Result<()> {
        let swept = async {
            let keys = self.cache.keys(LIST_KEY_PATTERN).await?;
            if keys.is_empty() {
                return Ok::<usize, TodoError>(0);
            }
            self.cache.del(&keys).await
        }
        .await;

        match swept {
            Ok(removed) => {
                self.counters.record_sweep(removed);
                trace!(removed, "List cache swept");
                Ok(())
            }
            Err(err) => {
                error!(pattern = LIST_KEY_PATTERN, error = %err, "Failed to sweep list cache");
                Err(err)
            }
        }
    }
}
