//! Recording test doubles for the service's two collaborators.
//!
//! Both fakes append to one shared [`CallLog`], so tests can assert on the
//! interleaving of repository and cache calls.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::cache::{pattern_matches, CacheStore};
use crate::error::{Result, TodoError};
use crate::models::{NewTodo, Todo, TodoPatch};
use crate::repository::{InMemoryTodoRepository, TodoRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    RepoGet(i64),
    RepoGetAll(u32, u32),
    RepoCreate(String),
    RepoUpdate(i64),
    RepoRemove(i64),
    CacheGet(String),
    CacheSet { key: String, value: String, ttl: u64 },
    CacheDel(Vec<String>),
    CacheKeys(String),
}

impl Call {
    pub fn is_repo(&self) -> bool {
        matches!(
            self,
            Call::RepoGet(_)
                | Call::RepoGetAll(..)
                | Call::RepoCreate(_)
                | Call::RepoUpdate(_)
                | Call::RepoRemove(_)
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }

    pub fn repo_calls(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_repo).collect()
    }

    pub fn cache_calls(&self) -> Vec<Call> {
        self.calls().into_iter().filter(|c| !c.is_repo()).collect()
    }
}

// == Fake Repository ==
/// In-memory repository that records every call and can be told to fail.
pub struct FakeRepository {
    inner: InMemoryTodoRepository,
    log: CallLog,
    failing: AtomicBool,
}

impl FakeRepository {
    pub fn new(log: CallLog) -> Self {
        Self {
            inner: InMemoryTodoRepository::new(),
            log,
            failing: AtomicBool::new(false),
        }
    }

    /// Inserts a todo without recording a call.
    pub async fn insert(&self, title: &str) -> Todo {
        self.inner.create(NewTodo::new(title)).await.unwrap()
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TodoError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for FakeRepository {
    async fn get(&self, id: i64) -> Result<Option<Todo>> {
        self.log.push(Call::RepoGet(id));
        self.check()?;
        self.inner.get(id).await
    }

    async fn get_all(&self, page: u32, limit: u32) -> Result<Vec<Todo>> {
        self.log.push(Call::RepoGetAll(page, limit));
        self.check()?;
        self.inner.get_all(page, limit).await
    }

    async fn create(&self, data: NewTodo) -> Result<Todo> {
        self.log.push(Call::RepoCreate(data.title.clone()));
        self.check()?;
        self.inner.create(data).await
    }

    async fn update(&self, id: i64, data: TodoPatch) -> Result<Option<Todo>> {
        self.log.push(Call::RepoUpdate(id));
        self.check()?;
        self.inner.update(id, data).await
    }

    async fn remove(&self, id: i64) -> Result<bool> {
        self.log.push(Call::RepoRemove(id));
        self.check()?;
        self.inner.remove(id).await
    }
}

// == Fake Cache ==
/// Which cache operation should start failing.
#[derive(Debug, Clone, Copy)]
pub enum CacheOp {
    Get,
    Set,
    Del,
    Keys,
}

/// HashMap-backed cache store with no expiry that records every call.
#[derive(Default)]
pub struct RecordingCache {
    entries: Mutex<HashMap<String, String>>,
    log: CallLog,
    fail_get: AtomicBool,
    fail_set: AtomicBool,
    fail_del: AtomicBool,
    fail_keys: AtomicBool,
}

impl RecordingCache {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    /// Seeds an entry without recording a call.
    pub fn put(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn fail(&self, op: CacheOp) {
        let flag = match op {
            CacheOp::Get => &self.fail_get,
            CacheOp::Set => &self.fail_set,
            CacheOp::Del => &self.fail_del,
            CacheOp::Keys => &self.fail_keys,
        };
        flag.store(true, Ordering::SeqCst);
    }

    fn check(flag: &AtomicBool) -> Result<()> {
        if flag.load(Ordering::SeqCst) {
            return Err(TodoError::CacheStore("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheStore for RecordingCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.log.push(Call::CacheGet(key.to_string()));
        Self::check(&self.fail_get)?;
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        self.log.push(Call::CacheSet {
            key: key.to_string(),
            value: value.to_string(),
            ttl: ttl_secs,
        });
        Self::check(&self.fail_set)?;
        self.put(key, value);
        Ok(())
    }

    async fn del(&self, keys: &[String]) -> Result<usize> {
        self.log.push(Call::CacheDel(keys.to_vec()));
        Self::check(&self.fail_del)?;
        let mut entries = self.entries.lock().unwrap();
        Ok(keys.iter().filter(|k| entries.remove(*k).is_some()).count())
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        self.log.push(Call::CacheKeys(pattern.to_string()));
        Self::check(&self.fail_keys)?;
        let mut keys: Vec<String> = self
            .entries
            .lock()
            .unwrap()
            .keys()
            .filter(|k| pattern_matches(pattern, k))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }
}
