//! In-Memory Store Module
//!
//! HashMap storage with per-entry TTL expiration. There is no capacity
//! bound and no eviction other than expiry.

use std::collections::HashMap;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{pattern_matches, CacheEntry, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::{Result, TodoError};

// == In-Memory Store ==
/// Key-value storage with Redis-like `GET`/`SET EX`/`DEL`/`KEYS` semantics.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, CacheEntry>,
}

impl InMemoryStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a value under `key`, replacing any previous value and resetting its TTL.
    pub fn set(&mut self, key: String, value: String, ttl_seconds: u64) -> Result<()> {
        if key.len() > MAX_KEY_LENGTH {
            return Err(TodoError::CacheStore(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if value.len() > MAX_VALUE_SIZE {
            return Err(TodoError::CacheStore(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        self.entries.insert(key, CacheEntry::new(value, ttl_seconds));
        Ok(())
    }

    // == Get ==
    /// Returns the live value for `key`. An expired entry is dropped on access.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    // == Delete ==
    /// Removes every listed key and returns how many live entries were removed.
    pub fn delete<S: AsRef<str>>(&mut self, keys: &[S]) -> usize {
        let now = current_timestamp_ms();
        keys.iter()
            .filter_map(|key| self.entries.remove(key.as_ref()))
            .filter(|entry| !entry.is_expired_at(now))
            .count()
    }

    // == Keys ==
    /// Returns the live keys matching a glob pattern, in no particular order.
    pub fn keys(&self, pattern: &str) -> Vec<String> {
        let now = current_timestamp_ms();
        self.entries
            .iter()
            .filter(|(_, entry)| !entry.is_expired_at(now))
            .filter(|(key, _)| pattern_matches(pattern, key))
            .map(|(key, _)| key.clone())
            .collect()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries and returns how many were removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }

    /// Remaining TTL in seconds for a live key.
    pub fn ttl(&self, key: &str) -> Option<u64> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(CacheEntry::ttl_remaining)
    }

    // == Length ==
    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
