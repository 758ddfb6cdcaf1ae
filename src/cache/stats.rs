//! Cache Statistics Module
//!
//! Tracks hit/miss counters for both key families and the size of
//! invalidation sweeps.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Counters ==
/// Lock-free counters updated by the caching service on every request.
#[derive(Debug, Default)]
pub struct CacheCounters {
    item_hits: AtomicU64,
    item_misses: AtomicU64,
    list_hits: AtomicU64,
    list_misses: AtomicU64,
    swept_list_keys: AtomicU64,
}

impl CacheCounters {
    /// Creates a new set of counters, all at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_item_hit(&self) {
        self.item_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_item_miss(&self) {
        self.item_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_list_hit(&self) {
        self.list_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_list_miss(&self) {
        self.list_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Adds the number of list keys removed by one invalidation sweep.
    pub fn record_sweep(&self, removed: usize) {
        self.swept_list_keys.fetch_add(removed as u64, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Returns a point-in-time copy of the counters.
    pub fn snapshot(&self) -> CacheStats {
        CacheStats::new(
            self.item_hits.load(Ordering::Relaxed),
            self.item_misses.load(Ordering::Relaxed),
            self.list_hits.load(Ordering::Relaxed),
            self.list_misses.load(Ordering::Relaxed),
            self.swept_list_keys.load(Ordering::Relaxed),
        )
    }
}

// == Cache Stats ==
/// Serializable snapshot of [`CacheCounters`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub item_hits: u64,
    pub item_misses: u64,
    pub list_hits: u64,
    pub list_misses: u64,
    /// Total list keys deleted by invalidation sweeps
    pub swept_list_keys: u64,
    /// hits / (hits + misses) across both families
    pub hit_rate: f64,
}

impl CacheStats {
    pub fn new(
        item_hits: u64,
        item_misses: u64,
        list_hits: u64,
        list_misses: u64,
        swept_list_keys: u64,
    ) -> Self {
        let hits = item_hits + list_hits;
        let total = hits + item_misses + list_misses;
        let hit_rate = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };

        Self {
            item_hits,
            item_misses,
            list_hits,
            list_misses,
            swept_list_keys,
            hit_rate,
        }
    }
}
