//! Cache Module
//!
//! The cache store seam used by the todo service, the key scheme it
//! writes under, and the in-memory (and optionally Redis) backends.

mod entry;
mod keys;
mod memory;
mod pattern;
#[cfg(feature = "redis")]
mod redis_store;
mod stats;
mod store;
mod traits;


// Re-export public types
pub use entry::CacheEntry;
pub use keys::{item_key, list_key, ITEM_TTL_SECS, LIST_KEY_PATTERN, LIST_TTL_SECS};
pub use memory::MemoryCache;
pub use pattern::pattern_matches;
#[cfg(feature = "redis")]
pub use redis_store::RedisCacheStore;
pub use stats::{CacheCounters, CacheStats};
pub use store::InMemoryStore;
pub use traits::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
