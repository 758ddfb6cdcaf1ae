//! Cache key scheme for todos.
//!
//! Two key families share the store:
//! - item keys `todo:<id>`, one per todo
//! - list keys `todos:all:<page>:<limit>`, one per pagination request

/// TTL in seconds for a cached single todo.
pub const ITEM_TTL_SECS: u64 = 300;

/// TTL in seconds for a cached page of todos.
pub const LIST_TTL_SECS: u64 = 60;

/// Glob matching every list key.
pub const LIST_KEY_PATTERN: &str = "todos:all:*";

/// Builds the item key for a todo id.
pub fn item_key(id: i64) -> String {
    format!("todo:{id}")
}

/// Builds the list key for a page/limit pair.
pub fn list_key(page: u32, limit: u32) -> String {
    format!("todos:all:{page}:{limit}")
}
