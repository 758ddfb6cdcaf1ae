//! Service Module
//!
//! The cache-aware todo service sitting between the HTTP handlers and the
//! repository.

mod todo_service;

#[cfg(test)]
mod fakes;

pub use todo_service::{CacheTtls, TodoService};
