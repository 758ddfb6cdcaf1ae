//! Todo Cache - todo CRUD service with a read-through cache
//!
//! Reads populate the cache from the repository; writes go to the
//! repository first and then invalidate the affected cache entries.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, TodoError};
pub use service::TodoService;
pub use tasks::spawn_cleanup_task;
