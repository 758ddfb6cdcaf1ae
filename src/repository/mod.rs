//! Repository Module
//!
//! Durable storage for todos behind the [`TodoRepository`] trait.

mod memory;
mod seed;
mod sqlite;
mod traits;

pub use memory::InMemoryTodoRepository;
pub use seed::seed_todos;
pub use sqlite::SqliteTodoRepository;
pub use traits::TodoRepository;
