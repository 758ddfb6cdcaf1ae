use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewTodo, Todo, TodoPatch};

/// Persistence operations for todos, keyed by integer id.
///
/// A missing todo is `Ok(None)` / `Ok(false)`, never an error.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Gets a todo by id.
    async fn get(&self, id: i64) -> Result<Option<Todo>>;

    /// Gets one page of todos ordered by id, skipping `page * limit` rows.
    async fn get_all(&self, page: u32, limit: u32) -> Result<Vec<Todo>>;

    /// Inserts a todo and returns it with its assigned id.
    async fn create(&self, data: NewTodo) -> Result<Todo>;

    /// Applies a partial update and returns the stored result.
    async fn update(&self, id: i64, data: TodoPatch) -> Result<Option<Todo>>;

    /// Deletes a todo, reporting whether it existed.
    async fn remove(&self, id: i64) -> Result<bool>;
}
