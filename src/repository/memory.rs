//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{NewTodo, Todo, TodoPatch};
use crate::repository::TodoRepository;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Todo>,
    next_id: i64,
}

/// Non-persistent storage backend.
///
/// Ids are assigned from 1 upward and never reused, like an
/// autoincrement column. Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn get(&self, id: i64) -> Result<Option<Todo>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn get_all(&self, page: u32, limit: u32) -> Result<Vec<Todo>> {
        let (Ok(offset), Ok(limit)) = (
            usize::try_from(u64::from(page) * u64::from(limit)),
            usize::try_from(limit),
        ) else {
            return Ok(Vec::new());
        };
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn create(&self, data: NewTodo) -> Result<Todo> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let todo = Todo {
            id: table.next_id,
            title: data.title,
            completed: data.completed,
            description: data.description,
        };
        table.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: i64, data: TodoPatch) -> Result<Option<Todo>> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|todo| {
            data.apply_to(todo);
            todo.clone()
        }))
    }

    async fn remove(&self, id: i64) -> Result<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
