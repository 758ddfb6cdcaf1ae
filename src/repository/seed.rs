//! Sample data for a fresh database.

use tracing::{debug, info};

use crate::error::Result;
use crate::models::NewTodo;
use crate::repository::TodoRepository;

/// Inserts the sample todos when the repository is empty.
///
/// Returns the number of todos inserted (0 when data already exists).
pub async fn seed_todos(repo: &dyn TodoRepository) -> Result<usize> {
    if !repo.get_all(0, 1).await?.is_empty() {
        debug!("Todos already present, skipping seed");
        return Ok(0);
    }

    let samples = [
        NewTodo::new("First ToDo").with_description("This is the first ToDo"),
        NewTodo::new("Second ToDo").with_description("This is the second ToDo"),
    ];
    let count = samples.len();

    for todo in samples {
        repo.create(todo).await?;
    }

    info!(count, "Seeded sample todos");
    Ok(count)
}
