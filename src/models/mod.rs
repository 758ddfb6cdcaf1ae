//! Domain model and HTTP DTOs for the todo service
//!
//! `todo` holds the entity and its create/update payloads; `requests` and
//! `responses` hold what only the HTTP boundary needs.

pub mod requests;
pub mod responses;
pub mod todo;

// Re-export commonly used types
pub use requests::{CreateTodoRequest, PaginationQuery, UpdateTodoRequest};
pub use responses::{HealthResponse, MessageResponse};
pub use todo::{NewTodo, Todo, TodoPatch};
