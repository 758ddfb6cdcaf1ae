//! Request DTOs for the todo API
//!
//! Defines the structure of incoming HTTP request bodies and query strings,
//! and the boundary validation applied before anything reaches the service.

use serde::Deserialize;

use super::todo::{NewTodo, TodoPatch};

/// Default page index when `page` is omitted
pub const DEFAULT_PAGE: u32 = 0;

/// Default page size when `limit` is omitted
pub const DEFAULT_LIMIT: u32 = 10;

/// Request body for `POST /api/todos`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateTodoRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.is_empty() {
            return Some("Title is required".to_string());
        }
        None
    }

    pub fn into_new_todo(self) -> NewTodo {
        NewTodo {
            title: self.title,
            completed: self.completed.unwrap_or(false),
            description: self.description,
        }
    }
}

/// Request body for `PUT /api/todos/:id`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(req: UpdateTodoRequest) -> Self {
        Self {
            title: req.title,
            completed: req.completed,
            description: req.description,
        }
    }
}

/// Query string for `GET /api/todos`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PaginationQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.limit == Some(0) {
            return Some("Limit must be a positive integer".to_string());
        }
        None
    }
}
