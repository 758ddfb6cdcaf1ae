//! API Handlers
//!
//! HTTP request handlers for the todo endpoints. Validation and status
//! code mapping happen here; caching decisions belong to the service.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::cache::{CacheStats, MemoryCache};
use crate::error::{Result, TodoError};
use crate::models::{
    CreateTodoRequest, HealthResponse, MessageResponse, PaginationQuery, Todo, UpdateTodoRequest,
};
use crate::repository::InMemoryTodoRepository;
use crate::service::TodoService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aware todo service
    pub service: Arc<TodoService>,
}

impl AppState {
    /// Creates a new AppState around an already wired service.
    pub fn new(service: TodoService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// State backed by an in-memory repository and in-memory cache.
    pub fn in_memory() -> Self {
        Self::new(TodoService::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(MemoryCache::new()),
        ))
    }
}

// Extractor results; rejections become `TodoError::InvalidRequest` via `?`
type IdParam = std::result::Result<Path<i64>, PathRejection>;
type PageQuery = std::result::Result<Query<PaginationQuery>, QueryRejection>;
type JsonBody<T> = std::result::Result<Json<T>, JsonRejection>;

/// Handler for GET /api/todos
pub async fn list_todos_handler(
    State(state): State<AppState>,
    query: PageQuery,
) -> Result<Json<Vec<Todo>>> {
    let Query(query) = query?;
    if let Some(error_msg) = query.validate() {
        return Err(TodoError::InvalidRequest(error_msg));
    }

    let todos = state.service.get_all(query.page(), query.limit()).await?;
    Ok(Json(todos))
}

/// Handler for GET /api/todos/:id
pub async fn get_todo_handler(State(state): State<AppState>, id: IdParam) -> Result<Json<Todo>> {
    let Path(id) = id?;
    state
        .service
        .get(id)
        .await?
        .map(Json)
        .ok_or(TodoError::NotFound(id))
}

/// Handler for POST /api/todos
pub async fn create_todo_handler(
    State(state): State<AppState>,
    body: JsonBody<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>)> {
    let Json(req) = body?;
    if let Some(error_msg) = req.validate() {
        return Err(TodoError::InvalidRequest(error_msg));
    }

    let todo = state.service.create(req.into_new_todo()).await?;
    debug!(todo_id = todo.id, "Created todo via API");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Handler for PUT /api/todos/:id
pub async fn update_todo_handler(
    State(state): State<AppState>,
    id: IdParam,
    body: JsonBody<UpdateTodoRequest>,
) -> Result<Json<Todo>> {
    let Path(id) = id?;
    let Json(req) = body?;
    state
        .service
        .update(id, req.into())
        .await?
        .map(Json)
        .ok_or(TodoError::NotFound(id))
}

/// Handler for DELETE /api/todos/:id
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    id: IdParam,
) -> Result<Json<MessageResponse>> {
    let Path(id) = id?;
    if state.service.remove(id).await? {
        Ok(Json(MessageResponse::destroyed()))
    } else {
        Err(TodoError::NotFound(id))
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.service.stats())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
