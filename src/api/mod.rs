//! API Module
//!
//! HTTP handlers and routing for the todo REST API.
//!
//! # Endpoints
//! - `GET /api/todos` - List todos (paginated)
//! - `POST /api/todos` - Create a todo
//! - `GET /api/todos/:id` - Fetch a todo
//! - `PUT /api/todos/:id` - Update a todo
//! - `DELETE /api/todos/:id` - Delete a todo
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
