//! SQLite repository implementation.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::Result;
use crate::models::{NewTodo, Todo, TodoPatch};
use crate::repository::TodoRepository;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    description TEXT
)
"#;

#[derive(sqlx::FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    completed: bool,
    description: Option<String>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            completed: row.completed,
            description: row.description,
        }
    }
}

/// Todo storage in a SQLite `todos` table.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `database_url` and creates the table if needed.
    ///
    /// `sqlite::memory:` gets a single long-lived connection, since every
    /// connection would otherwise see its own empty database.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };

        let repo = Self::new(pool);
        repo.migrate().await?;
        Ok(repo)
    }

    /// Creates the `todos` table if it does not exist.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        info!("Todo table ready");
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn get(&self, id: i64) -> Result<Option<Todo>> {
        let row = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, completed, description FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Todo::from))
    }

    async fn get_all(&self, page: u32, limit: u32) -> Result<Vec<Todo>> {
        let offset = i64::from(page) * i64::from(limit);
        let rows = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, completed, description FROM todos ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn create(&self, data: NewTodo) -> Result<Todo> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"INSERT INTO todos (title, completed, description) VALUES (?, ?, ?)
               RETURNING id, title, completed, description"#,
        )
        .bind(data.title)
        .bind(data.completed)
        .bind(data.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, data: TodoPatch) -> Result<Option<Todo>> {
        sqlx::query(
            r#"UPDATE todos SET
                   title = COALESCE(?, title),
                   completed = COALESCE(?, completed),
                   description = COALESCE(?, description)
               WHERE id = ?"#,
        )
        .bind(data.title)
        .bind(data.completed)
        .bind(data.description)
        .bind(id)
        .execute(&self.pool)
        .await?;

        // Re-read so the caller sees exactly what is stored
        self.get(id).await
    }

    async fn remove(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
