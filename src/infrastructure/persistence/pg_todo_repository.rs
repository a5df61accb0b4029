//! PostgreSQL implementation of the todo repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewTodo, Todo, TodoFilter, TodoId};
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct TodoRow {
    id: Uuid,
    title: String,
    is_complete: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo::new(row.id.into(), row.title, row.is_complete)
    }
}

/// PostgreSQL repository backed by the `todos` table.
///
/// Schema lives in `migrations/`; the server applies it at startup.
pub struct PgTodoRepository {
    pool: Arc<PgPool>,
}

impl PgTodoRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn list(&self, filter: TodoFilter) -> Result<Vec<Todo>, AppError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, is_complete
            FROM todos
            WHERE ($1::BOOLEAN IS NULL OR is_complete = $1)
            ORDER BY title, id
            "#,
        )
        .bind(filter.is_complete())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, AppError> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, is_complete
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Todo::from))
    }

    async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError> {
        let todo = new_todo.into_todo();

        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (id, title, is_complete)
            VALUES ($1, $2, $3)
            RETURNING id, title, is_complete
            "#,
        )
        .bind(todo.id.as_uuid())
        .bind(&todo.title)
        .bind(todo.is_complete)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, todo: &Todo) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE todos SET
                title       = $2,
                is_complete = $3
            WHERE id = $1
            "#,
        )
        .bind(todo.id.as_uuid())
        .bind(&todo.title)
        .bind(todo.is_complete)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: TodoId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id.as_uuid())
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM todos")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
