//! Repository trait for todo persistence.

use crate::domain::entities::{NewTodo, Todo, TodoFilter, TodoId};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for todos.
///
/// Filtering by completion state is an explicit parameter instead of an
/// arbitrary predicate so that every backend can push it down to its own
/// query language.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTodoRepository`] - PostgreSQL table
/// - [`crate::infrastructure::document::RedisTodoRepository`] - JSON documents in Redis
/// - [`crate::infrastructure::memory::InMemoryTodoRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Lists todos matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, filter: TodoFilter) -> Result<Vec<Todo>, AppError>;

    /// Finds a todo by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, AppError>;

    /// Persists a new todo and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors, including an id clash.
    async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError>;

    /// Overwrites `title` and `is_complete` of an existing todo.
    ///
    /// Returns `false` if no todo with that id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, todo: &Todo) -> Result<bool, AppError>;

    /// Removes a todo. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: TodoId) -> Result<bool, AppError>;

    /// Removes every todo and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_all(&self) -> Result<u64, AppError>;

    /// Cheap round trip to the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    async fn health_check(&self) -> Result<(), AppError>;
}
