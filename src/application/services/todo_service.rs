//! Todo management service.

use std::sync::Arc;

use crate::domain::entities::{NewTodo, Todo, TodoFilter, TodoId};
use crate::domain::policy::{DeleteAllMode, PutMissing, TodoPolicy};
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;

/// Service behind the todo routes.
///
/// Each method is one storage transaction: look up, mutate, write. Request
/// validation happens in the handlers before any of these are called.
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
    policy: TodoPolicy,
}

impl TodoService {
    /// Creates a new todo service.
    pub fn new(repository: Arc<dyn TodoRepository>, policy: TodoPolicy) -> Self {
        Self { repository, policy }
    }

    /// Lists todos matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list(&self, filter: TodoFilter) -> Result<Vec<Todo>, AppError> {
        self.repository.list(filter).await
    }

    /// Looks up a todo by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find(&self, id: TodoId) -> Result<Option<Todo>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Persists a new todo.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError> {
        let todo = self.repository.create(new_todo).await?;
        tracing::info!(id = %todo.id, "Todo created");
        Ok(todo)
    }

    /// Replaces title and completion state of an existing todo.
    ///
    /// An unknown id answers [`AppError::NotFound`] or succeeds without
    /// writing, depending on [`TodoPolicy::put_missing`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the todo does not exist (default policy).
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn replace(
        &self,
        id: TodoId,
        title: String,
        is_complete: bool,
    ) -> Result<(), AppError> {
        let Some(mut todo) = self.repository.find_by_id(id).await? else {
            return self.missing_on_put(id);
        };

        todo.title = title;
        todo.is_complete = is_complete;

        if !self.repository.update(&todo).await? {
            return self.missing_on_put(id);
        }

        tracing::info!(id = %id, "Todo replaced");
        Ok(())
    }

    fn missing_on_put(&self, id: TodoId) -> Result<(), AppError> {
        match self.policy.put_missing {
            PutMissing::NotFound => Err(AppError::NotFound),
            PutMissing::NoContent => {
                tracing::debug!(id = %id, "PUT on unknown todo ignored");
                Ok(())
            }
        }
    }

    /// Sets `is_complete` on an existing todo. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the todo does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn set_completion(&self, id: TodoId, is_complete: bool) -> Result<(), AppError> {
        let mut todo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)?;

        todo.is_complete = is_complete;

        if !self.repository.update(&todo).await? {
            return Err(AppError::NotFound);
        }

        tracing::debug!(id = %id, is_complete, "Todo completion changed");
        Ok(())
    }

    /// Deletes one todo.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the todo does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, id: TodoId) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound);
        }

        tracing::info!(id = %id, "Todo deleted");
        Ok(())
    }

    /// Deletes every todo, if the bulk route is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotImplemented`] when [`TodoPolicy::delete_all`]
    /// is [`DeleteAllMode::Unimplemented`].
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        if self.policy.delete_all == DeleteAllMode::Unimplemented {
            return Err(AppError::not_implemented("not implemented yet"));
        }

        self.purge().await
    }

    /// Deletes every todo regardless of policy. Used by the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn purge(&self) -> Result<u64, AppError> {
        let removed = self.repository.delete_all().await?;
        tracing::info!(removed, "All todos deleted");
        Ok(removed)
    }

    /// Probes the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.health_check().await
    }
}
