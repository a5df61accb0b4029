//! Process-local todo store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{NewTodo, Todo, TodoFilter, TodoId};
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;

/// Keeps todos in memory, in insertion order.
///
/// Used for local development (`STORE_BACKEND=memory`) and handler tests.
/// Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: RwLock::new(todos),
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self, filter: TodoFilter) -> Result<Vec<Todo>, AppError> {
        let todos = self.todos.read().await;
        Ok(todos.iter().filter(|t| filter.matches(t)).cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, AppError> {
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError> {
        let todo = new_todo.into_todo();
        let mut todos = self.todos.write().await;

        if todos.iter().any(|t| t.id == todo.id) {
            return Err(AppError::internal(format!(
                "Todo with id {} already exists",
                todo.id
            )));
        }

        todos.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> Result<bool, AppError> {
        let mut todos = self.todos.write().await;

        match todos.iter_mut().find(|t| t.id == todo.id) {
            Some(stored) => {
                stored.title.clone_from(&todo.title);
                stored.is_complete = todo.is_complete;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: TodoId) -> Result<bool, AppError> {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        Ok(todos.len() < before)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut todos = self.todos.write().await;
        let removed = todos.len() as u64;
        todos.clear();
        Ok(removed)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
