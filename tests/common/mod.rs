#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use todo_api::domain::entities::{Todo, TodoId};
use todo_api::domain::policy::{DeleteAllMode, PutMissing, TodoPolicy};
use todo_api::domain::repositories::TodoRepository;
use todo_api::infrastructure::{InMemoryTodoRepository, PgTodoRepository};
use todo_api::routes::router;
use todo_api::routing::RouteRegistry;
use todo_api::state::AppState;

pub fn todo(title: &str, is_complete: bool) -> Todo {
    Todo::new(TodoId::new(), title.to_string(), is_complete)
}

pub fn create_test_state(repository: Arc<dyn TodoRepository>, policy: TodoPolicy) -> AppState {
    AppState::new(repository, policy, RouteRegistry::default())
}

pub fn create_memory_state(todos: Vec<Todo>, policy: TodoPolicy) -> AppState {
    create_test_state(Arc::new(InMemoryTodoRepository::with_todos(todos)), policy)
}

pub fn create_prefixed_state(prefix: &str, policy: TodoPolicy) -> AppState {
    AppState::new(
        Arc::new(InMemoryTodoRepository::new()),
        policy,
        RouteRegistry::new(prefix),
    )
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    create_test_state(
        Arc::new(PgTodoRepository::new(Arc::new(pool))),
        TodoPolicy::default(),
    )
}

/// Full application router over an in-memory store.
pub fn test_server(todos: Vec<Todo>, policy: TodoPolicy) -> TestServer {
    TestServer::new(router(create_memory_state(todos, policy))).unwrap()
}

pub fn default_server() -> TestServer {
    test_server(Vec::new(), TodoPolicy::default())
}

pub fn put_no_content_policy() -> TodoPolicy {
    TodoPolicy {
        put_missing: PutMissing::NoContent,
        ..TodoPolicy::default()
    }
}

pub fn delete_all_unimplemented_policy() -> TodoPolicy {
    TodoPolicy {
        delete_all: DeleteAllMode::Unimplemented,
        ..TodoPolicy::default()
    }
}
