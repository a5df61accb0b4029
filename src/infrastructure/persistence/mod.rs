//! PostgreSQL repository implementation.
//!
//! Uses SQLx with runtime-checked queries against the `todos` table created
//! by `migrations/0001_create_todos.sql`.

pub mod pg_todo_repository;

pub use pg_todo_repository::PgTodoRepository;
