//! Business logic services for the application layer.

pub mod todo_service;

pub use todo_service::TodoService;
