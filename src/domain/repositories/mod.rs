//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.

pub mod todo_repository;

pub use todo_repository::TodoRepository;

#[cfg(test)]
pub use todo_repository::MockTodoRepository;
