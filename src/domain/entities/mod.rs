//! Core domain entities.
//!
//! - [`Todo`] - A stored todo item
//! - [`NewTodo`] - Input for creating a todo
//! - [`TodoId`] - UUID-backed identifier
//! - [`TodoFilter`] - Completion filter for list queries

pub mod todo;

pub use todo::{NewTodo, Todo, TodoFilter, TodoId};
