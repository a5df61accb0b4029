//! Document-store repository implementation.
//!
//! One JSON document per todo, keyed by its id, in Redis.

mod redis_todo_repository;

pub use redis_todo_repository::RedisTodoRepository;
