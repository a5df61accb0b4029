//! Application layer services implementing request behaviour.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::todo_service::TodoService`] - Todo CRUD and completion toggling

pub mod services;
