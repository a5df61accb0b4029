//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod hello;
pub mod todos;

pub use health::health_handler;
pub use hello::{hello_json_handler, hello_text_handler};
pub use todos::{
    create_todo_handler, delete_all_handler, delete_todo_handler, find_todo_handler,
    list_complete_handler, list_incomplete_handler, list_todos_handler, mark_complete_handler,
    mark_incomplete_handler, replace_todo_handler, unknown_todo_handler,
};
