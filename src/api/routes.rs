//! API route configuration.
//!
//! Paths come from [`crate::routing`], the same table used to build
//! `Location` headers.

use crate::api::handlers::{
    create_todo_handler, delete_all_handler, delete_todo_handler, find_todo_handler,
    hello_json_handler, hello_text_handler, list_complete_handler, list_incomplete_handler,
    list_todos_handler, mark_complete_handler, mark_incomplete_handler, replace_todo_handler,
    unknown_todo_handler,
};
use crate::routing::{
    HELLO_JSON, HELLO_TEXT, TODO_DELETE, TODO_DELETE_ALL, TODO_FIND, TODO_LIST,
    TODO_LIST_COMPLETE, TODO_LIST_INCOMPLETE, TODO_MARK_COMPLETE, TODO_MARK_INCOMPLETE, TODO_POST,
    TODO_PUT,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// All API routes. Anonymous access.
///
/// # Endpoints
///
/// - `GET    /text`                        - Plain-text greeting
/// - `GET    /hello`                       - JSON greeting
/// - `GET    /todos`                       - List todos
/// - `POST   /todos`                       - Create a todo
/// - `GET    /todos/complete`              - List completed todos
/// - `GET    /todos/incomplete`            - List open todos
/// - `GET    /todos/{id}`                  - Fetch a todo
/// - `PUT    /todos/{id}`                  - Replace a todo
/// - `DELETE /todos/{id}`                  - Delete a todo
/// - `PUT    /todos/{id}/mark-complete`    - Mark complete
/// - `PUT    /todos/{id}/mark-incomplete`  - Mark incomplete
/// - `DELETE /todos/delete-all`            - Delete every todo
///
/// Other methods on `complete`, `incomplete` and `delete-all` answer an
/// empty 404, the same as any other id that is not a UUID.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(HELLO_TEXT.template, get(hello_text_handler))
        .route(HELLO_JSON.template, get(hello_json_handler))
        .route(TODO_LIST.template, get(list_todos_handler))
        .route(TODO_POST.template, post(create_todo_handler))
        .route(
            TODO_LIST_COMPLETE.template,
            get(list_complete_handler).fallback(unknown_todo_handler),
        )
        .route(
            TODO_LIST_INCOMPLETE.template,
            get(list_incomplete_handler).fallback(unknown_todo_handler),
        )
        .route(TODO_FIND.template, get(find_todo_handler))
        .route(TODO_PUT.template, put(replace_todo_handler))
        .route(TODO_DELETE.template, delete(delete_todo_handler))
        .route(TODO_MARK_COMPLETE.template, put(mark_complete_handler))
        .route(TODO_MARK_INCOMPLETE.template, put(mark_incomplete_handler))
        .route(
            TODO_DELETE_ALL.template,
            delete(delete_all_handler).fallback(unknown_todo_handler),
        )
}
