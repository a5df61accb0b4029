//! Handlers for the todo endpoints.
//!
//! Each handler extracts its parameters, calls one [`TodoService`] method and
//! maps the outcome onto a [`response`] builder. Bodies are validated before
//! the service is touched.
//!
//! [`TodoService`]: crate::application::services::TodoService

use axum::{Json, extract::State, response::Response};
use validator::Validate;

use crate::api::dto::todo::TodoRequest;
use crate::api::extract::TodoIdPath;
use crate::api::response;
use crate::domain::entities::TodoFilter;
use crate::error::AppError;
use crate::routing::TODO_FIND;
use crate::state::AppState;

/// Lists every todo.
///
/// # Endpoint
///
/// `GET /api/todos`
pub async fn list_todos_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let todos = state.todo_service.list(TodoFilter::All).await?;
    Ok(response::ok_object(todos))
}

/// Lists completed todos.
///
/// # Endpoint
///
/// `GET /api/todos/complete`
pub async fn list_complete_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let todos = state.todo_service.list(TodoFilter::Complete).await?;
    Ok(response::ok_object(todos))
}

/// Lists todos that are not completed.
///
/// # Endpoint
///
/// `GET /api/todos/incomplete`
pub async fn list_incomplete_handler(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let todos = state.todo_service.list(TodoFilter::Incomplete).await?;
    Ok(response::ok_object(todos))
}

/// Fetches one todo.
///
/// # Endpoint
///
/// `GET /api/todos/{id}`
///
/// # Errors
///
/// Returns 404 with an empty body if no todo has this id.
pub async fn find_todo_handler(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> Result<Response, AppError> {
    match state.todo_service.find(id).await? {
        Some(todo) => Ok(response::ok_object(todo)),
        None => Ok(response::not_found()),
    }
}

/// Creates a todo.
///
/// # Endpoint
///
/// `POST /api/todos`
///
/// # Request Body
///
/// ```json
/// { "title": "Buy milk", "isComplete": false }
/// ```
///
/// # Response
///
/// 201 with `Location: /api/todos/{id}` and the stored todo as body.
///
/// # Errors
///
/// Returns 400 problem details if `title` is missing or blank; nothing is stored.
pub async fn create_todo_handler(
    State(state): State<AppState>,
    Json(payload): Json<TodoRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let todo = state.todo_service.create(payload.into_new_todo()).await?;
    let id = todo.id.to_string();

    response::created(&state.routes, TODO_FIND.name, &[("id", &id)], Some(todo))
}

/// Replaces title and completion state of a todo.
///
/// # Endpoint
///
/// `PUT /api/todos/{id}`
///
/// # Errors
///
/// Returns 400 problem details if the body is invalid.
/// Returns 404 if the todo does not exist, unless `PUT_MISSING=no-content`.
pub async fn replace_todo_handler(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
    Json(payload): Json<TodoRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    state
        .todo_service
        .replace(id, payload.title.unwrap_or_default(), payload.is_complete)
        .await?;

    Ok(response::no_content())
}

/// Marks a todo as complete.
///
/// # Endpoint
///
/// `PUT /api/todos/{id}/mark-complete`
///
/// # Errors
///
/// Returns 404 if the todo does not exist.
pub async fn mark_complete_handler(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> Result<Response, AppError> {
    state.todo_service.set_completion(id, true).await?;
    Ok(response::no_content())
}

/// Marks a todo as not complete.
///
/// # Endpoint
///
/// `PUT /api/todos/{id}/mark-incomplete`
///
/// # Errors
///
/// Returns 404 if the todo does not exist.
pub async fn mark_incomplete_handler(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> Result<Response, AppError> {
    state.todo_service.set_completion(id, false).await?;
    Ok(response::no_content())
}

/// Deletes a todo.
///
/// # Endpoint
///
/// `DELETE /api/todos/{id}`
///
/// # Errors
///
/// Returns 404 if the todo does not exist.
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    TodoIdPath(id): TodoIdPath,
) -> Result<Response, AppError> {
    state.todo_service.delete(id).await?;
    Ok(response::no_content())
}

/// Deletes every todo.
///
/// # Endpoint
///
/// `DELETE /api/todos/delete-all`
///
/// # Errors
///
/// Returns 500 `not_implemented` when `DELETE_ALL=unimplemented`.
pub async fn delete_all_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    state.todo_service.delete_all().await?;
    Ok(response::no_content())
}

/// Answers requests that hit a literal todo path (`complete`, `incomplete`,
/// `delete-all`) with a method that path does not serve.
///
/// Those segments are not UUIDs, so as an `{id}` they would name no todo:
/// the answer is an empty 404 instead of a 405.
pub async fn unknown_todo_handler() -> Response {
    response::not_found()
}
