//! Greeting endpoints.

use axum::response::Response;

use crate::api::dto::hello::HelloResponse;
use crate::api::response;

/// `GET /api/text` → `Hello World!` as `text/plain`.
pub async fn hello_text_handler() -> Response {
    response::ok("Hello World!")
}

/// `GET /api/hello` → `{"hello":"World"}`.
pub async fn hello_json_handler() -> Response {
    response::ok_object(HelloResponse::default())
}
