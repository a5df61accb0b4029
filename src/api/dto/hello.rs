//! DTO for the greeting endpoint.

use serde::Serialize;

/// Body of `GET /api/hello`: `{"hello":"World"}`.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub hello: &'static str,
}

impl Default for HelloResponse {
    fn default() -> Self {
        Self { hello: "World" }
    }
}
