//! Application error type and its HTTP mapping.
//!
//! | Variant | Status | Body |
//! |---|---|---|
//! | [`AppError::Validation`] | 400 | problem details |
//! | [`AppError::NotFound`] | 404 | empty |
//! | [`AppError::NotImplemented`] | 500 | `{"error":{"code":"not_implemented",...}}` |
//! | [`AppError::Internal`] | 500 | `{"error":{"code":"internal_error",...}}` |

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::api::dto::problem::ValidationProblem;
use crate::api::response;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("One or more validation errors occurred")]
    Validation(ValidationProblem),

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    NotImplemented(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Single-field validation failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(ValidationProblem::for_field(field, message))
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::NotImplemented(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(problem) => response::validation_failure(problem),
            AppError::NotFound => response::not_found(),
            AppError::NotImplemented(message) => {
                tracing::warn!(%message, "Route is not implemented");
                error_response("not_implemented", message)
            }
            AppError::Internal(message) => {
                tracing::error!(%message, "Request failed");
                error_response("internal_error", "Internal server error".to_string())
            }
        }
    }
}

fn error_response(code: &'static str, message: String) -> Response {
    let body = ErrorBody {
        error: ErrorInfo { code, message },
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (field, field_errors) in errors.field_errors() {
            let messages = fields.entry(field.to_string()).or_default();
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The {} field is invalid.", field));
                messages.push(message);
            }
        }

        AppError::Validation(ValidationProblem::new(fields))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(format!("Database error: {}", e))
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::Internal(format!("Redis error: {}", e))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(format!("Serialization error: {}", e))
    }
}
