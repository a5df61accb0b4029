//! Response builders shared by every handler.
//!
//! Each function produces a complete [`Response`]: status code, content type,
//! and body. `created` also sets the `Location` header by resolving a named
//! route in the [`RouteRegistry`].

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::dto::problem::ValidationProblem;
use crate::error::AppError;
use crate::routing::RouteRegistry;

/// Empty 204 response.
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// 200 response with a `text/plain` body.
pub fn ok(text: impl Into<String>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text.into(),
    )
        .into_response()
}

/// 200 response with a JSON body.
pub fn ok_object<T: Serialize>(payload: T) -> Response {
    (StatusCode::OK, Json(payload)).into_response()
}

/// Empty 404 response.
pub fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

/// 201 response pointing at route `route_name` filled with `route_params`.
///
/// The body is the JSON payload when one is given, empty otherwise.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the route is unknown or the resolved
/// URL is not a valid header value.
pub fn created<T: Serialize>(
    routes: &RouteRegistry,
    route_name: &str,
    route_params: &[(&str, &str)],
    payload: Option<T>,
) -> Result<Response, AppError> {
    let location = routes
        .resolve(route_name, route_params)
        .ok_or_else(|| AppError::internal(format!("Unknown route '{}'", route_name)))?;

    let location = HeaderValue::from_str(&location)
        .map_err(|e| AppError::internal(format!("Invalid Location header: {}", e)))?;

    let mut response = match payload {
        Some(payload) => (StatusCode::CREATED, Json(payload)).into_response(),
        None => StatusCode::CREATED.into_response(),
    };
    response.headers_mut().insert(header::LOCATION, location);

    Ok(response)
}

/// 400 response with a problem-details body.
pub fn validation_failure(problem: ValidationProblem) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/problem+json")],
        Json(problem),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::TODO_FIND;
    use serde_json::json;

    fn content_type(response: &Response) -> Option<&str> {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_no_content() {
        let response = no_content();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(content_type(&response).is_none());
    }

    #[test]
    fn test_ok_text() {
        let response = ok("Hello World!");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), Some("text/plain; charset=utf-8"));
    }

    #[test]
    fn test_ok_object() {
        let response = ok_object(json!({ "hello": "World" }));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), Some("application/json"));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(not_found().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_created_sets_location() {
        let routes = RouteRegistry::default();

        let response = created(
            &routes,
            TODO_FIND.name,
            &[("id", "0b5f1c2e-8a51-4c43-9d0e-6b1b3f9c2a10")],
            Some(json!({ "title": "Buy milk" })),
        )
        .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/todos/0b5f1c2e-8a51-4c43-9d0e-6b1b3f9c2a10"
        );
        assert_eq!(content_type(&response), Some("application/json"));
    }

    #[test]
    fn test_created_without_payload_has_no_body_type() {
        let routes = RouteRegistry::default();

        let response = created::<()>(&routes, TODO_FIND.name, &[("id", "x")], None).unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(content_type(&response).is_none());
    }

    #[test]
    fn test_created_unknown_route() {
        let routes = RouteRegistry::default();
        let result = created::<()>(&routes, "nope", &[], None);
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_validation_failure() {
        let response =
            validation_failure(ValidationProblem::for_field("title", "The Title field is required."));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(content_type(&response), Some("application/problem+json"));
    }
}
