//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`     - Store health check
//! - `/{API_PREFIX}/*` - Todo API (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and middleware without path normalization.
///
/// API routes are nested under the registry prefix held in `state`; an empty
/// prefix mounts them at the root.
pub fn router(state: AppState) -> Router {
    let prefix = state.routes.prefix().to_string();
    let api_router = api::routes::api_routes();

    let router = Router::new().route("/health", get(health_handler));
    let router = if prefix.is_empty() {
        router.merge(api_router)
    } else {
        router.nest(&format!("/{}", prefix), api_router)
    };

    router.with_state(state).layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
