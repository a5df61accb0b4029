//! Request extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::domain::entities::TodoId;
use crate::error::AppError;

/// `{id}` path parameter constrained to UUIDs.
///
/// An id that is not a UUID cannot name any todo, so the request is answered
/// with an empty 404 instead of a 400.
#[derive(Debug, Clone, Copy)]
pub struct TodoIdPath(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;

        raw.parse::<TodoId>().map(Self).map_err(|_| {
            tracing::debug!(id = %raw, "Path id is not a UUID");
            AppError::NotFound
        })
    }
}
