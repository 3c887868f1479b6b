//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use projections::ProjectionError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Projection or query error.
    Projection(ProjectionError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Projection(err) => projection_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn projection_error_to_response(err: ProjectionError) -> (StatusCode, String) {
    match &err {
        ProjectionError::ViewNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        ProjectionError::InvalidPagination { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
        ProjectionError::ViewStore(_) => {
            tracing::error!(error = %err, "view store failure");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl From<ProjectionError> for ApiError {
    fn from(err: ProjectionError) -> Self {
        ApiError::Projection(err)
    }
}
