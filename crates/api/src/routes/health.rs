//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use view_store::ViewStore;

use super::companies::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
}

/// GET /health — reports whether the view store answers.
///
/// Returns 503 when the store cannot be reached, so load balancers stop
/// routing queries to an instance that can only fail them.
pub async fn check<S: ViewStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.queries.count_views().await {
        Ok(views) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                views: Some(views),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    views: None,
                }),
            )
        }
    }
}
