//! HTTP adapter with observability for the company read model.
//!
//! Exposes the event-delivery boundary and the query boundary over REST,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use projections::{CompanyQueryService, CompanyViewProjector, ProjectionProcessor};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use view_store::ViewStore;

use config::Config;
use routes::companies::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: ViewStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check::<S>))
        .route("/company-events", post(routes::companies::deliver::<S>))
        .route("/companies", get(routes::companies::list::<S>))
        .route("/companies/{id}", get(routes::companies::get::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state: the company view projector registered
/// with a processor, and a query service, both sharing `view_store`.
pub fn create_state<S: ViewStore + Clone + 'static>(
    view_store: S,
    config: &Config,
) -> Arc<AppState<S>> {
    let projector =
        CompanyViewProjector::new(view_store.clone()).with_replay_policy(config.replay_policy);

    let mut processor = ProjectionProcessor::new();
    processor.register(Box::new(projector));

    let queries = CompanyQueryService::new(view_store).with_max_page_size(config.max_page_size);

    Arc::new(AppState { processor, queries })
}
