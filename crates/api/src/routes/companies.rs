//! Company event delivery and query endpoints.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use domain::{CompanyEvent, DomainEvent};
use projections::{
    CompanyByIdQuery, CompanyQueryService, CompanyView, FindAllCompaniesQuery,
    ProjectionProcessor,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use view_store::ViewStore;

use crate::error::ApiError;

/// Page size used when a list request does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Shared application state accessible from all handlers.
pub struct AppState<S: ViewStore> {
    pub processor: ProjectionProcessor,
    pub queries: CompanyQueryService<S>,
}

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct ListCompaniesParams {
    pub offset: Option<i64>,
    pub size: Option<i64>,
}

// -- Response types --

#[derive(Serialize)]
pub struct EventAcceptedResponse {
    pub event_type: &'static str,
    pub company_id: String,
}

// -- Handlers --

/// POST /company-events — deliver one company event to the projections.
///
/// A non-2xx status tells the delivery layer the event was not applied and
/// may be redelivered.
#[tracing::instrument(skip(state, payload))]
pub async fn deliver<S: ViewStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<CompanyEvent>, JsonRejection>,
) -> Result<(StatusCode, Json<EventAcceptedResponse>), ApiError> {
    let Json(event) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    state.processor.process_event(&event).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(EventAcceptedResponse {
            event_type: event.event_type(),
            company_id: event.company_id().to_string(),
        }),
    ))
}

/// GET /companies/{id} — load one company view.
#[tracing::instrument(skip(state))]
pub async fn get<S: ViewStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<CompanyView>, ApiError> {
    state
        .queries
        .find_by_id(&CompanyByIdQuery::new(id.as_str()))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Company {id} not found")))
}

/// GET /companies — list one page of company views.
#[tracing::instrument(skip(state, params))]
pub async fn list<S: ViewStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    params: Result<Query<ListCompaniesParams>, QueryRejection>,
) -> Result<Json<Vec<CompanyView>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let query = FindAllCompaniesQuery::new(
        params.offset.unwrap_or(0),
        params.size.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    let views = state.queries.find_all(&query).await?;

    Ok(Json(views))
}
