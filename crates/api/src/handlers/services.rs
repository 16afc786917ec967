//! Handlers for the service catalog API.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use danawood_core::catalog::RELATED_LIMIT;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/services
pub async fn list_services(State(state): State<AppState>) -> Response {
    Json(DataResponse {
        data: state.catalogs.services.records(),
    })
    .into_response()
}

/// GET /api/v1/services/{id}
pub async fn get_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> AppResult<Response> {
    let service = state.catalogs.services.get(&service_id)?;

    Ok(Json(DataResponse { data: service }).into_response())
}

/// GET /api/v1/services/{id}/related
///
/// The next three services in catalog order, wrapping around.
pub async fn related_services(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> AppResult<Response> {
    let services = &state.catalogs.services;
    let service = services.get(&service_id)?;
    let related = services.following(service, RELATED_LIMIT);

    Ok(Json(DataResponse { data: related }).into_response())
}
