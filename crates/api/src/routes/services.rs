//! Route definitions for the service catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// Service routes mounted at `/services`.
///
/// ```text
/// GET /                -> list_services
/// GET /{id}            -> get_service
/// GET /{id}/related    -> related_services
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(services::list_services))
        .route("/{id}", get(services::get_service))
        .route("/{id}/related", get(services::related_services))
}
