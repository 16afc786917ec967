//! Route definitions for the project catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Project routes mounted at `/projects`.
///
/// ```text
/// GET /                -> list_projects
/// GET /categories      -> list_categories
/// GET /{id}            -> get_project
/// GET /{id}/related    -> related_projects
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_projects))
        .route("/categories", get(projects::list_categories))
        .route("/{id}", get(projects::get_project))
        .route("/{id}/related", get(projects::related_projects))
}
