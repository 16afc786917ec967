//! Handlers for the project catalog API.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use danawood_core::catalog::{PROJECT_CATEGORIES, RELATED_LIMIT};

use crate::error::AppResult;
use crate::query::CategoryParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects?category=
///
/// List projects in catalog order, filtered by category. An unknown
/// category yields an empty list.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> Response {
    let projects = state
        .catalogs
        .projects
        .filter_by_category(params.category());

    tracing::debug!(
        category = params.category(),
        count = projects.len(),
        "Projects filtered",
    );

    Json(DataResponse { data: projects }).into_response()
}

/// GET /api/v1/projects/categories
///
/// The category filter labels, `All` first.
pub async fn list_categories() -> impl IntoResponse {
    Json(DataResponse {
        data: PROJECT_CATEGORIES,
    })
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Response> {
    let project = state.catalogs.projects.get(&project_id)?;

    Ok(Json(DataResponse { data: project }).into_response())
}

/// GET /api/v1/projects/{id}/related
///
/// Up to three other projects, same category first.
pub async fn related_projects(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Response> {
    let projects = &state.catalogs.projects;
    let project = projects.get(&project_id)?;
    let related = projects.related(project, RELATED_LIMIT);

    Ok(Json(DataResponse { data: related }).into_response())
}
