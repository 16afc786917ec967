//! Handlers for the server-rendered HTML pages.
//!
//! Detail pages resolve the record from the path, fall back to a
//! "not found" page (status 404) when it does not exist, and otherwise
//! render the record with its related panel.

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use danawood_core::catalog::RELATED_LIMIT;
use danawood_core::contact::{ContactInquiry, FieldErrors};

use crate::handlers::contact::accept_inquiry;
use crate::query::CategoryParams;
use crate::render;
use crate::state::AppState;

/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render::static_pages::home(&state.catalogs))
}

/// GET /about
pub async fn about() -> Html<String> {
    Html(render::static_pages::about())
}

/// GET /process
pub async fn process() -> Html<String> {
    Html(render::static_pages::process())
}

/// GET /services
pub async fn services(State(state): State<AppState>) -> Html<String> {
    let services: Vec<_> = state.catalogs.services.iter().collect();
    Html(render::services::services_page(&services))
}

/// GET /services/{id}
pub async fn service_detail(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Response {
    let services = &state.catalogs.services;
    match services.find(&service_id) {
        Some(service) => {
            let related = services.following(service, RELATED_LIMIT);
            Html(render::services::service_detail(service, &related)).into_response()
        }
        None => {
            tracing::debug!(service_id = %service_id, "Service page requested for unknown id");
            (
                StatusCode::NOT_FOUND,
                Html(render::services::service_not_found()),
            )
                .into_response()
        }
    }
}

/// GET /projects?category=
pub async fn projects(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> Html<String> {
    let category = params.category();
    let projects = state.catalogs.projects.filter_by_category(category);
    Html(render::projects::projects_page(&projects, category))
}

/// GET /projects/{id}
pub async fn project_detail(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Response {
    let projects = &state.catalogs.projects;
    match projects.find(&project_id) {
        Some(project) => {
            let related = projects.related(project, RELATED_LIMIT);
            Html(render::projects::project_detail(project, &related)).into_response()
        }
        None => {
            tracing::debug!(project_id = %project_id, "Project page requested for unknown id");
            (
                StatusCode::NOT_FOUND,
                Html(render::projects::project_not_found()),
            )
                .into_response()
        }
    }
}

/// GET /contact
pub async fn contact() -> Html<String> {
    Html(render::contact::contact_page(
        &ContactInquiry::default(),
        &FieldErrors::default(),
    ))
}

/// POST /contact
///
/// Re-renders the form with messages (status 400) when invalid; otherwise
/// shows the acknowledgement with a cleared form.
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(input): Form<ContactInquiry>,
) -> Response {
    match accept_inquiry(&state, &input).await {
        Ok(ack) => Html(render::contact::contact_sent(&ack)).into_response(),
        Err(errors) => (
            StatusCode::BAD_REQUEST,
            Html(render::contact::contact_page(&input, &errors)),
        )
            .into_response(),
    }
}

/// Fallback for any unmatched path.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::warn!(path = %uri.path(), "No route for requested path");
    (StatusCode::NOT_FOUND, Html(render::static_pages::not_found()))
}
