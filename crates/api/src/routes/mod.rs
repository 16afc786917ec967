pub mod contact;
pub mod health;
pub mod pages;
pub mod projects;
pub mod services;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                       list, filter by ?category=
/// /projects/categories            category filter labels
/// /projects/{id}                  get
/// /projects/{id}/related          related projects
///
/// /services                       list
/// /services/{id}                  get
/// /services/{id}/related          following services
///
/// /site                           company details and page content
///
/// /contact                        submit inquiry (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/services", services::router())
        .route("/site", get(handlers::site::get_site_info))
        .nest("/contact", contact::router())
}
