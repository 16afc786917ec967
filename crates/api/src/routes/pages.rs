//! Route definitions for the HTML site.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// HTML page routes mounted at the root.
///
/// ```text
/// GET  /                -> home
/// GET  /about           -> about
/// GET  /services        -> services
/// GET  /services/{id}   -> service_detail
/// GET  /projects        -> projects (?category=)
/// GET  /projects/{id}   -> project_detail
/// GET  /process         -> process
/// GET  /contact         -> contact
/// POST /contact         -> submit_contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/services", get(pages::services))
        .route("/services/{id}", get(pages::service_detail))
        .route("/projects", get(pages::projects))
        .route("/projects/{id}", get(pages::project_detail))
        .route("/process", get(pages::process))
        .route("/contact", get(pages::contact).post(pages::submit_contact))
}
