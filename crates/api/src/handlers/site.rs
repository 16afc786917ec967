use axum::response::IntoResponse;
use axum::Json;
use danawood_core::site::SiteInfo;

use crate::response::DataResponse;

/// GET /api/v1/site
///
/// Company details, navigation and the about/process content.
pub async fn get_site_info() -> impl IntoResponse {
    Json(DataResponse {
        data: SiteInfo::default(),
    })
}
