use std::sync::Arc;

use danawood_core::catalog::SiteCatalogs;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Project and service catalogs, read-only for the process lifetime.
    pub catalogs: Arc<SiteCatalogs>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
