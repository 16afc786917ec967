//! The site's two catalogs and where they are loaded from.

use std::path::Path;

use serde::de::DeserializeOwned;

use super::{Catalog, CatalogEntry, Project, Service};
use crate::error::CoreError;

/// File name of the project catalog inside a catalog directory.
pub const PROJECTS_FILE: &str = "projects.json";

/// File name of the service catalog inside a catalog directory.
pub const SERVICES_FILE: &str = "services.json";

const EMBEDDED_PROJECTS: &str = include_str!("../../data/projects.json");
const EMBEDDED_SERVICES: &str = include_str!("../../data/services.json");

/// Projects and services, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct SiteCatalogs {
    pub projects: Catalog<Project>,
    pub services: Catalog<Service>,
}

impl SiteCatalogs {
    /// Catalogs compiled into the binary.
    pub fn embedded() -> Result<Self, CoreError> {
        Ok(Self {
            projects: Catalog::from_json(EMBEDDED_PROJECTS)?,
            services: Catalog::from_json(EMBEDDED_SERVICES)?,
        })
    }

    /// Load catalogs, letting files in `dir` override the embedded ones.
    ///
    /// A file that does not exist falls back to the embedded catalog. A file
    /// that exists but cannot be read or parsed is an error.
    pub fn load(dir: Option<&Path>) -> Result<Self, CoreError> {
        let Some(dir) = dir else {
            return Self::embedded();
        };
        Ok(Self {
            projects: load_catalog(&dir.join(PROJECTS_FILE), EMBEDDED_PROJECTS)?,
            services: load_catalog(&dir.join(SERVICES_FILE), EMBEDDED_SERVICES)?,
        })
    }
}

fn load_catalog<T>(path: &Path, fallback: &str) -> Result<Catalog<T>, CoreError>
where
    T: CatalogEntry + DeserializeOwned,
{
    match std::fs::read_to_string(path) {
        Ok(json) => Catalog::from_json(&json).map_err(|e| match e {
            CoreError::Validation(msg) => {
                CoreError::Validation(format!("{}: {msg}", path.display()))
            }
            other => other,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Catalog::from_json(fallback),
        Err(e) => Err(CoreError::Internal(format!(
            "Failed to read {}: {e}",
            path.display()
        ))),
    }
}
