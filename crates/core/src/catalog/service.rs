//! Service offering records.

use serde::{Deserialize, Serialize};

use super::CatalogEntry;
use crate::error::CoreError;
use crate::types::ImageRef;

/// One stage of how a service is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step: String,
    pub description: String,
}

/// A service the company offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    /// Two-digit display index ("01"). Presentation only.
    pub number: String,
    pub title: String,
    /// `None` renders a placeholder.
    #[serde(default)]
    pub image: Option<ImageRef>,
    pub short_description: String,
    pub full_description: String,
    pub benefits: Vec<String>,
    pub features: Vec<String>,
    pub process: Vec<ProcessStep>,
    pub gallery_images: Vec<ImageRef>,
}

impl CatalogEntry for Service {
    const ENTITY: &'static str = "Service";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate_entry(&self) -> Result<(), CoreError> {
        if self.number.len() != 2 || !self.number.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::Validation(format!(
                "Service '{}' number must be two digits, got '{}'",
                self.id, self.number
            )));
        }
        Ok(())
    }
}
