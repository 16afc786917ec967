//! Portfolio project records.

use serde::{Deserialize, Serialize};

use super::{CatalogEntry, Categorized};
use crate::error::CoreError;
use crate::types::ImageRef;

/// Filter sentinel that selects every project.
pub const CATEGORY_ALL: &str = "All";

/// Category labels offered by the portfolio filter, in display order.
/// [`CATEGORY_ALL`] comes first; the rest are the only valid record
/// categories.
pub const PROJECT_CATEGORIES: &[&str] = &[
    CATEGORY_ALL,
    "Kitchens",
    "Closets",
    "Vanities",
    "Panelling",
    "Renovation",
    "Media Units",
];

/// A client quote attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

/// A completed project shown in the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub location: String,
    /// Four-digit year, kept as text.
    pub year: String,
    pub image: ImageRef,
    pub gallery_images: Vec<ImageRef>,
    pub short_description: String,
    pub full_description: String,
    pub challenge: String,
    pub solution: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub testimonial: Option<Testimonial>,
}

impl CatalogEntry for Project {
    const ENTITY: &'static str = "Project";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate_entry(&self) -> Result<(), CoreError> {
        if self.category == CATEGORY_ALL || !PROJECT_CATEGORIES.contains(&self.category.as_str())
        {
            return Err(CoreError::Validation(format!(
                "Project '{}' has invalid category '{}'. Must be one of: {}",
                self.id,
                self.category,
                PROJECT_CATEGORIES[1..].join(", ")
            )));
        }
        if self.year.len() != 4 || !self.year.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::Validation(format!(
                "Project '{}' year must be four digits, got '{}'",
                self.id, self.year
            )));
        }
        if self.gallery_images.is_empty() {
            return Err(CoreError::Validation(format!(
                "Project '{}' must have at least one gallery image",
                self.id
            )));
        }
        Ok(())
    }
}

impl Categorized for Project {
    fn category(&self) -> &str {
        &self.category
    }
}
