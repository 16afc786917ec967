//! Shared query parameter types for API and page handlers.

use danawood_core::catalog::CATEGORY_ALL;
use serde::Deserialize;

/// Category filter parameter (`?category=`).
///
/// Missing or blank means [`CATEGORY_ALL`]. Any other value is matched
/// exactly against project categories.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

impl CategoryParams {
    pub fn category(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => CATEGORY_ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_category_means_all() {
        assert_eq!(CategoryParams::default().category(), CATEGORY_ALL);
    }

    #[test]
    fn blank_category_means_all() {
        let params = CategoryParams {
            category: Some(String::new()),
        };
        assert_eq!(params.category(), CATEGORY_ALL);
    }

    #[test]
    fn category_passed_through_verbatim() {
        let params = CategoryParams {
            category: Some("Media Units".to_string()),
        };
        assert_eq!(params.category(), "Media Units");
    }
}
