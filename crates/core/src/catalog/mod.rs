//! Read-only record catalogs and the queries the site runs over them.
//!
//! A [`Catalog`] is an ordered, immutable sequence of records. Insertion
//! order is the canonical display order and every query preserves it.
//! Queries never fail: an unknown id is `None`, an unmatched category is
//! an empty list.

pub mod project;
pub mod service;
pub mod store;

use std::collections::HashSet;

use serde::de::DeserializeOwned;

use crate::error::CoreError;

pub use project::{Project, Testimonial, CATEGORY_ALL, PROJECT_CATEGORIES};
pub use service::{ProcessStep, Service};
pub use store::SiteCatalogs;

/// Number of related records shown beside a detail view.
pub const RELATED_LIMIT: usize = 3;

/// Maximum length of a record id.
pub const MAX_ID_LEN: usize = 120;

/// A record that can live in a [`Catalog`].
pub trait CatalogEntry {
    /// Entity name used in error messages (`"Project"`, `"Service"`).
    const ENTITY: &'static str;

    /// Stable, URL-safe identifier, unique within the catalog.
    fn id(&self) -> &str;

    /// Record-specific checks run once when the catalog is built.
    fn validate_entry(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// A record tagged with a category label.
pub trait Categorized: CatalogEntry {
    fn category(&self) -> &str;
}

/// Ordered, immutable sequence of records of one type.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    records: Vec<T>,
}

impl<T: CatalogEntry> Catalog<T> {
    /// Build a catalog, checking ids and per-record invariants.
    pub fn new(records: Vec<T>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            validate_id(T::ENTITY, record.id())?;
            if !seen.insert(record.id()) {
                return Err(CoreError::Validation(format!(
                    "Duplicate {} id '{}'",
                    T::ENTITY,
                    record.id()
                )));
            }
            record.validate_entry()?;
        }
        Ok(Self { records })
    }

    /// Parse a JSON array of records and build a catalog from it.
    pub fn from_json(json: &str) -> Result<Self, CoreError>
    where
        T: DeserializeOwned,
    {
        let records: Vec<T> = serde_json::from_str(json).map_err(|e| {
            CoreError::Validation(format!("Malformed {} catalog: {e}", T::ENTITY))
        })?;
        Self::new(records)
    }

    /// All records in display order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by exact id (case-sensitive, untrimmed).
    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Look up a record by id, reporting a miss as [`CoreError::NotFound`].
    ///
    /// For callers that want `?` propagation; [`Catalog::find`] is the
    /// plain query.
    pub fn get(&self, id: &str) -> Result<&T, CoreError> {
        self.find(id).ok_or_else(|| CoreError::NotFound {
            entity: T::ENTITY,
            id: id.to_string(),
        })
    }

    /// The records after `current` in catalog order, wrapping around to
    /// the start, up to `limit`.
    ///
    /// `current` is never included. If `current` is not in the catalog the
    /// walk starts from the first record.
    pub fn following(&self, current: &T, limit: usize) -> Vec<&T> {
        let total = self.records.len();
        let start = self
            .records
            .iter()
            .position(|r| r.id() == current.id())
            .map_or(0, |idx| idx + 1);

        (0..total)
            .map(|offset| &self.records[(start + offset) % total])
            .filter(|r| r.id() != current.id())
            .take(limit)
            .collect()
    }
}

impl<T: Categorized> Catalog<T> {
    /// Records whose category equals `category` exactly, in catalog order.
    ///
    /// [`CATEGORY_ALL`] returns every record.
    pub fn filter_by_category(&self, category: &str) -> Vec<&T> {
        if category == CATEGORY_ALL {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|r| r.category() == category)
            .collect()
    }

    /// Up to `limit` records to show beside `current`.
    ///
    /// Same-category records come first, in catalog order. If there are
    /// fewer than `limit` of them, the rest is padded with the remaining
    /// records in catalog order. `current` is never included and no record
    /// appears twice.
    pub fn related(&self, current: &T, limit: usize) -> Vec<&T> {
        let mut selected: Vec<&T> = self
            .records
            .iter()
            .filter(|r| r.id() != current.id() && r.category() == current.category())
            .take(limit)
            .collect();

        if selected.len() < limit {
            let padding: Vec<&T> = self
                .records
                .iter()
                .filter(|r| r.id() != current.id() && !selected.iter().any(|s| s.id() == r.id()))
                .take(limit - selected.len())
                .collect();
            selected.extend(padding);
        }

        selected
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Validate a record id: non-empty, bounded, lowercase ASCII letters,
/// digits and hyphens only.
pub fn validate_id(entity: &str, id: &str) -> Result<(), CoreError> {
    if id.is_empty() {
        return Err(CoreError::Validation(format!(
            "{entity} id must not be empty"
        )));
    }
    if id.len() > MAX_ID_LEN {
        return Err(CoreError::Validation(format!(
            "{entity} id too long: {} chars (max {MAX_ID_LEN})",
            id.len()
        )));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(format!(
            "{entity} id '{id}' is not URL-safe (allowed: a-z, 0-9, '-')"
        )));
    }
    Ok(())
}
