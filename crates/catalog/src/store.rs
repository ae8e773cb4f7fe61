use std::collections::HashSet;

use crate::error::CatalogError;
use crate::record::ProjectRecord;

/// Immutable, ordered project catalog. Constructed once at startup and
/// passed by handle to whoever needs it; insertion order defines the
/// default display order.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    records: Vec<ProjectRecord>,
}

impl CatalogStore {
    /// Builds the store, rejecting duplicate slugs.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(record.slug.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Full catalog in insertion order. Callers must not rely on copying.
    pub fn all(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-sensitive exact slug lookup.
    pub fn get_by_slug(&self, slug: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.slug == slug)
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}
