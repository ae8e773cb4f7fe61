use crate::record::ProjectRecord;
use crate::store::CatalogStore;

/// Maximum related projects shown on a detail page.
pub const RELATED_LIMIT: usize = 3;

/// Other records sharing the current record's category or its primary
/// segment, in catalog order, truncated to the first [`RELATED_LIMIT`]
/// matches. The current record itself is excluded by slug. An empty result
/// is valid; the caller renders nothing.
pub fn related(store: &CatalogStore, current: &ProjectRecord) -> Vec<ProjectRecord> {
    store
        .all()
        .iter()
        .filter(|r| r.slug != current.slug)
        .filter(|r| {
            r.category == current.category || r.primary_category() == current.primary_category()
        })
        .take(RELATED_LIMIT)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str, category: &str) -> ProjectRecord {
        ProjectRecord {
            slug: slug.into(),
            title: slug.to_uppercase(),
            category: category.into(),
            description: None,
            location: None,
            client: None,
            year: None,
            area: None,
            duration: None,
            image: None,
            images: Vec::new(),
            scope: Vec::new(),
            highlights: Vec::new(),
        }
    }

    fn store() -> CatalogStore {
        CatalogStore::new(vec![
            record("a", "Retail / Concept"),
            record("b", "Retail / Community"),
            record("c", "F&B"),
            record("d", "Retail / Concept"),
            record("e", "Retail / Concept"),
            record("f", "Retail / Concept"),
        ])
        .unwrap()
    }

    #[test]
    fn excludes_self_and_truncates_in_catalog_order() {
        let store = store();
        let current = store.get_by_slug("a").unwrap().clone();
        let hits = related(&store, &current);
        assert_eq!(
            hits.iter().map(|r| r.slug.as_str()).collect::<Vec<_>>(),
            vec!["b", "d", "e"]
        );
    }

    #[test]
    fn primary_segment_grouping_spans_secondary_labels() {
        let store = store();
        let current = store.get_by_slug("b").unwrap().clone();
        let hits = related(&store, &current);
        // "Retail / Concept" records match via the shared "Retail" segment
        assert_eq!(
            hits.iter().map(|r| r.slug.as_str()).collect::<Vec<_>>(),
            vec!["a", "d", "e"]
        );
    }

    #[test]
    fn no_matches_is_an_empty_sequence() {
        let store = store();
        let current = store.get_by_slug("c").unwrap().clone();
        assert!(related(&store, &current).is_empty());
    }
}
