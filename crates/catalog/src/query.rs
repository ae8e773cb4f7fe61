//! Pure query engine over the catalog: stable linear filters, no ranking,
//! no indexing. The catalog is tens of records, so every keystroke simply
//! recomputes the whole view.

use serde::{Deserialize, Serialize};

use crate::record::{primary_segment, ProjectRecord};

/// Current search term and category selection driving the displayed
/// subset. Owned by the listing controller; reset to empty on load and
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub category: String,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.category.is_empty()
    }

    /// Derives the filtered view for this state.
    pub fn apply(&self, records: &[ProjectRecord]) -> Vec<ProjectRecord> {
        combine(records, &self.search, &self.category)
    }
}

fn matches_term(record: &ProjectRecord, term: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(term);
    contains(&record.title)
        || record.description.as_deref().is_some_and(contains)
        || contains(&record.category)
        || record.location.as_deref().is_some_and(contains)
}

fn matches_category(record: &ProjectRecord, category: &str) -> bool {
    // Exact equality implies primary-segment equality, so the segment
    // comparison covers both arms of the contract.
    primary_segment(&record.category) == primary_segment(category)
}

/// Substring search over title, description, category and location,
/// case-insensitive. Empty (or all-whitespace) term matches everything.
/// Stable: output preserves catalog order.
pub fn search(records: &[ProjectRecord], term: &str) -> Vec<ProjectRecord> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| matches_term(r, &term))
        .cloned()
        .collect()
}

/// Category filter: exact label match, or primary-segment match for
/// compound labels. Empty category matches everything.
pub fn filter_by_category(records: &[ProjectRecord], category: &str) -> Vec<ProjectRecord> {
    if category.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| matches_category(r, category))
        .cloned()
        .collect()
}

/// Logical AND of both predicates over the full input, so an empty search
/// with a set category returns all category matches and vice versa.
pub fn combine(records: &[ProjectRecord], term: &str, category: &str) -> Vec<ProjectRecord> {
    let term = term.trim().to_lowercase();
    records
        .iter()
        .filter(|r| (term.is_empty() || matches_term(r, &term)))
        .filter(|r| (category.is_empty() || matches_category(r, category)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str, title: &str, category: &str, location: &str) -> ProjectRecord {
        ProjectRecord {
            slug: slug.into(),
            title: title.into(),
            category: category.into(),
            description: Some(format!("{title} project description")),
            location: Some(location.into()),
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

    fn fixture() -> Vec<ProjectRecord> {
        vec![
            record("boulevard", "BOULEVARD", "Commercial / Public Space", "Riyadh"),
            record("aramco-fence", "ARAMCO FENCE", "Industrial / Security", "Dhahran"),
            record("ecoclean", "ECOCLEAN", "Industrial / Facility", "Jeddah"),
            record("shanab", "SHANAB RESTAURANT", "F&B", "Jeddah"),
            record("stellar", "STELLAR", "Retail / Concept", "Riyadh"),
        ]
    }

    #[test]
    fn empty_term_is_identity() {
        let c = fixture();
        assert_eq!(search(&c, ""), c);
        assert_eq!(search(&c, "   "), c);
    }

    #[test]
    fn search_is_case_insensitive_and_stable() {
        let c = fixture();
        let hits = search(&c, "JedDah");
        assert_eq!(
            hits.iter().map(|r| r.slug.as_str()).collect::<Vec<_>>(),
            vec!["ecoclean", "shanab"]
        );
    }

    #[test]
    fn empty_category_is_identity() {
        let c = fixture();
        assert_eq!(filter_by_category(&c, ""), c);
    }

    #[test]
    fn category_matches_by_primary_segment() {
        let c = fixture();
        let hits = filter_by_category(&c, "Industrial / Facility");
        assert_eq!(
            hits.iter().map(|r| r.slug.as_str()).collect::<Vec<_>>(),
            vec!["aramco-fence", "ecoclean"]
        );
        // Plain labels degenerate to exact equality
        let hits = filter_by_category(&c, "F&B");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "shanab");
    }

    #[test]
    fn combine_commutes_with_chaining_either_order() {
        let c = fixture();
        for (term, cat) in [("riyadh", "Retail / Concept"), ("", "F&B"), ("jeddah", "")] {
            let combined = combine(&c, term, cat);
            assert_eq!(combined, filter_by_category(&search(&c, term), cat));
            assert_eq!(combined, search(&filter_by_category(&c, cat), term));
        }
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let c = fixture();
        assert!(combine(&c, "zzz-no-match", "").is_empty());
    }

    #[test]
    fn filter_state_apply_and_activity() {
        let c = fixture();
        let state = FilterState::default();
        assert!(!state.is_active());
        assert_eq!(state.apply(&c), c);

        let state = FilterState {
            search: "riyadh".into(),
            category: "Retail / Concept".into(),
        };
        assert!(state.is_active());
        assert_eq!(state.apply(&c).len(), 1);
    }
}
