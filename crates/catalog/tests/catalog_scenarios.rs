//! Scenario tests over the full 22-record catalog, driven by the same JSON
//! asset the site serves.

use catalog::{query, related::related, CatalogStore, FilterState, ProjectRecord};

fn store() -> CatalogStore {
    let records: Vec<ProjectRecord> =
        serde_json::from_str(include_str!("../../frontend/static/projects.json"))
            .expect("catalog asset parses");
    CatalogStore::new(records).expect("catalog slugs are unique")
}

#[test]
fn loads_the_full_catalog() {
    let store = store();
    assert_eq!(store.len(), 22);
    assert_eq!(store.all()[0].slug, "boulevard");
}

#[test]
fn coffee_search_returns_the_three_chemistry_records_in_order() {
    let store = store();
    let hits = query::search(store.all(), "coffee");
    assert_eq!(
        hits.iter().map(|r| r.slug.as_str()).collect::<Vec<_>>(),
        vec![
            "chemistry-coffee-northern-al-khobar",
            "chemistry-coffee-tabuk-boulevard",
            "chemistry-coffee-dammam",
        ]
    );
}

#[test]
fn search_is_case_insensitive() {
    let store = store();
    assert_eq!(
        query::search(store.all(), "COFFEE"),
        query::search(store.all(), "coffee")
    );
}

#[test]
fn fnb_category_returns_all_seven_fnb_projects() {
    let store = store();
    let hits = query::filter_by_category(store.all(), "F&B");
    assert_eq!(
        hits.iter().map(|r| r.slug.as_str()).collect::<Vec<_>>(),
        vec![
            "shanab-restaurant",
            "burger-fi",
            "fudge-and-co",
            "chemistry-coffee-northern-al-khobar",
            "chemistry-coffee-tabuk-boulevard",
            "chemistry-coffee-dammam",
            "sellfish-northern-al-khobar",
        ]
    );
    assert!(hits.iter().all(|r| r.category == "F&B"));
}

#[test]
fn compound_category_filter_groups_by_primary_segment() {
    let store = store();
    let hits = query::filter_by_category(store.all(), "Industrial / Facility");
    assert_eq!(
        hits.iter().map(|r| r.slug.as_str()).collect::<Vec<_>>(),
        vec!["ecoclean", "aramco-fence"]
    );
}

#[test]
fn slug_lookup() {
    let store = store();
    let neom = store.get_by_slug("neom").expect("neom exists");
    assert_eq!(neom.title, "NEOM");
    assert!(store.get_by_slug("nonexistent").is_none());
}

#[test]
fn unmatched_search_is_an_empty_view_not_an_error() {
    let store = store();
    let state = FilterState {
        search: "zzz-no-match".into(),
        category: String::new(),
    };
    assert!(state.is_active());
    assert!(state.apply(store.all()).is_empty());
}

#[test]
fn combine_narrows_within_a_category() {
    let store = store();
    let hits = query::combine(store.all(), "coffee", "F&B");
    assert_eq!(hits.len(), 3);
    // Either chaining order gives the same view
    assert_eq!(
        hits,
        query::search(&query::filter_by_category(store.all(), "F&B"), "coffee")
    );
}

#[test]
fn category_list_is_first_seen_and_deduplicated() {
    let store = store();
    let categories = store.categories();
    assert_eq!(categories.len(), 11);
    assert_eq!(categories[0], "Commercial / Public Space");
    assert_eq!(categories.iter().filter(|c| **c == "F&B").count(), 1);
}

#[test]
fn related_projects_for_a_coffee_shop_are_other_fnb_work() {
    let store = store();
    let current = store
        .get_by_slug("chemistry-coffee-dammam")
        .expect("record exists")
        .clone();
    let hits = related(&store, &current);
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|r| r.slug != current.slug));
    assert_eq!(
        hits.iter().map(|r| r.slug.as_str()).collect::<Vec<_>>(),
        vec!["shanab-restaurant", "burger-fi", "fudge-and-co"]
    );
}
