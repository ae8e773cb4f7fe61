//! Presentation adapter: maps filtered records plus a view mode into
//! renderable descriptors. Purely presentational; never alters filtering
//! results.

use crate::record::ProjectRecord;

/// Shown for absent display strings.
pub const PLACEHOLDER: &str = "—";

/// Base path of the detail page; a card's link target is this plus the
/// percent-encoded slug.
pub const PROJECT_PAGE: &str = "/project";

/// Mutually exclusive listing layouts. Variants of the same input record;
/// switching never changes which records are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Extra metadata shown only on expanded list rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMeta {
    pub client: String,
    pub area: String,
}

/// One renderable listing card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub location: String,
    pub year: String,
    pub href: String,
    /// Present in `ViewMode::List` only.
    pub meta: Option<CardMeta>,
}

/// Detail-page descriptor with every fallback already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    pub title: String,
    pub category: String,
    pub overview: String,
    pub scope: Vec<String>,
    pub highlights: Vec<String>,
    /// Carousel input; never empty.
    pub images: Vec<String>,
    /// Labelled meta rows in display order.
    pub meta: Vec<(&'static str, String)>,
}

/// Deterministic link target for a record's detail page.
pub fn project_href(slug: &str) -> String {
    format!("{}?slug={}", PROJECT_PAGE, urlencoding::encode(slug))
}

fn display(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn card(record: &ProjectRecord, mode: ViewMode) -> Card {
    Card {
        slug: record.slug.clone(),
        title: record.title.clone(),
        category: record.category.clone(),
        description: display(&record.description),
        image: record.image_urls()[0].to_string(),
        location: display(&record.location),
        year: display(&record.year),
        href: project_href(&record.slug),
        meta: match mode {
            ViewMode::Grid => None,
            ViewMode::List => Some(CardMeta {
                client: display(&record.client),
                area: display(&record.area),
            }),
        },
    }
}

/// Ordered card descriptors for the current view.
pub fn cards(records: &[ProjectRecord], mode: ViewMode) -> Vec<Card> {
    records.iter().map(|r| card(r, mode)).collect()
}

/// Detail descriptor with the default prose, scope and meta rows the site
/// shows when a record leaves them out.
pub fn detail(record: &ProjectRecord) -> ProjectDetail {
    let overview = match record.description.as_deref() {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => format!(
            "{} was delivered to high quality standards, with a focus on \
             schedule, cost and safety across every stage of the project.",
            record.title
        ),
    };

    let scope = if record.scope.is_empty() {
        vec![
            "Civil and structural works".to_string(),
            "Finishing and fit-out".to_string(),
            "MEP and safety systems".to_string(),
            "Project management".to_string(),
        ]
    } else {
        record.scope.clone()
    };

    let location = match record.location.as_deref() {
        Some(l) if !l.is_empty() => l.to_string(),
        _ => "Saudi Arabia".to_string(),
    };
    let discipline = if record.category.is_empty() {
        "General Contracting".to_string()
    } else {
        record.category.clone()
    };

    ProjectDetail {
        title: record.title.clone(),
        category: record.category.clone(),
        overview,
        scope,
        highlights: record.highlights.clone(),
        images: record.image_urls().iter().map(|s| s.to_string()).collect(),
        meta: vec![
            ("Location", location),
            ("Client", display(&record.client)),
            ("Year", display(&record.year)),
            ("Discipline", discipline),
            ("Area", display(&record.area)),
            ("Duration", display(&record.duration)),
        ],
    }
}

/// The "Showing X of Y" line above the listing.
pub fn results_count(shown: usize, total: usize, filtered: bool) -> String {
    if filtered {
        format!("Showing {shown} of {total} projects")
    } else {
        format!("Showing all {total} projects")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FALLBACK_IMAGE;

    fn record() -> ProjectRecord {
        ProjectRecord {
            slug: "fgs-jubail-city".into(),
            title: "FGS – JUBAIL CITY".into(),
            category: "Government / City".into(),
            description: Some("Government facility development.".into()),
            location: Some("Jubail, Saudi Arabia".into()),
            client: None,
            year: Some("2023".into()),
            area: None,
            duration: Some("20 months".into()),
            image: Some("hero.jpg".into()),
            images: Vec::new(),
            scope: vec!["Government Construction".into()],
            highlights: vec!["Modern government design".into()],
        }
    }

    #[test]
    fn href_percent_encodes_the_slug() {
        assert_eq!(project_href("fudge-and-co"), "/project?slug=fudge-and-co");
        assert_eq!(project_href("a b/c"), "/project?slug=a%20b%2Fc");
    }

    #[test]
    fn grid_and_list_cards_differ_only_in_meta() {
        let records = vec![record()];
        let grid = cards(&records, ViewMode::Grid);
        let list = cards(&records, ViewMode::List);
        assert_eq!(grid.len(), list.len());
        assert!(grid[0].meta.is_none());
        let meta = list[0].meta.as_ref().unwrap();
        assert_eq!(meta.client, PLACEHOLDER);
        assert_eq!(meta.area, PLACEHOLDER);
        assert_eq!(grid[0].title, list[0].title);
        assert_eq!(grid[0].href, list[0].href);
    }

    #[test]
    fn detail_applies_fallbacks() {
        let mut r = record();
        r.description = None;
        r.scope.clear();
        r.image = None;
        let d = detail(&r);
        assert!(d.overview.starts_with("FGS – JUBAIL CITY was delivered"));
        assert_eq!(d.scope.len(), 4);
        assert_eq!(d.images, vec![FALLBACK_IMAGE.to_string()]);
        assert_eq!(d.meta[1], ("Client", PLACEHOLDER.to_string()));
        assert_eq!(d.meta[3], ("Discipline", "Government / City".to_string()));
    }

    #[test]
    fn results_count_strings() {
        assert_eq!(results_count(3, 22, true), "Showing 3 of 22 projects");
        assert_eq!(results_count(22, 22, false), "Showing all 22 projects");
    }
}
