use serde::{Deserialize, Serialize};

/// Shown when a record carries no usable image URL.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1523413651479-597eb2da0ad6?q=80&w=1200&auto=format&fit=crop";

/// Delimiter between the primary and secondary segment of a compound
/// category label, e.g. "Retail / Concept".
pub const CATEGORY_DELIMITER: &str = " / ";

/// One catalog entry describing a completed project. Immutable after load;
/// optional display fields fall back to placeholders at render time, not
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique, URL-safe identifier. Lookup key and `?slug=` parameter.
    pub slug: String,

    pub title: String,

    /// Compound "Primary / Secondary" label; the secondary part is optional.
    pub category: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub client: Option<String>,

    #[serde(default)]
    pub year: Option<String>,

    #[serde(default)]
    pub area: Option<String>,

    #[serde(default)]
    pub duration: Option<String>,

    /// Single hero image URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Ordered carousel variants; takes precedence over `image` when
    /// non-empty.
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub scope: Vec<String>,

    #[serde(default)]
    pub highlights: Vec<String>,
}

impl ProjectRecord {
    /// The substring of `category` before the first " / " delimiter; the
    /// whole label when there is no delimiter. Used for related-item
    /// grouping.
    pub fn primary_category(&self) -> &str {
        primary_segment(&self.category)
    }

    /// Ordered image URLs for display: `images` when present, else the
    /// single `image`, else the fallback placeholder. Never empty.
    pub fn image_urls(&self) -> Vec<&str> {
        if !self.images.is_empty() {
            return self.images.iter().map(String::as_str).collect();
        }
        match self.image.as_deref() {
            Some(url) if !url.is_empty() => vec![url],
            _ => vec![FALLBACK_IMAGE],
        }
    }
}

/// Primary segment of a compound category label.
pub fn primary_segment(category: &str) -> &str {
    category
        .split_once(CATEGORY_DELIMITER)
        .map(|(primary, _)| primary)
        .unwrap_or(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str) -> ProjectRecord {
        ProjectRecord {
            slug: "x".into(),
            title: "X".into(),
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

    #[test]
    fn primary_segment_of_compound_label() {
        assert_eq!(primary_segment("Retail / Concept"), "Retail");
        assert_eq!(primary_segment("F&B"), "F&B");
        // Only the first delimiter splits
        assert_eq!(primary_segment("A / B / C"), "A");
    }

    #[test]
    fn image_urls_prefers_carousel_list() {
        let mut r = record("F&B");
        r.image = Some("single.jpg".into());
        r.images = vec!["a.jpg".into(), "b.jpg".into()];
        assert_eq!(r.image_urls(), vec!["a.jpg", "b.jpg"]);

        r.images.clear();
        assert_eq!(r.image_urls(), vec!["single.jpg"]);

        r.image = None;
        assert_eq!(r.image_urls(), vec![FALLBACK_IMAGE]);
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let r: ProjectRecord = serde_json::from_str(
            r#"{ "slug": "neom", "title": "NEOM", "category": "Urban Development" }"#,
        )
        .unwrap();
        assert_eq!(r.slug, "neom");
        assert!(r.description.is_none());
        assert!(r.scope.is_empty());
    }
}
