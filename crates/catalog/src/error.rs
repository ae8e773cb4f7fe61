use thiserror::Error;

/// Failures surfaced by the catalog boundary. All of them are rendered as
/// visible UI states; none is fatal to the page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate slug `{0}` in catalog")]
    DuplicateSlug(String),

    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("timed out waiting for catalog data")]
    Timeout,
}
