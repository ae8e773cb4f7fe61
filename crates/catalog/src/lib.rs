//! Pure domain crate for the project showcase: catalog records, filtering,
//! presentation descriptors and small UI state machines. No DOM or network
//! dependency; the frontend crate wires these into Leptos components.

pub mod carousel;
pub mod debounce;
pub mod error;
pub mod present;
pub mod query;
pub mod record;
pub mod related;
pub mod store;

pub use carousel::Carousel;
pub use debounce::{Debounce, SEARCH_DEBOUNCE_MS};
pub use error::CatalogError;
pub use query::FilterState;
pub use record::ProjectRecord;
pub use store::CatalogStore;
