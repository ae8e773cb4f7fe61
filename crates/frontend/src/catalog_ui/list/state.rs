use catalog::present::ViewMode;
use catalog::FilterState;
use leptos::prelude::*;

/// Transient UI state of the catalog listing. Reset to defaults on every
/// page load; never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectListState {
    /// Applied filters (the search term here is the debounced one).
    pub filters: FilterState,

    /// grid / list
    pub view: ViewMode,
}

pub fn create_state() -> RwSignal<ProjectListState> {
    RwSignal::new(ProjectListState::default())
}
