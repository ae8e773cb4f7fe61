//! One-shot catalog load. The catalog is a static JSON asset; the load
//! contract resolves exactly once, to either a ready store or a failure
//! state, with a bounded ceiling instead of an open-ended wait.

use std::sync::Arc;

use catalog::{CatalogError, CatalogStore, ProjectRecord};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub const CATALOG_URL: &str = "/static/projects.json";

/// Ceiling on the initial load before the error state is shown.
pub const LOAD_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone)]
pub enum CatalogState {
    Loading,
    Ready(Arc<CatalogStore>),
    Failed(String),
}

async fn fetch_catalog() -> Result<CatalogStore, CatalogError> {
    let response = gloo_net::http::Request::get(CATALOG_URL)
        .send()
        .await
        .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
    if !response.ok() {
        return Err(CatalogError::Unavailable(format!(
            "HTTP {}",
            response.status()
        )));
    }
    let records: Vec<ProjectRecord> = response
        .json()
        .await
        .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
    CatalogStore::new(records)
}

/// Starts the load and provides the shared state signal via context. The
/// signal transitions out of `Loading` exactly once: whichever of the
/// fetch and the timeout finishes first wins.
pub fn provide_catalog() {
    let state = RwSignal::new(CatalogState::Loading);
    provide_context(state);

    spawn_local(async move {
        match fetch_catalog().await {
            Ok(store) => {
                if matches!(state.get_untracked(), CatalogState::Loading) {
                    log::debug!("catalog loaded with {} projects", store.len());
                    state.set(CatalogState::Ready(Arc::new(store)));
                }
            }
            Err(err) => {
                if matches!(state.get_untracked(), CatalogState::Loading) {
                    log::error!("catalog load failed: {err}");
                    state.set(CatalogState::Failed(err.to_string()));
                }
            }
        }
    });

    spawn_local(async move {
        TimeoutFuture::new(LOAD_TIMEOUT_MS).await;
        if matches!(state.get_untracked(), CatalogState::Loading) {
            log::error!("catalog load timed out after {LOAD_TIMEOUT_MS}ms");
            state.set(CatalogState::Failed(CatalogError::Timeout.to_string()));
        }
    });
}

pub fn use_catalog() -> RwSignal<CatalogState> {
    use_context::<RwSignal<CatalogState>>()
        .expect("CatalogState not found. Call provide_catalog() in App.")
}

/// Shared loading placeholder shown while the catalog fetch is in flight.
#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="py-24 text-center text-gray-500 dark:text-gray-400">
            <p class="animate-pulse">"Loading projects..."</p>
        </div>
    }
}

/// Shared error block for a failed catalog load. Not retried
/// automatically; the user reloads the page.
#[component]
pub fn LoadErrorState(message: String) -> impl IntoView {
    view! {
        <div class="py-24 text-center">
            <p class="text-red-500 font-medium">"Failed to load project data"</p>
            <p class="text-red-400 text-sm mt-2">{message}</p>
            <p class="text-gray-500 dark:text-gray-400 text-sm mt-4">"Please refresh the page"</p>
        </div>
    }
}
