use std::sync::Arc;

use catalog::present::{self, Card, ViewMode};
use catalog::{CatalogStore, Debounce, SEARCH_DEBOUNCE_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::state::create_state;
use crate::shared::icons::icon;
use crate::shared::loader::{use_catalog, CatalogState, LoadErrorState, LoadingState};

#[component]
pub fn ProjectListPage() -> impl IntoView {
    let catalog = use_catalog();

    view! {
        <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <div class="text-center mb-10">
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white mb-3">"Our Projects"</h1>
                <p class="text-gray-600 dark:text-gray-300">
                    "A track record of delivered work across the Kingdom."
                </p>
            </div>
            {move || match catalog.get() {
                CatalogState::Loading => view! { <LoadingState /> }.into_any(),
                CatalogState::Failed(message) => {
                    view! { <LoadErrorState message=message /> }.into_any()
                }
                CatalogState::Ready(store) => view! { <ProjectList store=store /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProjectList(store: Arc<CatalogStore>) -> impl IntoView {
    let state = create_state();

    // Raw input value, updated on every keystroke; the applied filter only
    // follows it after the debounce window closes.
    let (search_input, set_search_input) = signal(String::new());
    let debounce = StoredValue::new(Debounce::new());

    let on_search_input = move |value: String| {
        set_search_input.set(value.clone());
        let mut token = 0;
        debounce.update_value(|d| token = d.arm());
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // Trailing edge: a newer keystroke supersedes this timer
            if debounce.with_value(|d| d.is_current(token)) {
                state.update(|s| s.filters.search = value);
            }
        });
    };

    let total = store.len();
    let categories: Vec<String> = store
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect();

    let filter_store = store.clone();
    let filtered = Memo::new(move |_| state.get().filters.apply(filter_store.all()));

    let count_line = move || {
        present::results_count(
            filtered.get().len(),
            total,
            state.get().filters.is_active(),
        )
    };

    let view_button_class = move |mode: ViewMode| {
        if state.get().view == mode {
            "p-2 rounded-lg bg-accent-500 text-white transition-all hover:bg-accent-600"
        } else {
            "p-2 rounded-lg bg-gray-200 dark:bg-gray-700 text-gray-600 dark:text-gray-400 transition-all hover:bg-gray-300 dark:hover:bg-gray-600"
        }
    };

    view! {
        <div class="flex flex-col md:flex-row gap-4 items-stretch md:items-center justify-between mb-8">
            <div class="relative flex-1 max-w-md">
                <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400">
                    {icon("search")}
                </span>
                <input
                    type="text"
                    placeholder="Search projects..."
                    class="w-full pl-10 pr-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-900 text-gray-900 dark:text-white focus:border-accent-500 outline-none"
                    prop:value=move || search_input.get()
                    on:input=move |ev| on_search_input(event_target_value(&ev))
                />
            </div>

            <select
                class="px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-900 text-gray-900 dark:text-white"
                on:change=move |ev| {
                    state.update(|s| s.filters.category = event_target_value(&ev));
                }
            >
                <option value="">"All categories"</option>
                {categories
                    .into_iter()
                    .map(|category| {
                        view! { <option value=category.clone()>{category.clone()}</option> }
                    })
                    .collect_view()}
            </select>

            <div class="flex gap-2">
                <button
                    class=move || view_button_class(ViewMode::Grid)
                    aria-label="Grid view"
                    on:click=move |_| state.update(|s| s.view = ViewMode::Grid)
                >
                    {icon("grid")}
                </button>
                <button
                    class=move || view_button_class(ViewMode::List)
                    aria-label="List view"
                    on:click=move |_| state.update(|s| s.view = ViewMode::List)
                >
                    {icon("list")}
                </button>
            </div>
        </div>

        <p class="text-sm text-gray-500 dark:text-gray-400 mb-6">{count_line}</p>

        {move || {
            let records = filtered.get();
            if records.is_empty() {
                // Valid empty view, distinct from loading and error states
                return view! {
                    <div class="py-24 text-center">
                        <p class="text-xl font-medium text-gray-900 dark:text-white">"No projects found"</p>
                        <p class="text-gray-500 dark:text-gray-400 mt-2">
                            "Try a different search term or category."
                        </p>
                    </div>
                }
                .into_any();
            }
            let mode = state.get().view;
            let cards = present::cards(&records, mode);
            let grid_class = match mode {
                ViewMode::Grid => "grid md:grid-cols-2 lg:grid-cols-3 gap-8 transition-all duration-500",
                ViewMode::List => "grid md:grid-cols-1 gap-8 transition-all duration-500",
            };
            view! {
                <div class=grid_class>
                    {cards
                        .into_iter()
                        .map(|card| match card.meta {
                            Some(_) => view! { <ListCard card=card /> }.into_any(),
                            None => view! { <GridCard card=card /> }.into_any(),
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }}
    }
}

#[component]
pub fn GridCard(card: Card) -> impl IntoView {
    view! {
        <div class="project-card bg-white dark:bg-gray-900 rounded-2xl overflow-hidden shadow-lg hover:shadow-xl transition-all duration-300">
            <a href=card.href.clone() class="group block">
                <img
                    class="w-full aspect-[4/3] object-cover transition-transform duration-500 group-hover:scale-105"
                    src=card.image.clone()
                    alt=card.title.clone()
                />
                <div class="p-6">
                    <h3 class="text-xl font-bold text-gray-900 dark:text-white mb-2">{card.title}</h3>
                    <p class="text-gray-600 dark:text-gray-400 mb-3">{card.category}</p>
                    <p class="text-gray-600 dark:text-gray-300 text-sm line-clamp-3">{card.description}</p>
                    <div class="mt-4 flex items-center justify-between text-sm text-gray-500 dark:text-gray-400">
                        <span>{card.location}</span>
                        <span>{card.year}</span>
                    </div>
                </div>
            </a>
        </div>
    }
}

#[component]
fn ListCard(card: Card) -> impl IntoView {
    let meta = card.meta.clone().unwrap_or_else(|| catalog::present::CardMeta {
        client: catalog::present::PLACEHOLDER.to_string(),
        area: catalog::present::PLACEHOLDER.to_string(),
    });

    view! {
        <div class="project-card bg-white dark:bg-gray-900 rounded-2xl shadow-lg hover:shadow-xl transition-all duration-300">
            <a href=card.href.clone() class="block p-6">
                <div class="flex flex-col md:flex-row gap-6">
                    <div class="md:w-1/3">
                        <img
                            class="w-full aspect-[4/3] object-cover rounded-xl"
                            src=card.image.clone()
                            alt=card.title.clone()
                        />
                    </div>
                    <div class="md:w-2/3 space-y-4">
                        <div>
                            <h3 class="text-2xl font-bold text-gray-900 dark:text-white mb-2">{card.title}</h3>
                            <p class="text-accent-600 dark:text-accent-400 font-medium">{card.category}</p>
                        </div>
                        <p class="text-gray-600 dark:text-gray-300 leading-relaxed">{card.description}</p>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-sm">
                            <div>
                                <span class="text-gray-500 dark:text-gray-400">"Location:"</span>
                                <p class="font-medium text-gray-900 dark:text-white">{card.location}</p>
                            </div>
                            <div>
                                <span class="text-gray-500 dark:text-gray-400">"Client:"</span>
                                <p class="font-medium text-gray-900 dark:text-white">{meta.client}</p>
                            </div>
                            <div>
                                <span class="text-gray-500 dark:text-gray-400">"Year:"</span>
                                <p class="font-medium text-gray-900 dark:text-white">{card.year}</p>
                            </div>
                            <div>
                                <span class="text-gray-500 dark:text-gray-400">"Area:"</span>
                                <p class="font-medium text-gray-900 dark:text-white">{meta.area}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </a>
        </div>
    }
}
