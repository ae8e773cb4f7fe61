use std::sync::Arc;

use catalog::present::{self, ViewMode};
use catalog::related::related;
use catalog::{CatalogStore, ProjectRecord};
use leptos::prelude::*;

use super::ImageCarousel;
use crate::catalog_ui::list::GridCard;
use crate::routes::navigate;
use crate::shared::loader::{use_catalog, CatalogState, LoadErrorState, LoadingState};

fn set_page_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{title} - RASEEL Innovation Company"));
    }
}

/// A missing or unknown slug is a navigation error; the only recovery is
/// the listing page.
fn redirect_to_listing(reason: &str) -> AnyView {
    log::warn!("{reason}, redirecting to the projects page");
    navigate("/projects");
    view! {
        <div class="py-24 text-center text-gray-500 dark:text-gray-400">
            <p>"Project not found. Taking you back to all projects..."</p>
        </div>
    }
    .into_any()
}

#[component]
pub fn ProjectDetailsPage(slug: Option<String>) -> impl IntoView {
    let catalog = use_catalog();

    view! {
        <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12">
            {move || {
                let Some(slug) = slug.clone() else {
                    return redirect_to_listing("no slug in query string");
                };
                match catalog.get() {
                    CatalogState::Loading => view! { <LoadingState /> }.into_any(),
                    CatalogState::Failed(message) => {
                        view! { <LoadErrorState message=message /> }.into_any()
                    }
                    CatalogState::Ready(store) => match store.get_by_slug(&slug) {
                        None => redirect_to_listing(&format!("unknown project slug `{slug}`")),
                        Some(record) => {
                            let record = record.clone();
                            view! { <ProjectDetails store=store.clone() record=record /> }
                                .into_any()
                        }
                    },
                }
            }}
        </div>
    }
}

fn bullet_list(items: &[String]) -> AnyView {
    items
        .iter()
        .map(|item| {
            view! {
                <li class="flex items-center text-gray-600 dark:text-gray-300">
                    <span class="w-2 h-2 bg-accent-500 rounded-full mr-3"></span>
                    {item.clone()}
                </li>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
fn ProjectDetails(store: Arc<CatalogStore>, record: ProjectRecord) -> impl IntoView {
    let detail = present::detail(&record);
    set_page_title(&detail.title);

    let scope_items = bullet_list(&detail.scope);

    let highlights_section = (!detail.highlights.is_empty()).then(|| {
        let items = bullet_list(&detail.highlights);
        view! {
            <section>
                <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-4">"Highlights"</h2>
                <ul class="grid sm:grid-cols-2 gap-2">{items}</ul>
            </section>
        }
    });

    let meta_rows = detail
        .meta
        .iter()
        .map(|(label, value)| {
            view! {
                <div class="flex justify-between items-center py-2 border-b border-gray-200 dark:border-gray-700 last:border-b-0">
                    <dt class="font-medium text-gray-700 dark:text-gray-300">{*label}</dt>
                    <dd class="text-gray-900 dark:text-white">{value.clone()}</dd>
                </div>
            }
        })
        .collect_view();

    let related_cards = present::cards(&related(&store, &record), ViewMode::Grid);
    let related_section = (!related_cards.is_empty()).then(|| {
        view! {
            <section class="mt-16">
                <div class="text-center mb-10">
                    <h2 class="text-3xl font-bold text-gray-900 dark:text-white mb-3">"Related Projects"</h2>
                    <p class="text-gray-600 dark:text-gray-300">
                        "Explore more of our work in similar categories"
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    {related_cards
                        .into_iter()
                        .map(|card| view! { <GridCard card=card /> })
                        .collect_view()}
                </div>
            </section>
        }
    });

    view! {
        <a
            href="/projects"
            class="inline-block mb-8 text-accent-600 dark:text-accent-400 hover:underline"
        >
            "← Back to projects"
        </a>

        <ImageCarousel images=detail.images.clone() />

        <div class="grid lg:grid-cols-3 gap-12 mt-10">
            <div class="lg:col-span-2 space-y-10">
                <div>
                    <h1 class="text-4xl font-bold text-gray-900 dark:text-white mb-2">
                        {detail.title.clone()}
                    </h1>
                    <p class="text-accent-600 dark:text-accent-400 font-medium">
                        {detail.category.clone()}
                    </p>
                </div>

                <section>
                    <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-4">"Overview"</h2>
                    <p class="text-gray-600 dark:text-gray-300 leading-relaxed">
                        {detail.overview.clone()}
                    </p>
                </section>

                <section>
                    <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-4">"Scope of Work"</h2>
                    <ul class="space-y-2">{scope_items}</ul>
                </section>

                {highlights_section}
            </div>

            <aside>
                <div class="bg-white dark:bg-gray-900 rounded-2xl shadow-lg p-6">
                    <h2 class="text-lg font-bold text-gray-900 dark:text-white mb-4">"Project Facts"</h2>
                    <dl>{meta_rows}</dl>
                </div>
            </aside>
        </div>

        {related_section}
    }
}
