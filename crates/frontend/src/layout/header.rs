use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 2] = [("Projects", "/projects"), ("Contact", "/contact")];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="sticky top-0 z-40 bg-white/90 dark:bg-gray-900/90 backdrop-blur border-b border-gray-200 dark:border-gray-700">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="/projects" class="text-xl font-bold tracking-wide text-gray-900 dark:text-white">
                        "RASEEL"
                        <span class="text-accent-500 dark:text-accent-400">" INNOVATION"</span>
                    </a>

                    <nav class="hidden md:flex items-center gap-6">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(label, href)| {
                                view! {
                                    <a
                                        href=href
                                        class="text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white transition-colors"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </nav>

                    <div class="flex md:hidden items-center gap-2">
                        <ThemeToggle />
                        <button
                            class="p-2 rounded-lg text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700"
                            aria-label="Toggle navigation menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="md:hidden border-t border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-900">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=href
                                    class="block px-6 py-3 text-gray-600 dark:text-gray-300 hover:bg-gray-50 dark:hover:bg-gray-800"
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}
