use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white dark:bg-gray-900 border-t border-gray-200 dark:border-gray-700">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-8 flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "© 2024 RASEEL Innovation Company. All rights reserved."
                </p>
                <div class="flex gap-6 text-sm">
                    <a href="/projects" class="text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white">
                        "Projects"
                    </a>
                    <a href="/contact" class="text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white">
                        "Contact"
                    </a>
                </div>
            </div>
        </footer>
    }
}
