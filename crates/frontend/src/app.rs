use crate::routes::AppRoutes;
use crate::shared::loader::provide_catalog;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Kick off the one-shot catalog load and expose its state via context.
    provide_catalog();

    view! {
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}
