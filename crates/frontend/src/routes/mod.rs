use crate::catalog_ui::details::ProjectDetailsPage;
use crate::catalog_ui::list::ProjectListPage;
use crate::contact::ContactPage;
use crate::layout::{Footer, Header};
use leptos::prelude::*;

/// Pages of the site, derived from `window.location` once per load. The
/// site is a handful of static pages, so full navigations replace a client
/// router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Projects,
    ProjectDetails { slug: Option<String> },
    Contact,
}

/// Exact segment match, tolerating one trailing slash. A prefix test would
/// also capture unrelated paths like `/projection`.
fn path_is(path: &str, segment: &str) -> bool {
    path == segment || path.strip_suffix('/') == Some(segment)
}

/// Reads the current route from the browser location.
pub fn current_route() -> Route {
    let Some(window) = web_sys::window() else {
        return Route::Projects;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();

    if path_is(&path, "/project") {
        let slug = web_sys::UrlSearchParams::new_with_str(&search)
            .ok()
            .and_then(|params| params.get("slug"))
            .filter(|s| !s.is_empty());
        return Route::ProjectDetails { slug };
    }
    if path_is(&path, "/contact") {
        return Route::Contact;
    }
    Route::Projects
}

/// Full-page navigation.
pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(href) {
            log::error!("navigation to {href} failed: {err:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_exact_segment_only() {
        assert!(path_is("/project", "/project"));
        assert!(path_is("/project/", "/project"));
        assert!(!path_is("/projection", "/project"));
        assert!(!path_is("/projects", "/project"));
        assert!(!path_is("/project/extra", "/project"));
    }

    #[test]
    fn contact_variants() {
        assert!(path_is("/contact/", "/contact"));
        assert!(!path_is("/contact-us", "/contact"));
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let route = current_route();

    view! {
        <Header />
        <main class="min-h-screen bg-gray-50 dark:bg-gray-800">
            {match route {
                Route::Projects => view! { <ProjectListPage /> }.into_any(),
                Route::ProjectDetails { slug } => {
                    view! { <ProjectDetailsPage slug=slug /> }.into_any()
                }
                Route::Contact => view! { <ContactPage /> }.into_any(),
            }}
        </main>
        <Footer />
    }
}
