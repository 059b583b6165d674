use crate::components::Layout;
use leptos::prelude::*;

pub mod article;
pub mod collections;
pub use article::ArticlePage;
pub use collections::{CollectionPage, CollectionsPage};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <h1 class="text-3xl font-bold text-center mb-6 text-gray-800 dark:text-gray-200">
                "Welcome to AI-Powered Help Docs"
            </h1>
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-8 border border-gray-200 dark:border-gray-700 text-center">
                <p class="text-xl text-gray-600 dark:text-gray-400">
                    "Answers to common questions, organised by topic."
                </p>
                <a
                    href="/collections"
                    class="inline-block mt-4 text-blue-600 dark:text-blue-400 hover:underline"
                >
                    "Browse collections"
                </a>
            </div>
        </Layout>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <p class="text-center py-8">"Page not found"</p>
        </Layout>
    }
}

/// Renders the site routes for `path` the way the server would on first
/// paint. Must run inside a tokio runtime: page resources spawn fetches.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_routed(path: &str) -> String {
    use crate::api::DocsApi;
    use leptos::reactive::owner::Owner;
    use any_spawner::Executor;
    use leptos_router::components::{Route, Router, Routes};
    use leptos_router::location::RequestUrl;
    use leptos_router::path;
    use std::time::Duration;

    let _ = Executor::init_tokio();
    // Nothing listens here; fetches fail fast once the render is done.
    let api = DocsApi::new("http://127.0.0.1:9/graphql", Duration::from_secs(1))
        .expect("client builds");

    Owner::new().with(|| {
        provide_context(RequestUrl::new(path));
        provide_context(api);
        view! {
            <Router>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/collections") view=CollectionsPage />
                    <Route path=path!("/collections/:slug") view=CollectionPage />
                    <Route path=path!("/articles/:slug") view=ArticlePage />
                </Routes>
            </Router>
        }
        .to_html()
    })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn home_page_greets_reader() {
        let html = Owner::new().with(|| view! { <HomePage /> }.to_html());
        let heading = html.find("<h1").unwrap();
        let greeting = html.find("Welcome to AI-Powered Help Docs").unwrap();
        assert!(heading < greeting);
        assert!(html.contains("<header"));
    }

    #[tokio::test]
    async fn root_route_renders_home() {
        let html = render_routed("/");
        assert!(html.contains("Welcome to AI-Powered Help Docs"));
    }

    #[tokio::test]
    async fn unknown_route_falls_back() {
        let html = render_routed("/nowhere");
        assert!(html.contains("Page not found"));
    }

    #[test]
    fn not_found_page_keeps_chrome() {
        let html = Owner::new().with(|| view! { <NotFoundPage /> }.to_html());
        assert!(html.contains("Page not found"));
        assert!(html.contains(r#"href="/collections""#));
    }
}
