use crate::api::Article;
use crate::components::Layout;
use crate::route_param::{RouteParam, SlugParams};
use crate::services::docs_service::get_article;
use leptos::either::{Either, EitherOf3};
use leptos::prelude::*;
use leptos_router::hooks::use_params;

#[component]
pub fn ArticlePage() -> impl IntoView {
    let params = use_params::<SlugParams>();
    let slug = Memo::new(move |_| params.with(RouteParam::from_params));

    // No request until the router has resolved the slug.
    let article = Resource::new(
        move || slug.get(),
        |slug| async move {
            match slug {
                RouteParam::Resolved(slug) => Some(get_article(slug).await),
                _ => None,
            }
        },
    );

    view! {
        <Layout>
            <ArticleHeading slug />
            {move || match slug.get() {
                RouteParam::Invalid(reason) => {
                    Either::Left(
                        view! {
                            <p class="text-red-500">"Invalid article address: " {reason}</p>
                        },
                    )
                }
                _ => {
                    Either::Right(
                        view! {
                            <Suspense fallback=|| {
                                view! { <p class="text-center py-8">"Loading article..."</p> }
                            }>
                                {move || {
                                    article
                                        .get()
                                        .flatten()
                                        .map(|res| match res {
                                            Ok(Some(article)) => {
                                                EitherOf3::A(view! { <ArticleBody article /> })
                                            }
                                            Ok(None) => {
                                                EitherOf3::B(
                                                    view! {
                                                        <p class="text-center py-8">"Article not found."</p>
                                                    },
                                                )
                                            }
                                            Err(e) => {
                                                EitherOf3::C(
                                                    view! {
                                                        <p class="text-red-500 text-center py-8">
                                                            "Error loading article: " {e.to_string()}
                                                        </p>
                                                    },
                                                )
                                            }
                                        })
                                }}
                            </Suspense>
                        },
                    )
                }
            }}
        </Layout>
    }
}

#[component]
pub fn ArticleHeading(#[prop(into)] slug: Signal<RouteParam>) -> impl IntoView {
    view! {
        <h1 class="text-3xl font-bold mb-6 text-gray-800 dark:text-gray-200">
            {move || slug.get().article_heading()}
        </h1>
    }
}

#[component]
fn ArticleBody(article: Article) -> impl IntoView {
    let byline = article.byline();
    let body = article.body_html();

    view! {
        <article class="bg-white dark:bg-gray-800 rounded-lg shadow p-8 border border-gray-200 dark:border-gray-700">
            <h2 class="text-2xl font-semibold mb-2">{article.title}</h2>
            {byline
                .map(|byline| {
                    view! { <p class="text-sm text-gray-500 dark:text-gray-400 mb-4">{byline}</p> }
                })}
            {match body {
                Some(html) => Either::Left(view! { <div class="prose dark:prose-invert max-w-none" inner_html=html></div> }),
                None => {
                    Either::Right(
                        view! {
                            <p class="italic text-gray-500">"This article has no content yet."</p>
                        },
                    )
                }
            }}
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::pages::render_routed;
    use leptos::reactive::owner::Owner;

    fn heading_html(slug: RouteParam) -> String {
        Owner::new().with(|| {
            let slug = Signal::stored(slug);
            view! { <ArticleHeading slug /> }.to_html()
        })
    }

    #[test]
    fn heading_shows_resolved_slug() {
        let html = heading_html(RouteParam::Resolved("foo".to_string()));
        assert!(html.contains("Article: foo"));
    }

    #[test]
    fn heading_renders_before_slug_resolves() {
        let html = heading_html(RouteParam::Pending);
        assert!(html.contains("Article"));
        assert!(!html.contains("Article:"));
    }

    #[tokio::test]
    async fn routed_page_reads_slug_from_url() {
        let html = render_routed("/articles/foo");
        assert!(html.contains("Article: foo"));
        assert!(html.contains("Loading article..."));
    }

    #[tokio::test]
    async fn routed_page_decodes_slug() {
        let html = render_routed("/articles/a%20b");
        assert!(html.contains("Article: a b"));
    }

    #[test]
    fn body_renders_markdown() {
        let article = Article {
            id: "a1".to_string(),
            collection_id: "c1".to_string(),
            title: "Foo".to_string(),
            slug: "foo".to_string(),
            html_content: None,
            markdown_content: Some("**bold** move".to_string()),
            version: Some(2),
            last_edited_by: Some("alice".to_string()),
            created_at: None,
            updated_at: None,
        };
        let html = Owner::new().with(|| view! { <ArticleBody article /> }.to_html());
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("Edited by alice"));
    }
}
