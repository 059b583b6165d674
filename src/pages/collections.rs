use crate::api::CollectionDetail;
use crate::components::collection_list::article_href;
use crate::components::{CollectionList, Layout};
use crate::route_param::{RouteParam, SlugParams};
use crate::services::docs_service::get_collection;
use leptos::either::{Either, EitherOf3};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params;

#[component]
pub fn CollectionsPage() -> impl IntoView {
    view! {
        <Layout>
            <h1 class="text-3xl font-bold mb-6 text-gray-800 dark:text-gray-200">"Collections"</h1>
            <CollectionList />
        </Layout>
    }
}

#[component]
pub fn CollectionPage() -> impl IntoView {
    let params = use_params::<SlugParams>();
    let slug = Memo::new(move |_| params.with(RouteParam::from_params));

    view! { <CollectionView slug /> }
}

#[component]
fn CollectionView(#[prop(into)] slug: Signal<RouteParam>) -> impl IntoView {
    let detail = Resource::new(
        move || slug.get(),
        |slug| async move {
            match slug {
                RouteParam::Resolved(slug) => Some(get_collection(slug).await),
                _ => None,
            }
        },
    );

    view! {
        <Layout>
            {move || match slug.get() {
                RouteParam::Invalid(reason) => {
                    Either::Left(
                        view! {
                            <h1 class="text-3xl font-bold mb-6 text-gray-800 dark:text-gray-200">
                                "Collection"
                            </h1>
                            <p class="text-red-500">"Invalid collection address: " {reason}</p>
                        },
                    )
                }
                _ => {
                    Either::Right(
                        view! {
                            <Suspense fallback=|| {
                                view! { <p class="text-center py-8">"Loading collection..."</p> }
                            }>
                                {move || {
                                    detail
                                        .get()
                                        .flatten()
                                        .map(|res| match res {
                                            Ok(Some(detail)) => {
                                                EitherOf3::A(view! { <CollectionDetailView detail /> })
                                            }
                                            Ok(None) => {
                                                EitherOf3::B(
                                                    view! {
                                                        <p class="text-center py-8">"Collection not found."</p>
                                                    },
                                                )
                                            }
                                            Err(e) => {
                                                EitherOf3::C(
                                                    view! {
                                                        <p class="text-red-500 text-center py-8">
                                                            "Error loading collection: " {e.to_string()}
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
fn CollectionDetailView(detail: CollectionDetail) -> impl IntoView {
    let CollectionDetail {
        collection,
        articles,
    } = detail;
    let empty = articles.is_empty();

    view! {
        <h1 class="text-3xl font-bold mb-2 text-gray-800 dark:text-gray-200">{collection.name}</h1>
        {collection
            .description
            .map(|description| {
                view! { <p class="text-gray-600 dark:text-gray-400 mb-6">{description}</p> }
            })}
        {if empty {
            Either::Left(
                view! { <p class="italic text-gray-500">"No articles in this collection yet."</p> },
            )
        } else {
            Either::Right(
                view! {
                    <ul class="space-y-2">
                        {articles
                            .into_iter()
                            .map(|article| {
                                view! {
                                    <li>
                                        <A href=article_href(&article.slug)>
                                            <span class="text-blue-600 dark:text-blue-400 hover:underline">
                                                {article.title}
                                            </span>
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                },
            )
        }}
    }
}
