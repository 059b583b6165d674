use crate::api::Collection;
use crate::services::docs_service::get_collections;
use leptos::either::EitherOf3;
use leptos::prelude::*;
use leptos_router::components::A;

pub fn collection_href(slug: &str) -> String {
    format!("/collections/{}", urlencoding::encode(slug))
}

pub fn article_href(slug: &str) -> String {
    format!("/articles/{}", urlencoding::encode(slug))
}

#[component]
pub fn CollectionList() -> impl IntoView {
    let collections = Resource::new(|| (), |_| get_collections());

    view! {
        <div class="w-full mt-6">
            <Suspense fallback=move || {
                view! { <div class="text-center py-4">"Loading collections..."</div> }
            }>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {move || {
                        collections
                            .get()
                            .map(|result| match result {
                                Ok(collections) if collections.is_empty() => {
                                    EitherOf3::A(
                                        view! {
                                            <p class="text-gray-600 dark:text-gray-400">
                                                "No collections have been published yet."
                                            </p>
                                        },
                                    )
                                }
                                Ok(collections) => {
                                    EitherOf3::B(
                                        view! {
                                            <For
                                                each=move || collections.clone()
                                                key=|collection| collection.id.clone()
                                                children=move |collection| {
                                                    view! { <CollectionCard collection /> }
                                                }
                                            />
                                        },
                                    )
                                }
                                Err(e) => {
                                    EitherOf3::C(
                                        view! {
                                            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4 border border-gray-200 dark:border-gray-700">
                                                <h3 class="font-semibold text-lg">"Error"</h3>
                                                <p class="text-gray-600 dark:text-gray-400 text-sm">
                                                    {e.to_string()}
                                                </p>
                                            </div>
                                        },
                                    )
                                }
                            })
                    }}
                </div>
            </Suspense>
        </div>
    }
}

#[component]
fn CollectionCard(collection: Collection) -> impl IntoView {
    let href = collection_href(&collection.slug);

    view! {
        <A href=href>
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4 border border-gray-200 dark:border-gray-700 hover:shadow-md transition-shadow duration-200 cursor-pointer block">
                <h3 class="font-semibold text-lg text-gray-900 dark:text-gray-100">
                    {collection.name}
                </h3>
                {collection
                    .description
                    .map(|description| {
                        view! {
                            <p class="text-gray-600 dark:text-gray-400 text-sm">{description}</p>
                        }
                    })}
            </div>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::{article_href, collection_href};

    #[test]
    fn hrefs_are_percent_encoded() {
        assert_eq!(collection_href("billing"), "/collections/billing");
        assert_eq!(article_href("reset password"), "/articles/reset%20password");
        assert_eq!(article_href("a/b"), "/articles/a%2Fb");
    }
}
