use crate::api::{Article, Collection, CollectionDetail};
use leptos::prelude::*;

#[cfg(feature = "ssr")]
use crate::api::{ApiError, DocsApi};

#[cfg(feature = "ssr")]
fn not_found_as_none<T>(result: Result<T, ApiError>) -> Result<Option<T>, ServerFnError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ApiError::NotFound { slug }) => {
            tracing::debug!(slug = %slug, "document not found");
            Ok(None)
        }
        Err(err) => Err(ServerFnError::new(err.to_string())),
    }
}

#[server]
pub async fn get_collections() -> Result<Vec<Collection>, ServerFnError> {
    let api = expect_context::<DocsApi>();

    api.fetch_collections()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn get_collection(slug: String) -> Result<Option<CollectionDetail>, ServerFnError> {
    let api = expect_context::<DocsApi>();
    not_found_as_none(api.fetch_collection(&slug).await)
}

#[server]
pub async fn get_article(slug: String) -> Result<Option<Article>, ServerFnError> {
    let api = expect_context::<DocsApi>();
    not_found_as_none(api.fetch_article(&slug).await)
}
