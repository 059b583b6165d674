pub mod models;

#[cfg(feature = "ssr")]
pub mod client;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod queries;

pub use models::{Article, ArticleSummary, Collection, CollectionDetail};

#[cfg(feature = "ssr")]
pub use client::{DocsApi, GraphQlRequest, GraphQlTransport, HttpTransport, resolve_api_url};
#[cfg(feature = "ssr")]
pub use error::ApiError;

/// GraphQL endpoint used when `NEXT_PUBLIC_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/graphql";
