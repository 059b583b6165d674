use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::api::error::ApiError;
use crate::api::models::{Article, ArticleSummary, Collection, CollectionDetail};
use crate::api::queries;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub operation_name: &'static str,
    pub query: &'static str,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn new(operation_name: &'static str, query: &'static str) -> Self {
        Self {
            operation_name,
            query,
            variables: json!({}),
        }
    }

    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = variables;
        self
    }
}

/// Sends one GraphQL request and hands back the raw response body.
#[async_trait]
pub trait GraphQlTransport: Send + Sync + 'static {
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, ApiError>;
}

pub struct HttpTransport {
    http: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl GraphQlTransport for HttpTransport {
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, ApiError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        // Body read failures are transport errors; only undecodable bytes are malformed.
        let body = response.bytes().await?;
        Ok(serde_json::from_slice::<Value>(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CollectionsData {
    collections: Vec<Collection>,
}

#[derive(Debug, Deserialize)]
struct CollectionData {
    collection: Option<CollectionNode>,
}

#[derive(Debug, Deserialize)]
struct CollectionNode {
    #[serde(flatten)]
    collection: Collection,
    #[serde(default)]
    articles: Vec<ArticleSummary>,
}

#[derive(Debug, Deserialize)]
struct ArticleData {
    article: Option<Article>,
}

/// Falls back to the local backend when the configured value is missing or blank.
pub fn resolve_api_url(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(crate::api::DEFAULT_API_URL)
        .to_string()
}

/// Typed access to the docs GraphQL backend.
///
/// Cheap to clone; every clone shares the same transport and its connection pool.
#[derive(Clone)]
pub struct DocsApi {
    endpoint: Arc<str>,
    transport: Arc<dyn GraphQlTransport>,
}

impl std::fmt::Debug for DocsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocsApi")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl DocsApi {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let endpoint = endpoint.into();
        let transport = HttpTransport::new(endpoint.clone(), timeout)?;
        Ok(Self::with_transport(endpoint, transport))
    }

    pub fn with_transport(endpoint: impl Into<String>, transport: impl GraphQlTransport) -> Self {
        Self {
            endpoint: Arc::from(endpoint.into()),
            transport: Arc::new(transport),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn fetch_collections(&self) -> Result<Vec<Collection>, ApiError> {
        let request = GraphQlRequest::new("Collections", queries::COLLECTIONS);
        let data: CollectionsData = self.query(request).await?;
        Ok(data.collections)
    }

    pub async fn fetch_collection(&self, slug: &str) -> Result<CollectionDetail, ApiError> {
        let slug = normalize_slug(slug)?;
        let request = GraphQlRequest::new("Collection", queries::COLLECTION)
            .with_variables(json!({ "slug": slug }));
        let data: CollectionData = self.query(request).await?;

        data.collection
            .map(|node| CollectionDetail {
                collection: node.collection,
                articles: node.articles,
            })
            .ok_or_else(|| ApiError::NotFound {
                slug: slug.to_string(),
            })
    }

    pub async fn fetch_article(&self, slug: &str) -> Result<Article, ApiError> {
        let slug = normalize_slug(slug)?;
        let request =
            GraphQlRequest::new("Article", queries::ARTICLE).with_variables(json!({ "slug": slug }));
        let data: ArticleData = self.query(request).await?;

        data.article.ok_or_else(|| ApiError::NotFound {
            slug: slug.to_string(),
        })
    }

    async fn query<T: DeserializeOwned>(&self, request: GraphQlRequest) -> Result<T, ApiError> {
        let start = Instant::now();
        debug!(
            event = "graphql.request.begin",
            operation = request.operation_name,
            endpoint = %self.endpoint,
            "sending GraphQL request"
        );

        let result = self
            .transport
            .execute(&request)
            .await
            .and_then(decode_response::<T>);

        match &result {
            Ok(_) => info!(
                event = "graphql.request.end",
                result = "ok",
                operation = request.operation_name,
                duration_ms = start.elapsed().as_millis(),
                "GraphQL request completed"
            ),
            Err(err) => warn!(
                event = "graphql.request.end",
                result = "fail",
                operation = request.operation_name,
                duration_ms = start.elapsed().as_millis(),
                error = %err,
                "GraphQL request failed"
            ),
        }

        result
    }
}

fn normalize_slug(slug: &str) -> Result<&str, ApiError> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Err(ApiError::InvalidSlug);
    }
    Ok(slug)
}

fn decode_response<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    let envelope: GraphQlResponse = serde_json::from_value(body)?;

    if !envelope.errors.is_empty() {
        return Err(ApiError::GraphQl(
            envelope.errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    match envelope.data {
        Some(Value::Null) | None => Err(ApiError::Malformed(
            "response carried no data".to_string(),
        )),
        Some(data) => Ok(serde_json::from_value(data)?),
    }
}
