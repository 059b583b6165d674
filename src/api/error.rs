use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("docs API responded with HTTP {0}")]
    Status(u16),
    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("no document found for slug {slug:?}")]
    NotFound { slug: String },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("slug must not be empty")]
    InvalidSlug,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}
