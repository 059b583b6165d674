use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use clap::Parser;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{DocsApi, resolve_api_url};
use crate::app::{App, shell};

#[derive(Debug, Parser)]
#[command(name = "helpdocs", version, about = "Serve the help docs site")]
pub struct ServerConfig {
    /// GraphQL endpoint of the docs backend
    #[arg(long = "api-url", env = "NEXT_PUBLIC_API_URL")]
    pub api_url: Option<String>,
    /// Timeout for each request to the docs backend, in seconds
    #[arg(
        long,
        env = "API_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub api_timeout_secs: u64,
}

impl ServerConfig {
    pub fn endpoint(&self) -> String {
        resolve_api_url(self.api_url.as_deref())
    }

    pub fn docs_api(&self) -> Result<DocsApi> {
        let endpoint = self.endpoint();
        DocsApi::new(endpoint.clone(), Duration::from_secs(self.api_timeout_secs))
            .with_context(|| format!("failed to build docs API client for {endpoint}"))
    }
}

/// Builds the site router. The API client reaches pages and server
/// functions through the Leptos context of each request.
pub fn router(leptos_options: LeptosOptions, api: DocsApi) -> Router {
    let routes = generate_route_list(App);
    let shell_options = leptos_options.clone();
    let endpoint: Arc<str> = Arc::from(api.endpoint());

    Router::new()
        .route("/healthz", get(move || healthz(endpoint.clone())))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(api.clone()),
            move || shell(shell_options.clone()),
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz(endpoint: Arc<str>) -> &'static str {
    info!(event = "healthz", endpoint = %endpoint, "health check");
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_flag_overrides_default() {
        let cfg = ServerConfig::try_parse_from([
            "helpdocs",
            "--api-url",
            "http://docs.internal:9000/graphql",
        ])
        .unwrap();
        assert_eq!(cfg.endpoint(), "http://docs.internal:9000/graphql");
    }

    #[test]
    fn blank_api_url_falls_back() {
        let cfg = ServerConfig::try_parse_from(["helpdocs", "--api-url", ""]).unwrap();
        assert_eq!(cfg.endpoint(), "http://localhost:8080/graphql");
        assert_eq!(cfg.docs_api().unwrap().endpoint(), "http://localhost:8080/graphql");
    }

    #[test]
    fn timeout_is_configurable() {
        let cfg =
            ServerConfig::try_parse_from(["helpdocs", "--api-timeout-secs", "3"]).unwrap();
        assert_eq!(cfg.api_timeout_secs, 3);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(ServerConfig::try_parse_from(["helpdocs", "--api-timeout-secs", "0"]).is_err());
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        assert_eq!(healthz(Arc::from("http://localhost:8080/graphql")).await, "ok");
    }
}
