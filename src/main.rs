#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use helpdocs::logging::init_logging;
    use helpdocs::server::{ServerConfig, router};
    use leptos::prelude::*;
    use tracing::info;

    // A missing .env file is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();
    let cfg = ServerConfig::parse();
    init_logging()?;

    let conf = get_configuration(None).context("failed to load Leptos configuration")?;
    let addr = conf.leptos_options.site_addr;

    let api = cfg.docs_api()?;
    info!(
        stage = "startup",
        event = "api.configured",
        endpoint = api.endpoint(),
        timeout_secs = cfg.api_timeout_secs,
        "docs API client ready"
    );

    let app = router(conf.leptos_options, api);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(stage = "startup", event = "listen", addr = %addr, "listening on http://{addr}");
    axum::serve(listener, app.into_make_service())
        .await
        .context("server terminated")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
