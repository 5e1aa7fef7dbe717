//! Gist proxy entrypoint.
//!
//! Loads configuration, merges the upstream token from the environment,
//! and serves the relay until Ctrl+C.

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gist_proxy::config::{loader, ProxyConfig};
use gist_proxy::{HttpServer, Shutdown};

/// Environment variable naming an optional TOML config file.
const CONFIG_ENV: &str = "GIST_PROXY_CONFIG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gist_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("gist-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = match std::env::var(CONFIG_ENV) {
        Ok(path) => loader::load_config(Path::new(&path))?,
        Err(_) => ProxyConfig::default(),
    };
    loader::apply_env(&mut config);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        api_base = %config.upstream.api_base,
        token_configured = config.upstream.token.is_some(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );
    if config.upstream.token.is_none() {
        tracing::warn!(
            "GITHUB_TOKEN is not set; every relay call will fail with a configuration error"
        );
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
