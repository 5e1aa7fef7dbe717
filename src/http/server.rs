//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the relay and health handlers
//! - Wire up middleware (CORS, tracing, timeout, request ID)
//! - Bind the server to a listener and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::gist::types::ProxyResult;
use crate::http::handlers::{gist_handler, healthz};
use crate::http::request::RequestIdLayer;
use crate::upstream::GistClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub upstream: GistClient,
}

/// HTTP server for the gist proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> ProxyResult<Self> {
        let upstream = GistClient::new(&config.upstream)?;
        let request_timeout = Duration::from_secs(config.timeouts.request_secs);

        let state = AppState {
            config: Arc::new(config),
            upstream,
        };

        let router = Self::build_router(state, request_timeout);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The CORS layer sits outermost so preflight probes are answered (and
    /// cross-origin headers attached) before validation or the upstream
    /// client are ever reached.
    fn build_router(state: AppState, request_timeout: Duration) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/gist-proxy", post(gist_handler))
            .route("/healthz", get(healthz))
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
