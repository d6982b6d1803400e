//! HTTP bootstrap for the API.
//!
//! Consumes a validated [`AppConfig`]: the port decides where to listen and
//! the allowed origins configure CORS for everything under `/api`.

use std::net::SocketAddr;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::AppConfig;

/// Errors raised while starting or running the HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("invalid listen port '{port}': {source}")]
    InvalidPort {
        port: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

/// `GET /api/health`.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { message: "OK" })
}

/// Build the router: an `/api` group behind CORS, plus request tracing.
pub fn router(allowed_origins: &[String]) -> Router {
    let api = Router::new()
        .route("/health", get(health_check))
        .layer(cors_layer(allowed_origins));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// `*` allows every origin. Credentials are enabled, so a literal wildcard
/// header is not allowed and the request origin is echoed back instead.
fn allow_origin(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.iter().any(|origin| origin == "*") {
        tracing::warn!("CORS_ORIGINS contains '*'; allowing every origin with credentials");
        return AllowOrigin::mirror_request();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}

/// Socket address on all interfaces for the configured port.
pub fn listen_addr(port: &str) -> Result<SocketAddr, ServeError> {
    format!("0.0.0.0:{}", port)
        .parse()
        .map_err(|source| ServeError::InvalidPort {
            port: port.to_string(),
            source,
        })
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: &AppConfig) -> Result<(), ServeError> {
    let addr = listen_addr(&config.port)?;
    let app = router(&config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(%addr, environment = %config.environment, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
