//! Readsync API server.
//!
//! Validates the environment before anything else; a missing variable is
//! fatal and the process exits with status 1 before a socket is opened.
//!
//! Run with:
//!   PORT=8080 APP_ENV=development CORS_ORIGINS=http://localhost:3000 \
//!   DB_HOST=localhost DB_PORT=5432 DB_USER=postgres DB_PASSWORD=postgres \
//!   DB_NAME=readsync cargo run

use readsync::prelude::*;
use readsync::server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "readsync=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::<AppConfig>::load() {
        Ok(config) => config,
        Err(errors) => {
            tracing::error!("failed to load config: {}", errors);
            for error in errors.iter() {
                tracing::info!("hint: {}", error.suggestion());
            }
            std::process::exit(1);
        }
    };

    tracing::info!(
        environment = %config.environment,
        port = %config.port,
        origins = ?config.allowed_origins,
        database = ?config.database,
        "configuration validated"
    );

    if let Err(err) = server::serve(&config).await {
        tracing::error!(error = %err, "server stopped");
        std::process::exit(1);
    }
}
