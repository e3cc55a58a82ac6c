//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, database connection, migrations, and the Axum
//! server lifecycle.

use crate::application::services::ShortenerService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::ShortUrlRepository;
use crate::infrastructure::persistence::{InMemoryShortUrlRepository, PgShortUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The mapping store (PostgreSQL with migrations applied, or in-memory)
/// - The shortener service
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<dyn ShortUrlRepository> = match config.storage {
        StorageBackend::Postgres => {
            let pool = connect_database(&config).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Migrations applied");

            Arc::new(PgShortUrlRepository::new(Arc::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; mappings are lost on restart");
            Arc::new(InMemoryShortUrlRepository::new())
        }
    };

    let generator = Arc::new(RandomCodeGenerator::new(config.short_code_length));
    let shortener_service = Arc::new(ShortenerService::new(
        repository,
        generator,
        config.code_max_attempts,
    ));

    let state = AppState::new(shortener_service);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects to PostgreSQL, retrying with exponential backoff.
async fn connect_database(config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(100)
        .factor(2)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries.saturating_sub(1));

    Retry::spawn(strategy, || {
        let options = options.clone();
        async move {
            options
                .connect(&config.database_url)
                .await
                .inspect_err(|e| tracing::warn!("Database connection failed: {}", e))
        }
    })
    .await
    .context("Failed to connect to database")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
