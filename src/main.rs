//! Trivia Server
//!
//! Main entry point that wires the store, services, and HTTP API
//! together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use trivia_api::{AppState, build_app};
use trivia_core::config::{AppConfig, StoreProvider};
use trivia_core::error::AppError;
use trivia_database::{DatabasePool, MemoryTriviaStore, PgTriviaStore, TriviaStore};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load layered configuration for the environment named by `TRIVIA_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("TRIVIA_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Open the configured store. The pool is returned so it can be closed
/// on shutdown.
async fn open_store(
    config: &AppConfig,
) -> Result<(Arc<dyn TriviaStore>, Option<DatabasePool>), AppError> {
    match config.store.provider {
        StoreProvider::Postgres => {
            let db = DatabasePool::connect_and_migrate(&config.database).await?;
            tracing::info!("Database migrations complete");
            let store = PgTriviaStore::new(db.pool().clone());
            Ok((Arc::new(store), Some(db)))
        }
        StoreProvider::Memory => {
            let store = if config.store.seed_categories {
                MemoryTriviaStore::with_standard_categories()
            } else {
                MemoryTriviaStore::new()
            };
            tracing::warn!("Using in-memory store; data is lost on shutdown");
            Ok((Arc::new(store), None))
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Trivia API v{}", env!("CARGO_PKG_VERSION"));

    let (store, db) = open_store(&config).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = AppState::new(config, store);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Trivia API listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                tracing::info!("Shutdown signal received, draining connections...");
                let _ = shutdown_tx.send(true);
            })
            .await
    };

    // In-flight requests get `grace` to finish once the signal arrives.
    let deadline = async move {
        if shutdown_rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = deadline => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Grace period elapsed, forcing shutdown");
        }
    }

    if let Some(db) = db {
        db.close().await;
    }

    tracing::info!("Trivia API shut down gracefully");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
