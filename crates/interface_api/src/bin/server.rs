//! Premium Rating Service - API Server Binary
//!
//! This binary starts the HTTP API server for the premium rating service.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin premium-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8082 DATABASE_URL=postgres://... cargo run --bin premium-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8082)
//! * `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_BASE_RATE` - Base rate applied to every premium (default: 100.0)

use std::net::SocketAddr;
use std::sync::Arc;

use rust_decimal_macros::dec;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_rating::RateLookup;
use infra_db::{create_pool, DatabaseConfig, PostgresRatingAdapter};
use interface_api::{config::ApiConfig, create_router};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, establishes the database
/// connection, and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - Database connection fails
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = load_config();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        base_rate = %config.base_rate,
        "Starting Premium Rating API Server"
    );

    // Create database connection pool
    let pool = create_pool(DatabaseConfig::new(&config.database_url)).await?;

    // Verify the reference data is reachable
    ensure_database_ready(&pool).await?;

    // Wire the rating port to its PostgreSQL adapter
    let rates: Arc<dyn RateLookup> = Arc::new(PostgresRatingAdapter::new(pool));

    // Create the API router
    let app = create_router(rates, config.clone());

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to individual environment variables or defaults when the
/// prefixed configuration source cannot be deserialized.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| {
        // Fall back to individual env vars or defaults
        ApiConfig {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8082),
            database_url: std::env::var("DATABASE_URL")
                .or_else(|_| std::env::var("API_DATABASE_URL"))
                .unwrap_or_else(|_| "postgres://localhost/premium_rating".to_string()),
            log_level: std::env::var("API_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),
            base_rate: std::env::var("API_BASE_RATE")
                .ok()
                .and_then(|r| r.parse().ok())
                .unwrap_or_else(|| dec!(100.0)),
        }
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Verifies database connectivity before serving traffic.
///
/// Schema and seed migrations are applied externally (sqlx-cli against the
/// `migrations/` directory); the server only probes that the database
/// answers.
async fn ensure_database_ready(pool: &sqlx::PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Checking database connectivity...");

    sqlx::query("SELECT 1").execute(pool).await?;

    tracing::info!("Database ready");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
