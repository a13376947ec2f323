//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use vote_common::{AppConfig, AppError, SessionService};
use vote_db::{
    create_pool, ensure_schema, PgCandidateRepository, PgPool, PgUserRepository,
    PgVoteRepository,
};
use vote_service::ServiceContextBuilder;

use crate::flash;
use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health checks get the same stack minus the rate limiter and flash signing.
pub fn create_app(state: AppState) -> Router {
    let pages = create_router().layer(axum::middleware::from_fn_with_state(
        state.clone(),
        flash::write_pending,
    ));
    let pages = apply_middleware_with_config(pages, &state.config().rate_limit);
    let health = apply_middleware(health_routes());

    pages.merge(health).with_state(state)
}

/// Connect to PostgreSQL and make sure the schema exists
pub async fn connect_database(config: &AppConfig) -> Result<PgPool, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = vote_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    Ok(pool)
}

/// Build AppState on top of an existing pool
pub fn create_state_with_pool(pool: PgPool, config: AppConfig) -> Result<AppState, AppError> {
    let session_service = Arc::new(SessionService::new(
        &config.session.secret,
        config.session.ttl_seconds,
    ));

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .candidate_repo(Arc::new(PgCandidateRepository::new(pool.clone())))
        .vote_repo(Arc::new(PgVoteRepository::new(pool.clone())))
        .pool(pool)
        .session_service(session_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let pool = connect_database(&config).await?;
    create_state_with_pool(pool, config)
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config.api.address().parse().map_err(|e| {
        AppError::Config(format!("Invalid listen address {}: {e}", config.api.address()))
    })?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}

/// Resolves on Ctrl+C; never resolves if the handler cannot be installed
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
