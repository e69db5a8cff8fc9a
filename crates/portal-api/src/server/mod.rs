//! Server setup and initialization
//!
//! Provides the main application builder and server runner. The shared
//! clients (HTTP, cache) are constructed once here and injected through the
//! service context; shutdown releases them again.

use std::net::SocketAddr;

use axum::Router;
use portal_cache::{CacheStore, RedisPoolConfig};
use portal_common::{AppConfig, AppError};
use portal_discord::{DiscordApi, FetchClient};
use portal_service::{ServiceContext, TeamRoster};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all shared dependencies and create the AppState
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Shared outbound HTTP client
    let fetch = FetchClient::new(&config.app.name, &config.http)
        .map_err(|e| AppError::Config(e.to_string()))?;
    let discord = DiscordApi::new(fetch, &config.discord);

    // Cache facade; construction failures degrade to uncached operation
    let cache = CacheStore::connect(RedisPoolConfig::from(&config.redis));

    // Team roster driving classification
    let roster = TeamRoster::load(config.discord.team_roster_path.as_deref());

    let service_context = ServiceContext::new(config, cache, discord, roster);
    Ok(AppState::new(service_context))
}

/// Run the HTTP server until shutdown is requested
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

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    } else {
        info!("Shutdown signal received");
    }
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config)?;
    let service_context = state.service_context_arc();

    // Build application
    let app = create_app(state);

    // Run server
    let result = run_server(app, addr).await;

    // Release shared resources
    service_context.shutdown();
    info!("Application shutdown complete");

    result
}
