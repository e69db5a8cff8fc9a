//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{community, discord, health, minecraft};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(discord_routes())
        .merge(minecraft_routes())
        .merge(community_routes())
}

/// Discord utility routes
fn discord_routes() -> Router<AppState> {
    Router::new().route("/discord/avatar/:user_id", get(discord::redirect_avatar))
}

/// Minecraft utility routes
fn minecraft_routes() -> Router<AppState> {
    Router::new().route("/mc/status", get(minecraft::server_status))
}

/// Community routes
fn community_routes() -> Router<AppState> {
    Router::new()
        .route("/community/contributors", get(community::get_contributors))
        .route(
            "/community/contributors/refresh",
            post(community::refresh_contributors),
        )
        .route("/community/roles", get(community::guild_roles))
}
