//! Community handlers
//!
//! Contributor aggregation and guild role listing.

use axum::{extract::State, Json};
use portal_core::{GuildRole, Team};
use portal_service::{ContributorService, GuildService, RefreshResponse};

use crate::response::ApiResult;
use crate::state::AppState;

/// Get the classified contributor teams.
///
/// GET /api/community/contributors
pub async fn get_contributors(State(state): State<AppState>) -> Json<Vec<Team>> {
    let service = ContributorService::new(state.service_context());
    Json(service.get_contributors().await)
}

/// Trigger a member snapshot refresh.
///
/// POST /api/community/contributors/refresh
///
/// Fire-and-forget: the rebuild runs detached from this request's
/// lifecycle, and its failures are only logged.
pub async fn refresh_contributors(State(state): State<AppState>) -> Json<RefreshResponse> {
    let ctx = state.service_context_arc();
    tokio::spawn(async move {
        ContributorService::new(&ctx).refresh().await;
    });

    Json(RefreshResponse::accepted())
}

/// List the configured guild's roles.
///
/// GET /api/community/roles
pub async fn guild_roles(State(state): State<AppState>) -> ApiResult<Json<Vec<GuildRole>>> {
    let service = GuildService::new(state.service_context());
    Ok(Json(service.roles().await?))
}
