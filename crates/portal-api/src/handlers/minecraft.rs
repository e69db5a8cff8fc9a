//! Minecraft utility handlers

use axum::{extract::Query, Json};
use portal_service::{McStatusResponse, MinecraftService};
use serde::Deserialize;

/// Query parameters for the status lookup
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    /// Server hostname or IP address
    pub ip: String,
    /// Server port (defaults to 25565)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    25565
}

/// Check a Minecraft Java server's status.
///
/// GET /api/mc/status?ip=...&port=...
///
/// Never an HTTP error: unreachable servers report `online: false` with a
/// human-readable reason.
pub async fn server_status(Query(params): Query<StatusParams>) -> Json<McStatusResponse> {
    Json(MinecraftService::status(&params.ip, params.port).await)
}
