//! Response DTOs for the REST layer

use chrono::{DateTime, Utc};
use portal_minecraft::{extract_game_version, ServerStatus};
use serde::Serialize;

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub cache: String,
}

impl ReadinessResponse {
    /// The cache is an accelerator, not a dependency: an unreachable cache
    /// reports degraded while the service itself stays ready.
    pub fn ready(cache_healthy: bool) -> Self {
        Self {
            status: "ready".to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                cache: check_status(cache_healthy),
            },
        }
    }
}

fn check_status(healthy: bool) -> String {
    if healthy { "healthy" } else { "degraded" }.to_string()
}

/// Acknowledgement for a fire-and-forget refresh trigger
#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    pub status: String,
}

impl RefreshResponse {
    pub fn accepted() -> Self {
        Self {
            status: "refreshing".to_string(),
        }
    }
}

/// Player counts for the Minecraft status response
#[derive(Debug, Clone, Serialize)]
pub struct PlayerInfo {
    pub online: u32,
    pub max: u32,
}

/// Minecraft server status response
#[derive(Debug, Clone, Serialize)]
pub struct McStatusResponse {
    pub online: bool,
    pub ip: String,
    pub port: u16,
    pub motd: Option<String>,
    pub players: Option<PlayerInfo>,
    /// Raw version string (e.g. `"Velocity 1.7.2-1.21.11"`)
    pub version: Option<String>,
    /// Clean game version (e.g. `"1.21.11"`)
    pub game_version: Option<String>,
    pub latency: Option<f64>,
    pub error: Option<String>,
}

impl McStatusResponse {
    pub fn online(ip: &str, port: u16, status: &ServerStatus) -> Self {
        Self {
            online: true,
            ip: ip.to_string(),
            port,
            motd: status.motd.clone(),
            players: status.players.as_ref().map(|p| PlayerInfo {
                online: p.online,
                max: p.max,
            }),
            version: status.version.clone(),
            game_version: status.version.as_deref().map(extract_game_version),
            latency: Some(status.latency_ms),
            error: None,
        }
    }

    pub fn offline(ip: &str, port: u16, error: &str) -> Self {
        Self {
            online: false,
            ip: ip.to_string(),
            port,
            motd: None,
            players: None,
            version: None,
            game_version: None,
            latency: None,
            error: Some(error.to_string()),
        }
    }
}
