//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, Json};
use portal_service::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
///
/// The cache is a speed-up, not a dependency: this always reports ready
/// and only flags the cache as degraded.
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let cache_healthy = state.service_context().cache().health_check().await;
    Json(ReadinessResponse::ready(cache_healthy))
}
