//! Discord utility handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use portal_service::AvatarService;

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Resolve a user's avatar and redirect to the CDN.
///
/// GET /api/discord/avatar/{user_id}
pub async fn redirect_avatar(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Response> {
    if user_id.is_empty() || !user_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::invalid_path("Invalid user_id format"));
    }

    let service = AvatarService::new(state.service_context());
    let url = service.resolve(&user_id).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
}
