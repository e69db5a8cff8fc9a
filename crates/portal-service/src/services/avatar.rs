//! Avatar redirect lookup.
//!
//! Single-shot fetch of one user to resolve their avatar URL, cached under
//! `discord:avatar:{user_id}`. Unlike the pager, upstream rejections here
//! surface to the caller with their original status code.

use portal_core::{avatar_url, REDIRECT_AVATAR_SIZE};
use portal_discord::DiscordApiError;
use tracing::instrument;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Key prefix for cached avatar URLs
const AVATAR_CACHE_PREFIX: &str = "discord:avatar:";

/// Avatar service
pub struct AvatarService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AvatarService<'a> {
    /// Create a new AvatarService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn key(user_id: &str) -> String {
        format!("{AVATAR_CACHE_PREFIX}{user_id}")
    }

    /// Resolve the avatar URL for a user, from cache when possible
    #[instrument(skip(self))]
    pub async fn resolve(&self, user_id: &str) -> ServiceResult<String> {
        let key = Self::key(user_id);
        if let Some(url) = self.ctx.cache().get(&key).await {
            return Ok(url);
        }

        let user = self
            .ctx
            .discord()
            .fetch_user(user_id)
            .await
            .map_err(|e| match e {
                DiscordApiError::Status(404) => ServiceError::not_found("User", user_id),
                other => ServiceError::from(other),
            })?;

        let url = avatar_url(
            &user.id,
            user.avatar.as_deref(),
            &user.discriminator,
            REDIRECT_AVATAR_SIZE,
        );

        self.ctx
            .cache()
            .set(&key, &url, self.ctx.config().discord.avatar_cache_ttl)
            .await;

        Ok(url)
    }
}
