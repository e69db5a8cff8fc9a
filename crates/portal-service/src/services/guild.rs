//! Guild role listing.
//!
//! Thin passthrough of the configured guild's roles, sharing the fetch
//! client. Single-shot: upstream rejections surface with their status.

use portal_core::GuildRole;
use tracing::instrument;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Guild service
pub struct GuildService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuildService<'a> {
    /// Create a new GuildService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the configured guild's roles
    #[instrument(skip(self))]
    pub async fn roles(&self) -> ServiceResult<Vec<GuildRole>> {
        let guild_id = self
            .ctx
            .config()
            .discord
            .guild_id
            .as_deref()
            .ok_or_else(|| ServiceError::config("DISCORD_GUILD_ID is not set"))?;

        Ok(self.ctx.discord().fetch_guild_roles(guild_id).await?)
    }
}
