//! Contributor aggregation pipeline.
//!
//! A request first consults the cached raw member snapshot; on a miss the
//! pager walks the guild and the snapshot is stored with its 7-day TTL.
//! Classification always runs fresh over the snapshot, so roster changes
//! take effect without a refetch. Only the raw snapshot is ever cached.

use portal_core::{classify, Team};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;

/// Contributor service
pub struct ContributorService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContributorService<'a> {
    /// Create a new ContributorService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the classified contributor teams.
    ///
    /// Degrades to an empty list when no guild is configured; upstream
    /// failures below the pager surface as partial or empty teams, never
    /// as an error.
    #[instrument(skip(self))]
    pub async fn get_contributors(&self) -> Vec<Team> {
        let Some(guild_id) = self.ctx.config().discord.guild_id.as_deref() else {
            warn!("DISCORD_GUILD_ID not set, returning empty contributor list");
            return Vec::new();
        };

        let members = match self.ctx.snapshots().load(guild_id).await {
            Some(snapshot) => {
                info!(member_count = snapshot.len(), "Serving member snapshot from cache");
                snapshot
            }
            None => self.rebuild_snapshot(guild_id).await,
        };

        let roster = self.ctx.roster();
        classify(&members, &roster.teams, &roster.overrides)
    }

    /// Rebuild the member snapshot, replacing whatever is cached.
    ///
    /// Used by the detached refresh task: failures are logged, never
    /// surfaced to the caller that triggered the refresh.
    #[instrument(skip(self))]
    pub async fn refresh(&self) {
        let Some(guild_id) = self.ctx.config().discord.guild_id.as_deref() else {
            warn!("DISCORD_GUILD_ID not set, refresh skipped");
            return;
        };

        info!(guild_id = %guild_id, "Refreshing member snapshot");
        let members = self.rebuild_snapshot(guild_id).await;
        info!(member_count = members.len(), "Member snapshot refreshed");
    }

    async fn rebuild_snapshot(&self, guild_id: &str) -> Vec<portal_core::GuildMember> {
        let members = self.ctx.discord().fetch_all_members(guild_id).await;
        self.ctx.snapshots().store(guild_id, &members).await;
        members
    }
}
