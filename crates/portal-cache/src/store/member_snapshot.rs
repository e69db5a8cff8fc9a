//! Raw member snapshot storage in Redis.
//!
//! The complete paginated member list for a guild is cached as a single
//! JSON unit. Only the raw snapshot is cached; classification always runs
//! over it fresh, so team rule changes take effect without a refetch.

use portal_core::GuildMember;

use crate::store::CacheStore;

/// Key prefix for guild member snapshots
const MEMBER_SNAPSHOT_PREFIX: &str = "discord:guild_members:";

/// Snapshot TTL (7 days); stale-but-servable until expiry or explicit refresh
const MEMBER_SNAPSHOT_TTL: u64 = 7 * 24 * 60 * 60;

/// Store for the cached raw member snapshot of a guild
#[derive(Debug, Clone)]
pub struct MemberSnapshotStore {
    cache: CacheStore,
}

impl MemberSnapshotStore {
    /// Create a new member snapshot store
    #[must_use]
    pub fn new(cache: CacheStore) -> Self {
        Self { cache }
    }

    /// Generate the cache key for a guild's snapshot
    fn key(guild_id: &str) -> String {
        format!("{MEMBER_SNAPSHOT_PREFIX}{guild_id}")
    }

    /// Store a snapshot. Cache failures are absorbed; concurrent writers
    /// race and the last one wins, which is acceptable for membership data.
    pub async fn store(&self, guild_id: &str, members: &[GuildMember]) {
        match serde_json::to_string(members) {
            Ok(json) => {
                self.cache.set(&Self::key(guild_id), &json, MEMBER_SNAPSHOT_TTL).await;
                tracing::debug!(
                    guild_id = %guild_id,
                    member_count = members.len(),
                    "Stored member snapshot"
                );
            }
            Err(e) => {
                tracing::error!(guild_id = %guild_id, error = %e, "Failed to serialize member snapshot");
            }
        }
    }

    /// Load the cached snapshot, treating corrupt payloads as a miss
    pub async fn load(&self, guild_id: &str) -> Option<Vec<GuildMember>> {
        let json = self.cache.get(&Self::key(guild_id)).await?;
        match serde_json::from_str(&json) {
            Ok(members) => Some(members),
            Err(e) => {
                tracing::warn!(guild_id = %guild_id, error = %e, "Discarding corrupt member snapshot");
                None
            }
        }
    }
}
