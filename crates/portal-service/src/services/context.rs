//! Service context - dependency container for services
//!
//! Holds the process-wide shared clients and configuration needed by the
//! services. Built once at startup and injected; the explicit construction
//! replaces ad hoc class-level statics, with release happening at process
//! shutdown via [`ServiceContext::shutdown`].

use std::sync::Arc;

use portal_cache::{CacheStore, MemberSnapshotStore};
use portal_common::AppConfig;
use portal_discord::DiscordApi;

use crate::roster::TeamRoster;

/// Service context containing all dependencies
///
/// Provides access to:
/// - Application configuration
/// - The error-absorbing cache facade and the member snapshot store
/// - The Discord REST client (which owns the resilient fetch client)
/// - The team roster driving classification
#[derive(Clone)]
pub struct ServiceContext {
    config: Arc<AppConfig>,
    cache: CacheStore,
    snapshots: MemberSnapshotStore,
    discord: DiscordApi,
    roster: Arc<TeamRoster>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        config: AppConfig,
        cache: CacheStore,
        discord: DiscordApi,
        roster: TeamRoster,
    ) -> Self {
        let snapshots = MemberSnapshotStore::new(cache.clone());
        Self {
            config: Arc::new(config),
            cache,
            snapshots,
            discord,
            roster: Arc::new(roster),
        }
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the cache facade
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Get the member snapshot store
    pub fn snapshots(&self) -> &MemberSnapshotStore {
        &self.snapshots
    }

    /// Get the Discord REST client
    pub fn discord(&self) -> &DiscordApi {
        &self.discord
    }

    /// Get the team roster
    pub fn roster(&self) -> &TeamRoster {
        &self.roster
    }

    /// Release shared resources during shutdown
    pub fn shutdown(&self) {
        self.cache.close();
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("config", &"AppConfig")
            .field("cache", &self.cache)
            .field("roster_teams", &self.roster.teams.len())
            .finish()
    }
}
