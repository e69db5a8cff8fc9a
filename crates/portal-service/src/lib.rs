//! # portal-service
//!
//! Application layer: the contributor-aggregation pipeline and the lookup
//! services behind the REST handlers. Services borrow a [`ServiceContext`]
//! holding the process-wide shared clients (HTTP, cache), which is built
//! once at startup and injected everywhere.

pub mod dto;
pub mod roster;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    HealthChecks, HealthResponse, McStatusResponse, PlayerInfo, ReadinessResponse, RefreshResponse,
};
pub use roster::{RosterError, TeamRoster};
pub use services::{
    AvatarService, ContributorService, GuildService, MinecraftService, ServiceContext,
    ServiceError, ServiceResult,
};
