//! # portal-core
//!
//! Domain layer containing the raw guild member entities, the team/contributor
//! model, and the pure transformations over them (avatar resolution and team
//! classification). This crate has zero dependencies on infrastructure
//! (HTTP client, cache, web framework, etc.).

pub mod avatar;
pub mod classify;
pub mod entities;

// Re-export commonly used types at crate root
pub use avatar::{avatar_url, CDN_BASE_URL, MEMBER_AVATAR_SIZE, REDIRECT_AVATAR_SIZE};
pub use classify::classify;
pub use entities::{
    ContactInfo, ContributorOverride, ContributorRecord, GuildMember, GuildRole, MemberUser, Team,
    TeamColor, TeamConfig,
};
