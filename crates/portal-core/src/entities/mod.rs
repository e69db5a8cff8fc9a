//! Domain entities
//!
//! Raw member wire types as returned by the guild API, plus the team
//! configuration and contributor output model.

mod member;
mod role;
mod team;

pub(crate) use member::non_empty;
pub use member::{GuildMember, MemberUser};
pub use role::GuildRole;
pub use team::{ContactInfo, ContributorOverride, ContributorRecord, Team, TeamColor, TeamConfig};
