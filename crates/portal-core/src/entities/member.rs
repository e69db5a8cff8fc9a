//! Guild member entity - one member as returned by the guild members endpoint

use serde::{Deserialize, Serialize};

/// A raw guild member, identity is `user.id`. Immutable once fetched;
/// snapshots of these are what the cache layer stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMember {
    pub user: MemberUser,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl GuildMember {
    /// Display name fallback chain: nickname, then global display name,
    /// then username. Empty strings fall through like absent values.
    pub fn display_name(&self) -> &str {
        non_empty(self.nick.as_deref())
            .or_else(|| non_empty(self.user.global_name.as_deref()))
            .unwrap_or(&self.user.username)
    }

    /// Check whether any of the given role ids is assigned to this member
    pub fn has_any_role(&self, role_ids: &[String]) -> bool {
        role_ids.iter().any(|id| self.roles.contains(id))
    }
}

/// The user object embedded in a guild member payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default = "default_discriminator")]
    pub discriminator: String,
}

impl MemberUser {
    /// Resolve this user's avatar URL at the given render size
    pub fn avatar_url(&self, size: u16) -> String {
        crate::avatar::avatar_url(&self.id, self.avatar.as_deref(), &self.discriminator, size)
    }
}

fn default_discriminator() -> String {
    "0".to_string()
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
