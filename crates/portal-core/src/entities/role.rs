//! Guild role entity - one role as returned by the guild roles endpoint

use serde::{Deserialize, Serialize};

/// A guild role, used by the front end to render role colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildRole {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub position: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"id": "1", "name": "admin", "color": 255, "position": 3, "hoist": true}"#;
        let role: GuildRole = serde_json::from_str(json).unwrap();
        assert_eq!(role.id, "1");
        assert_eq!(role.color, 255);
    }
}
