//! Team roster configuration.
//!
//! The ordered team definitions and per-user overrides driving
//! classification. Loaded from a JSON document at startup when
//! `TEAM_ROSTER_PATH` is set; a missing or malformed file falls back to the
//! built-in roster so configuration problems degrade instead of crashing.

use std::collections::HashMap;
use std::path::Path;

use portal_core::{ContributorOverride, TeamColor, TeamConfig};
use serde::{Deserialize, Serialize};

/// Roster loading errors
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse roster file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered team configs plus per-user overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamRoster {
    #[serde(default)]
    pub teams: Vec<TeamConfig>,
    #[serde(default)]
    pub overrides: HashMap<String, ContributorOverride>,
}

impl TeamRoster {
    /// Load the roster: from the configured file when given, the built-in
    /// roster otherwise or when the file cannot be used.
    #[must_use]
    pub fn load(path: Option<&str>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };

        match Self::from_file(path) {
            Ok(roster) => {
                tracing::info!(path = %path, team_count = roster.teams.len(), "Loaded team roster");
                roster
            }
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Failed to load team roster, using built-in roster");
                Self::builtin()
            }
        }
    }

    /// Parse a roster document from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The built-in roster
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            teams: vec![
                TeamConfig {
                    name: "Project Leads".to_string(),
                    role_ids: vec!["1454433213135978658".to_string()],
                    member_ids: vec![],
                    image: Some("/icons/staff/admin.webp".to_string()),
                    color: Some(TeamColor::Gradient(vec![
                        "#ff7a7b".to_string(),
                        "#ffc2c2".to_string(),
                    ])),
                },
                TeamConfig {
                    name: "Developers".to_string(),
                    role_ids: vec!["1454664229553438806".to_string()],
                    member_ids: vec![],
                    image: Some("/icons/staff/developer.webp".to_string()),
                    color: Some(TeamColor::Gradient(vec![
                        "#369876".to_string(),
                        "#4fff87".to_string(),
                    ])),
                },
                TeamConfig {
                    name: "Builders".to_string(),
                    role_ids: vec!["1454432689062154331".to_string()],
                    member_ids: vec![],
                    image: Some("/icons/staff/build-lead.webp".to_string()),
                    color: Some(TeamColor::Solid("#194bb5".to_string())),
                },
            ],
            overrides: HashMap::new(),
        }
    }
}
