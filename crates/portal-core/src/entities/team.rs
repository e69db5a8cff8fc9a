//! Team configuration and contributor output model
//!
//! `TeamConfig` order is significant: it defines both match priority and the
//! order of teams in the classified output.

use serde::{Deserialize, Serialize};

/// One configured team: role ids to match (OR semantics), explicitly
/// included user ids, and display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    #[serde(default)]
    pub role_ids: Vec<String>,
    #[serde(default)]
    pub member_ids: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub color: Option<TeamColor>,
}

/// Team accent color: a single value or an ordered gradient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamColor {
    Solid(String),
    Gradient(Vec<String>),
}

/// Per-user overrides applied during classification, keyed by user id.
/// Every field is optional; absent (or empty-string) values leave the
/// computed default untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContributorOverride {
    pub name: Option<String>,
    pub avatar: Option<String>,
    #[serde(rename = "avatarUseGithub")]
    pub avatar_use_github: Option<bool>,
    pub position: Option<String>,
    pub contact: Option<ContactInfo>,
}

/// Contact handles for a contributor. `discord` is populated from the raw
/// username unless overridden; the rest stay null unless an override
/// provides them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub discord: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub youtube: Option<String>,
    pub other: Option<String>,
}

/// A classified team with its resolved contributors, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub image: Option<String>,
    pub color: Option<TeamColor>,
    pub list: Vec<ContributorRecord>,
}

impl From<&TeamConfig> for Team {
    fn from(config: &TeamConfig) -> Self {
        Self {
            name: config.name.clone(),
            image: config.image.clone(),
            color: config.color.clone(),
            list: Vec::new(),
        }
    }
}

/// The resolved output unit for one contributor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorRecord {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(rename = "avatarUseGithub")]
    pub avatar_use_github: bool,
    pub position: String,
    pub contact: ContactInfo,
}
