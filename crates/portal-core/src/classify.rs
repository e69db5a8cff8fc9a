//! Team classification engine
//!
//! Pure transformation from a raw member snapshot to the ordered team lists
//! served to the front end. Safe to run repeatedly over the same snapshot
//! with different configs/overrides; nothing here touches I/O.

use std::collections::HashMap;

use crate::avatar::MEMBER_AVATAR_SIZE;
use crate::entities::{
    non_empty, ContactInfo, ContributorOverride, ContributorRecord, GuildMember, Team, TeamConfig,
};

/// Classify members into teams.
///
/// Each member lands in at most one team: an explicit `member_ids` inclusion
/// wins over role matching, and among role matches the first config (by input
/// order) whose role set intersects the member's roles wins. When two configs
/// share a role id, input order is the tie-break. Members matching nothing
/// are silently omitted. Output team order equals config order; member order
/// within a team equals input member order.
pub fn classify(
    members: &[GuildMember],
    configs: &[TeamConfig],
    overrides: &HashMap<String, ContributorOverride>,
) -> Vec<Team> {
    let mut teams: Vec<Team> = configs.iter().map(Team::from).collect();

    // First config claims a user id listed by more than one team.
    let mut explicit: HashMap<&str, usize> = HashMap::new();
    for (index, config) in configs.iter().enumerate() {
        for user_id in &config.member_ids {
            explicit.entry(user_id.as_str()).or_insert(index);
        }
    }

    for member in members {
        let assigned = explicit.get(member.user.id.as_str()).copied().or_else(|| {
            configs
                .iter()
                .position(|config| member.has_any_role(&config.role_ids))
        });

        if let Some(index) = assigned {
            let record = resolve(member, &configs[index], overrides.get(&member.user.id));
            teams[index].list.push(record);
        }
    }

    teams
}

fn resolve(
    member: &GuildMember,
    config: &TeamConfig,
    ov: Option<&ContributorOverride>,
) -> ContributorRecord {
    let user = &member.user;

    let name = override_field(ov, |o| o.name.as_deref())
        .unwrap_or_else(|| member.display_name())
        .to_string();

    let avatar = override_field(ov, |o| o.avatar.as_deref())
        .map_or_else(|| user.avatar_url(MEMBER_AVATAR_SIZE), String::from);

    let position = override_field(ov, |o| o.position.as_deref())
        .unwrap_or(&config.name)
        .to_string();

    let mut contact = ContactInfo {
        discord: Some(user.username.clone()),
        ..ContactInfo::default()
    };
    if let Some(overlay) = ov.and_then(|o| o.contact.as_ref()) {
        apply_contact(&mut contact, overlay);
    }

    ContributorRecord {
        id: user.id.clone(),
        name,
        avatar,
        avatar_use_github: ov.and_then(|o| o.avatar_use_github).unwrap_or(false),
        position,
        contact,
    }
}

/// Extract a string override field, treating empty strings as absent
fn override_field<'a>(
    ov: Option<&'a ContributorOverride>,
    field: impl Fn(&'a ContributorOverride) -> Option<&'a str>,
) -> Option<&'a str> {
    ov.and_then(field).and_then(|v| non_empty(Some(v)))
}

fn apply_contact(contact: &mut ContactInfo, overlay: &ContactInfo) {
    overlay_field(&mut contact.discord, &overlay.discord);
    overlay_field(&mut contact.twitter, &overlay.twitter);
    overlay_field(&mut contact.github, &overlay.github);
    overlay_field(&mut contact.youtube, &overlay.youtube);
    overlay_field(&mut contact.other, &overlay.other);
}

fn overlay_field(target: &mut Option<String>, source: &Option<String>) {
    if let Some(value) = non_empty(source.as_deref()) {
        *target = Some(value.to_string());
    }
}
