//! Game version extraction.
//!
//! Servers behind proxies report composite version strings
//! (`"Velocity 1.7.2-1.21.11"`, `"git-Paper-378 (MC: 1.16.5)"`); the front
//! end wants the plain Minecraft version.

use std::sync::LazyLock;

use regex::Regex;

static MC_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(MC:\s*([\d.]+)\)").expect("valid regex"));

static VERSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b1\.\d+(?:\.\d+|\.x)?\b").expect("valid regex"));

/// Extract the clean Minecraft version from a raw version string.
///
/// An explicit `(MC: x.y.z)` tag wins; otherwise the last `1.x[.y]`-shaped
/// token does (composite ranges report their upper bound). With no
/// recognizable token the final whitespace-separated word is returned
/// verbatim, and an empty input yields `"Unknown"`.
#[must_use]
pub fn extract_game_version(raw: &str) -> String {
    if raw.is_empty() {
        return "Unknown".to_string();
    }

    if let Some(captures) = MC_TAG.captures(raw) {
        return captures[1].to_string();
    }

    if let Some(found) = VERSION_TOKEN.find_iter(raw).last() {
        return found.as_str().to_string();
    }

    raw.split_whitespace().last().unwrap_or(raw).to_string()
}
