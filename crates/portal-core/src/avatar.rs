//! Avatar URL resolution
//!
//! Deterministic, side-effect-free mapping from `(user id, avatar hash,
//! discriminator)` to a CDN URL. Used once per member during classification
//! and once per avatar-redirect lookup.

/// Base URL of the Discord CDN
pub const CDN_BASE_URL: &str = "https://cdn.discordapp.com";

/// Render size used for contributor list avatars
pub const MEMBER_AVATAR_SIZE: u16 = 256;

/// Render size used by the avatar redirect endpoint
pub const REDIRECT_AVATAR_SIZE: u16 = 1024;

/// Resolve the avatar URL for a user.
///
/// With a custom avatar hash, `a_`-prefixed hashes resolve to animated
/// `.gif` renditions and everything else to `.png`. Without one, the CDN
/// default avatar is selected by index: `(id >> 22) % 6` for new-style
/// accounts (discriminator `"0"`), `discriminator % 5` for legacy ones.
/// Unparseable numeric inputs resolve to index 0 rather than failing.
pub fn avatar_url(user_id: &str, avatar_hash: Option<&str>, discriminator: &str, size: u16) -> String {
    match avatar_hash {
        Some(hash) => {
            let ext = if hash.starts_with("a_") { "gif" } else { "png" };
            format!("{CDN_BASE_URL}/avatars/{user_id}/{hash}.{ext}?size={size}")
        }
        None => {
            let index = default_avatar_index(user_id, discriminator);
            format!("{CDN_BASE_URL}/embed/avatars/{index}.png")
        }
    }
}

fn default_avatar_index(user_id: &str, discriminator: &str) -> u64 {
    if discriminator == "0" {
        (user_id.parse::<u64>().unwrap_or(0) >> 22) % 6
    } else {
        u64::from(discriminator.parse::<u32>().unwrap_or(0) % 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_avatar_png() {
        assert_eq!(
            avatar_url("123", Some("abc123"), "0", 256),
            "https://cdn.discordapp.com/avatars/123/abc123.png?size=256"
        );
    }

    #[test]
    fn test_animated_hash_yields_gif() {
        assert_eq!(
            avatar_url("123", Some("a_abc123"), "0", 1024),
            "https://cdn.discordapp.com/avatars/123/a_abc123.gif?size=1024"
        );
    }

    #[test]
    fn test_default_avatar_new_style_account() {
        // (123456789012345678 >> 22) % 6 == 0
        assert_eq!(
            avatar_url("123456789012345678", None, "0", 256),
            "https://cdn.discordapp.com/embed/avatars/0.png"
        );
    }

    #[test]
    fn test_default_avatar_legacy_discriminator() {
        // 1 % 5 == 1
        assert_eq!(
            avatar_url("123", None, "1", 256),
            "https://cdn.discordapp.com/embed/avatars/1.png"
        );
        // 9999 % 5 == 4
        assert_eq!(
            avatar_url("123", None, "9999", 256),
            "https://cdn.discordapp.com/embed/avatars/4.png"
        );
    }

    #[test]
    fn test_unparseable_inputs_resolve_to_index_zero() {
        assert_eq!(
            avatar_url("not-a-number", None, "0", 256),
            "https://cdn.discordapp.com/embed/avatars/0.png"
        );
        assert_eq!(
            avatar_url("123", None, "not-a-number", 256),
            "https://cdn.discordapp.com/embed/avatars/0.png"
        );
    }

    #[test]
    fn test_deterministic() {
        let a = avatar_url("123456789012345678", None, "0", 256);
        let b = avatar_url("123456789012345678", None, "0", 256);
        assert_eq!(a, b);
    }
}
