//! Discord REST API wrapper

mod discord_api;

pub use discord_api::{DiscordApi, DiscordApiError, MAX_MEMBER_PAGES, MEMBER_PAGE_SIZE};
