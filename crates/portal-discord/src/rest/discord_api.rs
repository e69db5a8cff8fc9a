//! Discord REST API wrapper.
//!
//! Pagination degrades to partial results: a non-200 page, a decode failure
//! or an exhausted-retries transport error stops the walk and returns what
//! was collected so far. Single-shot lookups (user, roles) surface upstream
//! rejections to the caller instead.

use portal_common::DiscordConfig;
use portal_core::{GuildMember, GuildRole, MemberUser};
use reqwest::StatusCode;

use crate::http::{FetchClient, FetchError, RequestOptions};

/// Members requested per page; a short page signals exhaustion
pub const MEMBER_PAGE_SIZE: usize = 1000;

/// Hard cap on page iterations (50 pages, up to 50 000 members)
pub const MAX_MEMBER_PAGES: usize = 50;

/// Error type for single-shot Discord lookups
#[derive(Debug, thiserror::Error)]
pub enum DiscordApiError {
    #[error("Discord bot token is not configured")]
    MissingToken,

    #[error("Discord responded with status {0}")]
    Status(u16),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to decode Discord response: {0}")]
    Decode(#[from] reqwest::Error),
}

impl DiscordApiError {
    /// Upstream status code, if this error carries one
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// Discord REST API client
#[derive(Debug, Clone)]
pub struct DiscordApi {
    fetch: FetchClient,
    api_base: String,
    bot_token: Option<String>,
}

impl DiscordApi {
    /// Create a new API wrapper around the shared fetch client
    #[must_use]
    pub fn new(fetch: FetchClient, config: &DiscordConfig) -> Self {
        Self {
            fetch,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: config.bot_token.clone(),
        }
    }

    fn authorized(&self) -> Option<RequestOptions> {
        let token = self.bot_token.as_ref()?;
        Some(RequestOptions::default().header("Authorization", format!("Bot {token}")))
    }

    /// Walk the cursor-paginated members endpoint until exhaustion.
    ///
    /// Never fails: a missing credential, a rejected page or a transport
    /// failure stops pagination and returns whatever has been accumulated.
    pub async fn fetch_all_members(&self, guild_id: &str) -> Vec<GuildMember> {
        let Some(base_options) = self.authorized() else {
            tracing::error!("Discord bot token missing, returning empty member list");
            return Vec::new();
        };

        let url = format!("{}/guilds/{guild_id}/members", self.api_base);
        let mut members: Vec<GuildMember> = Vec::new();
        let mut after = "0".to_string();

        for page in 0..MAX_MEMBER_PAGES {
            let options = base_options
                .clone()
                .query("limit", MEMBER_PAGE_SIZE.to_string())
                .query("after", after.clone());

            let response = match self.fetch.get(&url, options).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!(
                        guild_id = %guild_id,
                        page,
                        error = %e,
                        "Member page fetch failed, stopping with partial results"
                    );
                    break;
                }
            };

            if response.status() != StatusCode::OK {
                tracing::error!(
                    guild_id = %guild_id,
                    page,
                    status = response.status().as_u16(),
                    "Member page rejected, stopping with partial results"
                );
                break;
            }

            let batch: Vec<GuildMember> = match response.json().await {
                Ok(batch) => batch,
                Err(e) => {
                    tracing::error!(
                        guild_id = %guild_id,
                        page,
                        error = %e,
                        "Member page decode failed, stopping with partial results"
                    );
                    break;
                }
            };

            if batch.is_empty() {
                break;
            }

            let batch_len = batch.len();
            if let Some(last) = batch.last() {
                after.clone_from(&last.user.id);
            }
            members.extend(batch);

            // A short page means the guild is exhausted; only a full page
            // can imply more members exist.
            if batch_len < MEMBER_PAGE_SIZE {
                break;
            }
        }

        tracing::info!(guild_id = %guild_id, member_count = members.len(), "Fetched guild members");
        members
    }

    /// Fetch a single user by id
    pub async fn fetch_user(&self, user_id: &str) -> Result<MemberUser, DiscordApiError> {
        let options = self.authorized().ok_or(DiscordApiError::MissingToken)?;
        let url = format!("{}/users/{user_id}", self.api_base);

        let response = self.fetch.get(&url, options).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DiscordApiError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Fetch all roles of a guild
    pub async fn fetch_guild_roles(&self, guild_id: &str) -> Result<Vec<GuildRole>, DiscordApiError> {
        let options = self.authorized().ok_or(DiscordApiError::MissingToken)?;
        let url = format!("{}/guilds/{guild_id}/roles", self.api_base);

        let response = self.fetch.get(&url, options).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DiscordApiError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
