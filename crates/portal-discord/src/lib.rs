//! # portal-discord
//!
//! Outbound Discord REST layer.
//!
//! ## Features
//!
//! - **Fetch Client**: shared `reqwest` client with bounded retry, fixed
//!   retry delay, request timing, and tiered per-attempt logging
//! - **REST API**: guild member pagination (cursor-based, capped), single
//!   user lookup, and guild role listing

pub mod http;
pub mod rest;

// Re-export commonly used types at crate root
pub use http::{FetchClient, FetchError, RequestOptions, DEFAULT_RETRIES, DEFAULT_RETRY_DELAY};
pub use rest::{DiscordApi, DiscordApiError, MAX_MEMBER_PAGES, MEMBER_PAGE_SIZE};
