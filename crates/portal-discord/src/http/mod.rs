//! Resilient HTTP fetch client

mod fetch_client;

pub use fetch_client::{FetchClient, FetchError, RequestOptions, DEFAULT_RETRIES, DEFAULT_RETRY_DELAY};
