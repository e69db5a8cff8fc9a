//! Resilient HTTP fetch client.
//!
//! Wraps a shared `reqwest` client with a bounded retry loop. Only
//! transport-level failures (DNS, connect, timeout) are retried, with a
//! fixed delay between attempts; a completed round trip is returned as-is
//! regardless of status code, so callers interpret HTTP errors themselves.
//! Every attempt is logged with method, URL, attempt index and elapsed time.

use std::time::{Duration, Instant};

use portal_common::HttpConfig;
use reqwest::{redirect, Client, Method, Proxy, Response};

/// Additional attempts after the first failed one
pub const DEFAULT_RETRIES: u32 = 3;

/// Fixed delay between attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Error type for fetch client operations
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    #[error("Invalid proxy URL: {0}")]
    Proxy(String),

    #[error("Transport error after {attempts} attempts: {source}")]
    Transport {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },
}

/// Per-request options: headers, query parameters, JSON body, retry policy
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub retries: u32,
    pub retry_delay: Duration,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
            retries: DEFAULT_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RequestOptions {
    /// Add a request header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Override the retry policy
    #[must_use]
    pub fn retry(mut self, retries: u32, retry_delay: Duration) -> Self {
        self.retries = retries;
        self.retry_delay = retry_delay;
        self
    }
}

/// Shared outbound HTTP client
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
}

impl FetchClient {
    /// Build the shared client: fixed request timeout, JSON accept header,
    /// and an optional upstream proxy taken from configuration.
    pub fn new(app_name: &str, config: &HttpConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .user_agent(format!("{app_name}/1.0"))
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(redirect::Policy::none());

        if let Some(proxy_url) = &config.proxy {
            let proxy = Proxy::all(proxy_url).map_err(|e| FetchError::Proxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| FetchError::Build(e.to_string()))?;

        tracing::info!(
            timeout_secs = config.timeout_secs,
            proxy = config.proxy.as_deref().unwrap_or("none"),
            "HTTP client initialized"
        );

        Ok(Self { client })
    }

    /// Perform a request with bounded retry on transport failures.
    ///
    /// HTTP-level 4xx/5xx are never retried here; they are returned for the
    /// caller to interpret. After the final transport failure the error is
    /// raised, not swallowed.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response, FetchError> {
        let total_attempts = options.retries + 1;
        let mut attempt: u32 = 1;

        loop {
            tracing::debug!(
                method = %method,
                url = %url,
                attempt,
                total_attempts,
                "Requesting"
            );

            let mut request = self.client.request(method.clone(), url);
            if !options.query.is_empty() {
                request = request.query(&options.query);
            }
            for (name, value) in &options.headers {
                request = request.header(name.as_str(), value.as_str());
            }
            if let Some(body) = &options.body {
                request = request.json(body);
            }

            let started = Instant::now();
            match request.send().await {
                Ok(response) => {
                    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                    let status = response.status();

                    if status.is_success() {
                        tracing::info!(method = %method, url = %url, status = status.as_u16(), attempt, elapsed_ms, "Finished");
                    } else if status.is_redirection() {
                        tracing::warn!(method = %method, url = %url, status = status.as_u16(), attempt, elapsed_ms, "Finished");
                    } else {
                        tracing::error!(method = %method, url = %url, status = status.as_u16(), attempt, elapsed_ms, "Finished");
                    }

                    return Ok(response);
                }
                Err(e) => {
                    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

                    if attempt >= total_attempts {
                        tracing::error!(
                            method = %method,
                            url = %url,
                            attempt,
                            total_attempts,
                            elapsed_ms,
                            error = %e,
                            "Max retries reached"
                        );
                        return Err(FetchError::Transport {
                            attempts: total_attempts,
                            source: e,
                        });
                    }

                    tracing::warn!(
                        method = %method,
                        url = %url,
                        attempt,
                        total_attempts,
                        elapsed_ms,
                        error = %e,
                        retry_delay_ms = options.retry_delay.as_millis() as u64,
                        "Request error, retrying"
                    );
                    attempt += 1;
                    tokio::time::sleep(options.retry_delay).await;
                }
            }
        }
    }

    /// GET shorthand, delegates to [`FetchClient::request`]
    pub async fn get(&self, url: &str, options: RequestOptions) -> Result<Response, FetchError> {
        self.request(Method::GET, url, options).await
    }

    /// POST shorthand, delegates to [`FetchClient::request`]
    pub async fn post(&self, url: &str, options: RequestOptions) -> Result<Response, FetchError> {
        self.request(Method::POST, url, options).await
    }
}
