//! TTL cache facade.
//!
//! Get/set of opaque string values under namespaced keys
//! (`"<service>:<entity>:<id>"`). Every storage error is caught and logged:
//! a failed `get` is a cache miss, a failed `set` is a no-op. Cache
//! unavailability must never fail a request; it only removes the speed-up.

use crate::pool::{RedisPool, RedisPoolConfig};

/// Error-absorbing cache facade over the Redis pool.
///
/// Holds `None` when the pool could not be constructed at startup, in which
/// case every operation behaves as a miss.
#[derive(Debug, Clone)]
pub struct CacheStore {
    pool: Option<RedisPool>,
}

impl CacheStore {
    /// Create a cache store backed by an existing pool
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a cache store from pool configuration.
    ///
    /// A pool that cannot be constructed (malformed URL) yields a disabled
    /// store rather than an error: the service runs uncached.
    #[must_use]
    pub fn connect(config: RedisPoolConfig) -> Self {
        match RedisPool::new(config) {
            Ok(pool) => Self::new(pool),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create Redis pool, caching disabled");
                Self { pool: None }
            }
        }
    }

    /// A store with no backing pool; every get is a miss, every set a no-op
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Whether a backing pool exists (it may still be unreachable)
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    /// Get a cached value, treating any storage error as a miss
    pub async fn get(&self, key: &str) -> Option<String> {
        let pool = self.pool.as_ref()?;
        match pool.get_string(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Cache GET error");
                None
            }
        }
    }

    /// Cache a value with a TTL in seconds, absorbing any storage error
    pub async fn set(&self, key: &str, value: &str, ttl_seconds: u64) {
        let Some(pool) = self.pool.as_ref() else {
            return;
        };
        if let Err(e) = pool.set_string(key, value, ttl_seconds).await {
            tracing::warn!(key = %key, error = %e, "Cache SET error");
        }
    }

    /// Ping the backing store; `false` when disabled or unreachable
    pub async fn health_check(&self) -> bool {
        match self.pool.as_ref() {
            Some(pool) => pool.health_check().await.is_ok(),
            None => false,
        }
    }

    /// Release the backing pool during shutdown
    pub fn close(&self) {
        if let Some(pool) = self.pool.as_ref() {
            pool.close();
        }
    }
}
