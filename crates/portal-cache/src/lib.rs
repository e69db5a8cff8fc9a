//! # portal-cache
//!
//! Redis caching layer for the portal backend.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Cache Facade**: get/set of opaque strings with TTL; storage failures
//!   degrade to cache misses instead of propagating
//! - **Member Snapshots**: the raw guild member list cached as a single unit

pub mod pool;
pub mod store;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export store types
pub use store::{CacheStore, MemberSnapshotStore};
