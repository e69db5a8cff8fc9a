//! Cache stores built on top of the Redis pool

mod cache_store;
mod member_snapshot;

pub use cache_store::CacheStore;
pub use member_snapshot::MemberSnapshotStore;
