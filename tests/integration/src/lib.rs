//! Integration test utilities for the portal backend
//!
//! Provides helpers for spawning the real API server on a loopback port,
//! plus a fake Discord upstream so the fetch/pager paths cross a real HTTP
//! boundary.

pub mod helpers;
pub mod upstream;

pub use helpers::*;
pub use upstream::*;
