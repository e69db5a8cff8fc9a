//! # portal-minecraft
//!
//! Minecraft Java Edition server status client.
//!
//! Implements the Server List Ping exchange (handshake, status request,
//! ping/pong latency probe) directly over TCP, plus extraction of the clean
//! game version from the raw version strings proxies and server forks report.

pub mod ping;
pub mod protocol;
pub mod version;

// Re-export commonly used types at crate root
pub use ping::{status, status_with_timeout, PingError, Players, ServerStatus, DEFAULT_PORT};
pub use version::extract_game_version;
