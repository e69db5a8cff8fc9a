//! Minecraft server status lookup.
//!
//! Wraps the Server List Ping client and shapes the response the front end
//! expects. Lookup failures never become HTTP errors: an unreachable server
//! reports `online: false` with a human-readable reason.

use tracing::{info, instrument, warn};

use crate::dto::McStatusResponse;

/// Minecraft status service
pub struct MinecraftService;

impl MinecraftService {
    /// Query a Java Edition server's status
    #[instrument]
    pub async fn status(ip: &str, port: u16) -> McStatusResponse {
        info!(ip = %ip, port, "Checking Minecraft server status");

        match portal_minecraft::status(ip, port).await {
            Ok(status) => McStatusResponse::online(ip, port, &status),
            Err(e) => {
                warn!(ip = %ip, port, error = %e, "Minecraft status lookup failed");
                McStatusResponse::offline(ip, port, e.user_message())
            }
        }
    }
}
