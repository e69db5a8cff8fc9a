//! Server List Ping status lookup.
//!
//! Dials the server, performs the handshake/status exchange, then a
//! ping/pong round trip for latency. Every step shares one overall
//! deadline so a wedged server cannot hang a request.

use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::net::{lookup_host, TcpStream};
use tokio::time::timeout;

use crate::protocol::{
    read_packet, read_string, write_packet, write_string, write_varint, ProtocolError,
};

/// Default Minecraft Java Edition port
pub const DEFAULT_PORT: u16 = 25565;

/// Overall deadline for the whole exchange
const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Protocol version sent during the status handshake; -1 means "just asking"
const STATUS_PROTOCOL_VERSION: i32 = -1;

const HANDSHAKE_PACKET: i32 = 0x00;
const STATUS_REQUEST_PACKET: i32 = 0x00;
const PING_PACKET: i32 = 0x01;

/// Status lookup errors
#[derive(Debug, thiserror::Error)]
pub enum PingError {
    #[error("Hostname did not resolve: {0}")]
    UnknownHost(String),

    #[error("Connection timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Malformed status payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected packet id {0} in status response")]
    UnexpectedPacket(i32),
}

impl PingError {
    /// Short user-facing reason for the status endpoint
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::UnknownHost(_) => "Invalid Hostname",
            Self::Timeout => "Connection Timed Out",
            _ => "Server is offline",
        }
    }
}

/// Player counts reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Players {
    pub online: u32,
    pub max: u32,
}

/// Resolved server status
#[derive(Debug, Clone)]
pub struct ServerStatus {
    /// Raw version string (e.g. `"Velocity 1.7.2-1.21.11"`)
    pub version: Option<String>,
    /// Message of the day, flattened to plain text
    pub motd: Option<String>,
    pub players: Option<Players>,
    /// Ping/pong round-trip time in milliseconds
    pub latency_ms: f64,
}

/// Query a server with the default 5 second deadline
pub async fn status(host: &str, port: u16) -> Result<ServerStatus, PingError> {
    status_with_timeout(host, port, STATUS_TIMEOUT).await
}

/// Query a server with a custom overall deadline
pub async fn status_with_timeout(
    host: &str,
    port: u16,
    deadline: Duration,
) -> Result<ServerStatus, PingError> {
    timeout(deadline, exchange(host, port))
        .await
        .map_err(|_| PingError::Timeout)?
}

async fn exchange(host: &str, port: u16) -> Result<ServerStatus, PingError> {
    let mut addrs = lookup_host((host, port))
        .await
        .map_err(|_| PingError::UnknownHost(host.to_string()))?;
    let addr = addrs
        .next()
        .ok_or_else(|| PingError::UnknownHost(host.to_string()))?;

    let mut stream = TcpStream::connect(addr).await?;

    // Handshake: protocol version, address, port, next state 1 (status)
    let mut handshake = Vec::new();
    write_varint(&mut handshake, STATUS_PROTOCOL_VERSION);
    write_string(&mut handshake, host);
    handshake.extend_from_slice(&port.to_be_bytes());
    write_varint(&mut handshake, 1);
    write_packet(&mut stream, HANDSHAKE_PACKET, &handshake).await?;

    // Status request/response
    write_packet(&mut stream, STATUS_REQUEST_PACKET, &[]).await?;
    let (packet_id, payload) = read_packet(&mut stream).await?;
    if packet_id != STATUS_REQUEST_PACKET {
        return Err(PingError::UnexpectedPacket(packet_id));
    }
    let raw = read_string(&payload)?;
    let payload: StatusPayload = serde_json::from_str(&raw)?;

    // Ping/pong round trip for latency; tolerate servers that close instead
    let started = Instant::now();
    write_packet(&mut stream, PING_PACKET, &0i64.to_be_bytes()).await?;
    if let Err(e) = read_packet(&mut stream).await {
        tracing::debug!(error = %e, "No pong before close, keeping measured latency");
    }
    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

    Ok(ServerStatus {
        version: payload.version.map(|v| v.name),
        motd: payload.description.map(|d| d.into_text()),
        players: payload.players,
        latency_ms,
    })
}

#[derive(Debug, Deserialize)]
struct StatusPayload {
    #[serde(default)]
    version: Option<VersionInfo>,
    #[serde(default)]
    players: Option<Players>,
    #[serde(default)]
    description: Option<Motd>,
}

#[derive(Debug, Deserialize)]
struct VersionInfo {
    name: String,
}

/// The MOTD is either a plain string or a chat component tree
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Motd {
    Text(String),
    Chat(ChatComponent),
}

#[derive(Debug, Deserialize)]
struct ChatComponent {
    #[serde(default)]
    text: String,
    #[serde(default)]
    extra: Vec<Motd>,
}

impl Motd {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Chat(component) => {
                let mut out = component.text;
                for part in component.extra {
                    out.push_str(&part.into_text());
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motd_plain_string() {
        let motd: Motd = serde_json::from_str(r#""A Minecraft Server""#).unwrap();
        assert_eq!(motd.into_text(), "A Minecraft Server");
    }

    #[test]
    fn test_motd_chat_component_with_extra() {
        let motd: Motd = serde_json::from_str(
            r#"{"text": "Welcome ", "extra": [{"text": "to "}, {"text": "Gensokyo"}]}"#,
        )
        .unwrap();
        assert_eq!(motd.into_text(), "Welcome to Gensokyo");
    }

    #[test]
    fn test_status_payload_tolerates_missing_fields() {
        let payload: StatusPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.version.is_none());
        assert!(payload.players.is_none());
        assert!(payload.description.is_none());
    }

    #[test]
    fn test_full_status_payload() {
        let payload: StatusPayload = serde_json::from_str(
            r#"{
                "version": {"name": "Paper 1.20.4", "protocol": 765},
                "players": {"online": 12, "max": 100},
                "description": "motd"
            }"#,
        )
        .unwrap();
        assert_eq!(payload.version.unwrap().name, "Paper 1.20.4");
        assert_eq!(payload.players.unwrap(), Players { online: 12, max: 100 });
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            PingError::UnknownHost("x".to_string()).user_message(),
            "Invalid Hostname"
        );
        assert_eq!(PingError::Timeout.user_message(), "Connection Timed Out");
        assert_eq!(
            PingError::Io(std::io::Error::other("refused")).user_message(),
            "Server is offline"
        );
    }
}
