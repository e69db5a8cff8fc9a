//! Server List Ping tests against a loopback fake server

use std::time::Duration;

use portal_minecraft::protocol::{read_packet, write_packet, write_string};
use portal_minecraft::{status_with_timeout, PingError};
use tokio::net::TcpListener;

/// Serve one status exchange: handshake, status response, pong echo
async fn spawn_fake_server(status_json: &str) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let status_json = status_json.to_string();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        // Handshake and status request from the client
        read_packet(&mut stream).await.unwrap();
        read_packet(&mut stream).await.unwrap();

        let mut payload = Vec::new();
        write_string(&mut payload, &status_json);
        write_packet(&mut stream, 0x00, &payload).await.unwrap();

        // Echo the ping payload back as the pong
        if let Ok((id, body)) = read_packet(&mut stream).await {
            let _ = write_packet(&mut stream, id, &body).await;
        }
    });

    port
}

#[tokio::test]
async fn status_reads_version_players_and_motd() {
    let port = spawn_fake_server(
        r#"{
            "version": {"name": "Paper 1.20.4", "protocol": 765},
            "players": {"online": 3, "max": 60},
            "description": {"text": "Gensokyo ", "extra": [{"text": "Reimagined"}]}
        }"#,
    )
    .await;

    let status = status_with_timeout("127.0.0.1", port, Duration::from_secs(2))
        .await
        .unwrap();

    assert_eq!(status.version.as_deref(), Some("Paper 1.20.4"));
    assert_eq!(status.motd.as_deref(), Some("Gensokyo Reimagined"));
    let players = status.players.unwrap();
    assert_eq!(players.online, 3);
    assert_eq!(players.max, 60);
    assert!(status.latency_ms >= 0.0);
}

#[tokio::test]
async fn status_tolerates_minimal_payload() {
    let port = spawn_fake_server("{}").await;

    let status = status_with_timeout("127.0.0.1", port, Duration::from_secs(2))
        .await
        .unwrap();

    assert!(status.version.is_none());
    assert!(status.players.is_none());
    assert!(status.motd.is_none());
}

#[tokio::test]
async fn offline_server_is_an_io_error() {
    // Nothing listens on port 1
    let err = status_with_timeout("127.0.0.1", 1, Duration::from_secs(1))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Server is offline");
}

#[tokio::test]
async fn unresponsive_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        // Accept and go silent
        let _guard = listener.accept().await;
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let err = status_with_timeout("127.0.0.1", port, Duration::from_millis(200))
        .await
        .unwrap_err();

    assert!(matches!(err, PingError::Timeout));
    assert_eq!(err.user_message(), "Connection Timed Out");
}
