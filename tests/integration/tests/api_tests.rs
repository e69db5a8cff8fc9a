//! API integration tests
//!
//! Spawn the real server against a fake Discord upstream; Redis points at a
//! closed port so the cache degrades to misses and every request runs the
//! full pipeline.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use integration_tests::{assert_json, assert_status, test_config, FakeDiscord, TestServer};
use reqwest::StatusCode;
use serde_json::{json, Value};

static ROSTER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Write a roster document to a temp file and return its path
fn write_roster(roster: &Value) -> String {
    let unique = ROSTER_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "portal-roster-{}-{unique}.json",
        std::process::id()
    ));
    std::fs::write(&path, roster.to_string()).expect("write roster file");
    path.to_string_lossy().into_owned()
}

fn dev_member(id: u64, username: &str) -> Value {
    json!({
        "user": {"id": id.to_string(), "username": username},
        "roles": ["role-dev"]
    })
}

// ============================================================================
// Health Checks
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let upstream = FakeDiscord::new(vec![]).spawn().await;
    let server = TestServer::start(test_config(upstream)).await.unwrap();

    let response = server.get("/health").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready_with_degraded_cache() {
    let upstream = FakeDiscord::new(vec![]).spawn().await;
    let server = TestServer::start(test_config(upstream)).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["cache"], "degraded");
}

// ============================================================================
// Contributors
// ============================================================================

#[tokio::test]
async fn test_contributors_pipeline() {
    let upstream = FakeDiscord::new(vec![
        dev_member(1, "alice"),
        dev_member(2, "bob"),
        json!({"user": {"id": "3", "username": "mallory"}, "roles": []}),
    ]);
    let addr = upstream.clone().spawn().await;

    let mut config = test_config(addr);
    config.discord.team_roster_path = Some(write_roster(&json!({
        "teams": [{"name": "Developers", "role_ids": ["role-dev"]}],
        "overrides": {"2": {"position": "Lead Developer"}}
    })));
    let server = TestServer::start(config).await.unwrap();

    let response = server.get("/api/community/contributors").await.unwrap();
    let teams: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let team = &teams[0];
    assert_eq!(team["name"], "Developers");
    let list = team["list"].as_array().unwrap();
    assert_eq!(list.len(), 2, "unmatched members are omitted");
    assert_eq!(list[0]["name"], "alice");
    assert_eq!(list[0]["position"], "Developers");
    assert_eq!(list[0]["avatarUseGithub"], false);
    assert_eq!(list[0]["contact"]["discord"], "alice");
    assert_eq!(list[1]["position"], "Lead Developer");
}

#[tokio::test]
async fn test_contributors_refresh_is_fire_and_forget() {
    let upstream = FakeDiscord::new(vec![dev_member(1, "alice")]);
    let addr = upstream.clone().spawn().await;
    let server = TestServer::start(test_config(addr)).await.unwrap();

    let response = server
        .post_empty("/api/community/contributors/refresh")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "refreshing");

    // The refresh runs detached from the triggering request
    let mut waited = Duration::ZERO;
    while upstream.member_hits() == 0 {
        assert!(waited < Duration::from_secs(2), "refresh never hit upstream");
        tokio::time::sleep(Duration::from_millis(50)).await;
        waited += Duration::from_millis(50);
    }
}

// ============================================================================
// Avatar Redirect
// ============================================================================

#[tokio::test]
async fn test_avatar_redirect_animated() {
    let upstream = FakeDiscord::new(vec![])
        .with_user(
            "42",
            json!({"id": "42", "username": "u", "avatar": "a_hash", "discriminator": "0"}),
        )
        .spawn()
        .await;
    let server = TestServer::start(test_config(upstream)).await.unwrap();

    let response = server.get("/api/discord/avatar/42").await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()["location"],
        "https://cdn.discordapp.com/avatars/42/a_hash.gif?size=1024"
    );
}

#[tokio::test]
async fn test_avatar_redirect_default_avatar() {
    let upstream = FakeDiscord::new(vec![])
        .with_user(
            "123456789012345678",
            json!({"id": "123456789012345678", "username": "u", "avatar": null, "discriminator": "0"}),
        )
        .spawn()
        .await;
    let server = TestServer::start(test_config(upstream)).await.unwrap();

    let response = server.get("/api/discord/avatar/123456789012345678").await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()["location"],
        "https://cdn.discordapp.com/embed/avatars/0.png"
    );
}

#[tokio::test]
async fn test_avatar_unknown_user_is_404() {
    let upstream = FakeDiscord::new(vec![]).spawn().await;
    let server = TestServer::start(test_config(upstream)).await.unwrap();

    let response = server.get("/api/discord/avatar/777").await.unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_avatar_rejects_non_numeric_id() {
    let upstream = FakeDiscord::new(vec![]).spawn().await;
    let server = TestServer::start(test_config(upstream)).await.unwrap();

    let response = server.get("/api/discord/avatar/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Guild Roles
// ============================================================================

#[tokio::test]
async fn test_guild_roles_passthrough() {
    let upstream = FakeDiscord::new(vec![])
        .with_roles(vec![
            json!({"id": "1", "name": "Admin", "color": 16711680, "position": 5}),
        ])
        .spawn()
        .await;
    let server = TestServer::start(test_config(upstream)).await.unwrap();

    let response = server.get("/api/community/roles").await.unwrap();
    let roles: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(roles[0]["name"], "Admin");
    assert_eq!(roles[0]["color"], 16711680);
}

// ============================================================================
// Minecraft Status
// ============================================================================

#[tokio::test]
async fn test_mc_status_offline_is_not_an_error() {
    let upstream = FakeDiscord::new(vec![]).spawn().await;
    let server = TestServer::start(test_config(upstream)).await.unwrap();

    let response = server
        .get("/api/mc/status?ip=127.0.0.1&port=1")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["online"], false);
    assert_eq!(body["error"], "Server is offline");
    assert_eq!(body["port"], 1);
}

#[tokio::test]
async fn test_mc_status_requires_ip() {
    let upstream = FakeDiscord::new(vec![]).spawn().await;
    let server = TestServer::start(test_config(upstream)).await.unwrap();

    let response = server.get("/api/mc/status").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
