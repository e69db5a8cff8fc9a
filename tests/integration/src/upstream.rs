//! Fake Discord upstream
//!
//! A loopback axum server standing in for the Discord REST API. Member
//! pages are served in one short batch (so the pager stops after a single
//! request), users and roles from fixed maps.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

/// Scripted Discord upstream state
#[derive(Clone, Default)]
pub struct FakeDiscord {
    members: Arc<Vec<serde_json::Value>>,
    users: Arc<HashMap<String, serde_json::Value>>,
    roles: Arc<Vec<serde_json::Value>>,
    member_hits: Arc<AtomicUsize>,
}

impl FakeDiscord {
    /// Create an upstream serving the given member list as one short page
    #[must_use]
    pub fn new(members: Vec<serde_json::Value>) -> Self {
        Self {
            members: Arc::new(members),
            ..Self::default()
        }
    }

    /// Register a user payload for `/users/{id}`
    #[must_use]
    pub fn with_user(mut self, id: &str, payload: serde_json::Value) -> Self {
        let mut users = (*self.users).clone();
        users.insert(id.to_string(), payload);
        self.users = Arc::new(users);
        self
    }

    /// Register the guild role list
    #[must_use]
    pub fn with_roles(mut self, roles: Vec<serde_json::Value>) -> Self {
        self.roles = Arc::new(roles);
        self
    }

    /// Number of member page requests served so far
    pub fn member_hits(&self) -> usize {
        self.member_hits.load(Ordering::SeqCst)
    }

    /// Bind and serve on an ephemeral loopback port
    pub async fn spawn(self) -> SocketAddr {
        let app = Router::new()
            .route("/guilds/:guild_id/members", get(guild_members))
            .route("/guilds/:guild_id/roles", get(guild_roles))
            .route("/users/:user_id", get(get_user))
            .with_state(self);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        addr
    }
}

async fn guild_members(State(state): State<FakeDiscord>) -> Json<Vec<serde_json::Value>> {
    let index = state.member_hits.fetch_add(1, Ordering::SeqCst);
    // One short page, then exhaustion
    if index == 0 {
        Json((*state.members).clone())
    } else {
        Json(Vec::new())
    }
}

async fn guild_roles(State(state): State<FakeDiscord>) -> Json<Vec<serde_json::Value>> {
    Json((*state.roles).clone())
}

async fn get_user(State(state): State<FakeDiscord>, Path(user_id): Path<String>) -> Response {
    match state.users.get(&user_id) {
        Some(payload) => Json(payload.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
