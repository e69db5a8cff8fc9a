//! # portal-api
//!
//! REST API server for the community portal backend.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

// Re-export server entry points for integration tests
pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
