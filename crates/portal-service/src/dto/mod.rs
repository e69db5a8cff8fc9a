//! Response DTOs

mod responses;

pub use responses::{
    HealthChecks, HealthResponse, McStatusResponse, PlayerInfo, ReadinessResponse, RefreshResponse,
};
