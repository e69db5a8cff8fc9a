//! Service layer error types

use portal_common::AppError;
use portal_discord::DiscordApiError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Required configuration is missing
    Config(String),

    /// Upstream rejected a single-shot lookup; carries the upstream status
    Upstream(u16),

    /// Transport or decoding failure talking to an external service
    External(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Upstream(status) => write!(f, "Upstream responded with status {status}"),
            Self::External(msg) => write!(f, "External service error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an external service error
    pub fn external(msg: impl Into<String>) -> Self {
        Self::External(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Config(_) | Self::External(_) => 500,
            Self::Upstream(status) => *status,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Upstream(_) => "UPSTREAM_ERROR",
            Self::External(_) => "EXTERNAL_SERVICE_ERROR",
        }
    }
}

impl From<DiscordApiError> for ServiceError {
    fn from(err: DiscordApiError) -> Self {
        match err {
            DiscordApiError::MissingToken => Self::config("Discord bot token is not configured"),
            DiscordApiError::Status(status) => Self::Upstream(status),
            other => Self::external(other.to_string()),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { resource, id } => AppError::NotFound(format!("{resource} {id}")),
            ServiceError::Config(msg) => AppError::Config(msg),
            ServiceError::Upstream(status) => AppError::Upstream(status),
            ServiceError::External(msg) => AppError::ExternalService(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
