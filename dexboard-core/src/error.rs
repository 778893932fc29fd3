//! Error types for the dashboard

use thiserror::Error;

/// Dashboard-wide error type
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    pub fn api(msg: impl Into<String>) -> Self {
        DashboardError::Api(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        DashboardError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        DashboardError::Parse(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        DashboardError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        DashboardError::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        DashboardError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        DashboardError::Internal(msg.into())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
