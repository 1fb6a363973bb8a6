use thiserror::Error;

/// Failures that can occur while fetching or normalizing dashboard data.
///
/// None of these reach the UI; the frontend logs them and keeps the
/// dashboard in its unloaded state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("could not decode response body: {0}")]
    Decode(String),

    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
