use std::time::Duration;

use async_trait::async_trait;

/// Outbound channel for run results and failure notices.
#[async_trait]
pub trait Reporter: Send + Sync {
    async fn post(&self, message: &str) -> Result<(), ReporterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReporterError {
    #[error("post request failed: {0}")]
    RequestFailed(String),
    #[error("channel rejected message: {0}")]
    Rejected(String),
    #[error("post request timed out after {0:?}")]
    Timeout(Duration),
}
