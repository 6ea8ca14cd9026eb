use async_trait::async_trait;

use crate::application::ports::{Reporter, ReporterError};

/// Writes messages to the log. Used as the last-resort channel when the
/// primary reporter is unavailable.
#[derive(Default)]
pub struct LogReporter;

#[async_trait]
impl Reporter for LogReporter {
    async fn post(&self, message: &str) -> Result<(), ReporterError> {
        tracing::warn!(target: "pdfqa::report", %message, "Report delivered to log");
        Ok(())
    }
}
