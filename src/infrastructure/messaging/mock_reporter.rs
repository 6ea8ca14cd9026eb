use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{Reporter, ReporterError};

/// Records every message it receives; optionally rejects them all.
#[derive(Default)]
pub struct MockReporter {
    messages: Mutex<Vec<String>>,
    reject: bool,
}

impl MockReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Reporter for MockReporter {
    async fn post(&self, message: &str) -> Result<(), ReporterError> {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }

        if self.reject {
            return Err(ReporterError::Rejected("channel_not_found".to_string()));
        }
        Ok(())
    }
}
