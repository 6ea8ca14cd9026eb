use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Reporter, ReporterError};

/// Posts messages through Slack's `chat.postMessage` Web API method.
pub struct SlackReporter {
    client: Client,
    base_url: String,
    bot_token: String,
    channel: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl SlackReporter {
    pub fn new(bot_token: String, channel: String, base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bot_token,
            channel,
            timeout,
        }
    }
}

#[async_trait]
impl Reporter for SlackReporter {
    #[tracing::instrument(skip_all, fields(channel = %self.channel, length = message.len()))]
    async fn post(&self, message: &str) -> Result<(), ReporterError> {
        let response = self
            .client
            .post(format!("{}/chat.postMessage", self.base_url))
            .bearer_auth(&self.bot_token)
            .timeout(self.timeout)
            .json(&PostMessageRequest {
                channel: &self.channel,
                text: message,
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ReporterError::Timeout(self.timeout)
                } else {
                    ReporterError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ReporterError::RequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let body: PostMessageResponse = response
            .json()
            .await
            .map_err(|e| ReporterError::RequestFailed(format!("invalid response: {e}")))?;

        if !body.ok {
            return Err(ReporterError::Rejected(
                body.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }

        tracing::info!("Message posted to Slack");
        Ok(())
    }
}
