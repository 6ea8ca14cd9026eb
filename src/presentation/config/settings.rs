use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use super::ConfigError;

/// `pdf` and `vector_store` have no serde defaults: a configuration that
/// leaves out chunking or index sizing fails to load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub pdf: PdfSettings,
    pub vector_store: VectorStoreSettings,
    #[serde(default)]
    pub openai: OpenAiSettings,
    #[serde(default)]
    pub slack: SlackSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub pipeline: PipelineSettings,
}

const DEFAULT_MAX_INGESTED_CHUNKS: usize = 8;

fn default_max_ingested_chunks() -> usize {
    DEFAULT_MAX_INGESTED_CHUNKS
}

#[derive(Debug, Clone, Deserialize)]
pub struct PdfSettings {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    /// Only the first `max_ingested_chunks` chunks of a document are indexed.
    #[serde(default = "default_max_ingested_chunks")]
    pub max_ingested_chunks: usize,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
            max_ingested_chunks: DEFAULT_MAX_INGESTED_CHUNKS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VectorStoreSettings {
    pub dimension: usize,
    pub similarity_top_k: usize,
}

impl Default for VectorStoreSettings {
    fn default() -> Self {
        Self {
            dimension: 1536,
            similarity_top_k: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProvider {
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    Mock,
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub embedding_model: String,
    pub embedding_provider: EmbeddingProvider,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub request_timeout_secs: u64,
}

impl OpenAiSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            embedding_provider: EmbeddingProvider::OpenAi,
            temperature: 0.0,
            max_tokens: None,
            request_timeout_secs: 60,
        }
    }
}

impl fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("embedding_model", &self.embedding_model)
            .field("embedding_provider", &self.embedding_provider)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SlackSettings {
    pub bot_token: Option<String>,
    pub channel: Option<String>,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl SlackSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for SlackSettings {
    fn default() -> Self {
        Self {
            bot_token: None,
            channel: None,
            base_url: "https://slack.com/api".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl fmt::Debug for SlackSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackSettings")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[REDACTED]"))
            .field("channel", &self.channel)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
    /// Also write logs to this file when set.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Questions answered at once. Results keep question order either way.
    pub answer_concurrency: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            answer_concurrency: 1,
        }
    }
}

impl Settings {
    /// Checks every setting the pipeline depends on. Slack credentials are
    /// only required when `reporting_enabled` is set.
    pub fn validate(&self, reporting_enabled: bool) -> Result<(), ConfigError> {
        if self.pdf.chunk_size == 0 {
            return Err(ConfigError::invalid(
                "pdf.chunk_size",
                "must be greater than zero",
            ));
        }
        if self.pdf.chunk_overlap >= self.pdf.chunk_size {
            return Err(ConfigError::invalid(
                "pdf.chunk_overlap",
                format!(
                    "must be smaller than pdf.chunk_size ({})",
                    self.pdf.chunk_size
                ),
            ));
        }
        if self.pdf.max_ingested_chunks == 0 {
            return Err(ConfigError::invalid(
                "pdf.max_ingested_chunks",
                "must be greater than zero",
            ));
        }
        if self.vector_store.dimension == 0 {
            return Err(ConfigError::invalid(
                "vector_store.dimension",
                "must be greater than zero",
            ));
        }
        if self.vector_store.similarity_top_k == 0 {
            return Err(ConfigError::invalid(
                "vector_store.similarity_top_k",
                "must be greater than zero",
            ));
        }
        if self.pipeline.answer_concurrency == 0 {
            return Err(ConfigError::invalid(
                "pipeline.answer_concurrency",
                "must be greater than zero",
            ));
        }

        require("openai.model", Some(&self.openai.model))?;
        require("openai.embedding_model", Some(&self.openai.embedding_model))?;
        require("openai.api_key", self.openai.api_key.as_ref())?;

        if reporting_enabled {
            require("slack.bot_token", self.slack.bot_token.as_ref())?;
            require("slack.channel", self.slack.channel.as_ref())?;
        }

        Ok(())
    }
}

fn require(field: &'static str, value: Option<&String>) -> Result<(), ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ConfigError::invalid(field, "must be set")),
    }
}
