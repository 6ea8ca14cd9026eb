use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::Embedder;
use crate::presentation::config::{EmbeddingProvider, OpenAiSettings};

use super::{MockEmbedder, OpenAiEmbedder};

pub struct EmbedderFactory;

#[derive(Debug, thiserror::Error)]
pub enum EmbedderFactoryError {
    #[error("missing API key: OpenAI embedder requires openai.api_key")]
    MissingApiKey,
}

impl EmbedderFactory {
    pub fn create(
        provider: EmbeddingProvider,
        settings: &OpenAiSettings,
        dimension: usize,
    ) -> Result<Arc<dyn Embedder>, EmbedderFactoryError> {
        match provider {
            EmbeddingProvider::Mock => {
                tracing::info!(dimension, "Using offline hashing embedder");
                Ok(Arc::new(MockEmbedder::new(dimension)))
            }
            EmbeddingProvider::OpenAi => {
                let key = settings
                    .api_key
                    .clone()
                    .filter(|k| !k.is_empty())
                    .ok_or(EmbedderFactoryError::MissingApiKey)?;
                tracing::info!(model = %settings.embedding_model, "Using OpenAI embedding model");
                Ok(Arc::new(OpenAiEmbedder::new(
                    key,
                    settings.embedding_model.clone(),
                    &settings.base_url,
                    Duration::from_secs(settings.request_timeout_secs),
                )))
            }
        }
    }
}
