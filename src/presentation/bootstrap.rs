use std::sync::Arc;

use crate::application::ports::{Reporter, TextSplitterError};
use crate::application::services::{
    AnsweringService, IngestionService, QaPipeline, RetrievalService,
};
use crate::infrastructure::llm::{EmbedderFactory, EmbedderFactoryError, OpenAiClient};
use crate::infrastructure::messaging::{LogReporter, SlackReporter};
use crate::infrastructure::persistence::InMemoryVectorStore;
use crate::infrastructure::text_processing::{FixedWindowSplitter, PdfAdapter};
use crate::presentation::config::{ConfigError, Settings};

pub type AppPipeline = QaPipeline<PdfAdapter, FixedWindowSplitter, InMemoryVectorStore, OpenAiClient>;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Splitter(#[from] TextSplitterError),

    #[error(transparent)]
    Embedder(#[from] EmbedderFactoryError),
}

/// Wires the production adapters into a pipeline with a fresh index.
pub fn build_pipeline(
    settings: &Settings,
    reporting_enabled: bool,
) -> Result<AppPipeline, BootstrapError> {
    settings.validate(reporting_enabled)?;

    let splitter = Arc::new(FixedWindowSplitter::new(
        settings.pdf.chunk_size,
        settings.pdf.chunk_overlap,
    )?);
    let embedder = EmbedderFactory::create(
        settings.openai.embedding_provider,
        &settings.openai,
        settings.vector_store.dimension,
    )?;
    let vector_store = Arc::new(InMemoryVectorStore::new(settings.vector_store.dimension));
    let retrieval = Arc::new(RetrievalService::new(
        embedder,
        vector_store,
        settings.vector_store.similarity_top_k,
    ));

    let api_key = settings
        .openai
        .api_key
        .clone()
        .ok_or_else(|| ConfigError::invalid("openai.api_key", "must be set"))?;
    let llm_client = Arc::new(OpenAiClient::new(
        api_key,
        settings.openai.model.clone(),
        &settings.openai.base_url,
        settings.openai.temperature,
        settings.openai.max_tokens,
        settings.openai.request_timeout(),
    ));

    let ingestion = IngestionService::new(
        Arc::new(PdfAdapter::new()),
        splitter,
        Arc::clone(&retrieval),
        settings.pdf.max_ingested_chunks,
    );
    let answering = AnsweringService::new(
        retrieval,
        llm_client,
        settings.pipeline.answer_concurrency,
    );

    let reporter = if reporting_enabled {
        Some(slack_reporter(settings)?)
    } else {
        tracing::info!("Reporting disabled; results are only printed");
        None
    };

    Ok(QaPipeline::new(
        ingestion,
        answering,
        reporter,
        Arc::new(LogReporter),
    ))
}

fn slack_reporter(settings: &Settings) -> Result<Arc<dyn Reporter>, ConfigError> {
    let token = settings
        .slack
        .bot_token
        .clone()
        .ok_or_else(|| ConfigError::invalid("slack.bot_token", "must be set"))?;
    let channel = settings
        .slack
        .channel
        .clone()
        .ok_or_else(|| ConfigError::invalid("slack.channel", "must be set"))?;

    Ok(Arc::new(SlackReporter::new(
        token,
        channel,
        &settings.slack.base_url,
        settings.slack.request_timeout(),
    )))
}
