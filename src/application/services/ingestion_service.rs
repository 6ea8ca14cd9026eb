use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{
    FileLoader, FileLoaderError, TextSplitter, TextSplitterError, VectorStore,
};
use crate::domain::Document;

use super::{RetrievalError, RetrievalService};

pub struct IngestionService<F, T, V>
where
    F: FileLoader + ?Sized,
    T: TextSplitter + ?Sized,
    V: VectorStore + ?Sized,
{
    file_loader: Arc<F>,
    text_splitter: Arc<T>,
    retrieval: Arc<RetrievalService<V>>,
    max_ingested_chunks: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionReport {
    pub chunk_count: usize,
    pub indexed_count: usize,
}

impl<F, T, V> IngestionService<F, T, V>
where
    F: FileLoader + ?Sized,
    T: TextSplitter + ?Sized,
    V: VectorStore + ?Sized,
{
    pub fn new(
        file_loader: Arc<F>,
        text_splitter: Arc<T>,
        retrieval: Arc<RetrievalService<V>>,
        max_ingested_chunks: usize,
    ) -> Self {
        Self {
            file_loader,
            text_splitter,
            retrieval,
            max_ingested_chunks,
        }
    }

    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    pub async fn ingest_file(&self, path: &Path) -> Result<IngestionReport, IngestionError> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|source| FileLoaderError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let document = Document::from_path(path, data.len() as u64);

        let text = self.file_loader.extract_text(&data, &document).await?;
        tracing::info!(
            document_id = %document.id.as_uuid(),
            characters = text.chars().count(),
            "Text extracted"
        );

        self.ingest_text(&text).await
    }

    /// Chunks `raw_text` and indexes at most `max_ingested_chunks` of the
    /// leading chunks.
    pub async fn ingest_text(&self, raw_text: &str) -> Result<IngestionReport, IngestionError> {
        let chunks = self.text_splitter.split(raw_text).await?;
        let chunk_count = chunks.len();

        let texts: Vec<String> = chunks
            .into_iter()
            .take(self.max_ingested_chunks)
            .map(|chunk| chunk.text)
            .collect();

        if chunk_count > texts.len() {
            tracing::info!(
                chunk_count,
                max_ingested_chunks = self.max_ingested_chunks,
                "Ingestion capped; indexing leading chunks only"
            );
        }

        self.retrieval.add_texts(&texts).await?;

        let report = IngestionReport {
            chunk_count,
            indexed_count: texts.len(),
        };
        tracing::info!(
            chunk_count = report.chunk_count,
            indexed_count = report.indexed_count,
            "Ingestion complete"
        );
        Ok(report)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("file loading: {0}")]
    FileLoading(#[from] FileLoaderError),
    #[error("text splitting: {0}")]
    Splitting(#[from] TextSplitterError),
    #[error("indexing: {0}")]
    Indexing(#[from] RetrievalError),
}
