use std::sync::Arc;

use crate::application::ports::{
    Embedder, EmbedderError, SearchResult, VectorStore, VectorStoreError,
};

const CONTEXT_SEPARATOR: &str = " ";

pub struct RetrievalService<V>
where
    V: VectorStore + ?Sized,
{
    embedder: Arc<dyn Embedder>,
    vector_store: Arc<V>,
    top_k: usize,
}

impl<V> RetrievalService<V>
where
    V: VectorStore + ?Sized,
{
    pub fn new(embedder: Arc<dyn Embedder>, vector_store: Arc<V>, top_k: usize) -> Self {
        Self {
            embedder,
            vector_store,
            top_k,
        }
    }

    pub async fn indexed_count(&self) -> usize {
        self.vector_store.len().await
    }

    /// Embeds `texts` in one batch and appends them in order. An empty slice
    /// still initializes the index so later searches return no hits instead
    /// of failing.
    #[tracing::instrument(skip(self, texts), fields(count = texts.len()))]
    pub async fn add_texts(&self, texts: &[String]) -> Result<(), RetrievalError> {
        if texts.is_empty() {
            tracing::warn!("No texts to embed; index contents left unchanged");
            self.vector_store.append(&[], &[]).await?;
            return Ok(());
        }

        let batch: Vec<&str> = texts.iter().map(String::as_str).collect();
        let embeddings = self
            .embedder
            .embed_batch(&batch)
            .await
            .map_err(RetrievalError::Embedding)?;

        self.vector_store.append(texts, &embeddings).await?;

        tracing::debug!(
            indexed = self.vector_store.len().await,
            "Added embeddings to the index"
        );
        Ok(())
    }

    pub async fn similarity_search(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<SearchResult>, RetrievalError> {
        if !self.vector_store.is_initialized().await {
            return Err(RetrievalError::Search(VectorStoreError::NotInitialized));
        }

        let query_embedding = self
            .embedder
            .embed(query)
            .await
            .map_err(RetrievalError::Embedding)?;

        let results = self.vector_store.search(&query_embedding, k).await?;
        tracing::debug!(result_count = results.len(), "Similarity search completed");
        Ok(results)
    }

    /// Top-k chunk texts joined by a single space, nearest first.
    pub async fn retrieve(&self, question: &str) -> Result<String, RetrievalError> {
        let results = self.similarity_search(question, self.top_k).await?;

        Ok(results
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("embedding: {0}")]
    Embedding(EmbedderError),
    #[error("search: {0}")]
    Search(#[from] VectorStoreError),
}
