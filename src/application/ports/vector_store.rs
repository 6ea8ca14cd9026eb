use async_trait::async_trait;

use super::{SearchResult, VectorStoreError};
use crate::domain::Embedding;

/// Append-only similarity index. The position of an entry in insertion
/// order is its key.
#[async_trait]
pub trait VectorStore: Send + Sync {
    async fn len(&self) -> usize;

    /// True once `append` has been called, even with no entries.
    async fn is_initialized(&self) -> bool;

    async fn append(
        &self,
        texts: &[String],
        embeddings: &[Embedding],
    ) -> Result<(), VectorStoreError>;

    /// Nearest first.
    async fn search(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError>;
}
