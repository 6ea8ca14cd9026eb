use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{SearchResult, VectorStore, VectorStoreError};
use crate::domain::Embedding;

/// Exact nearest-neighbour index over squared Euclidean distance. Texts and
/// vectors are stored in parallel; an entry's position is its key.
pub struct InMemoryVectorStore {
    dimension: usize,
    storage: RwLock<Option<IndexStorage>>,
}

#[derive(Default)]
struct IndexStorage {
    texts: Vec<String>,
    vectors: Vec<Embedding>,
}

impl InMemoryVectorStore {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            storage: RwLock::new(None),
        }
    }

    fn check_dimension(&self, embedding: &Embedding) -> Result<(), VectorStoreError> {
        if embedding.dimensions() != self.dimension {
            return Err(VectorStoreError::DimensionMismatch {
                expected: self.dimension,
                actual: embedding.dimensions(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn len(&self) -> usize {
        self.storage
            .read()
            .await
            .as_ref()
            .map_or(0, |s| s.vectors.len())
    }

    async fn is_initialized(&self) -> bool {
        self.storage.read().await.is_some()
    }

    async fn append(
        &self,
        texts: &[String],
        embeddings: &[Embedding],
    ) -> Result<(), VectorStoreError> {
        if texts.len() != embeddings.len() {
            return Err(VectorStoreError::LengthMismatch {
                texts: texts.len(),
                embeddings: embeddings.len(),
            });
        }
        // All or nothing.
        for embedding in embeddings {
            self.check_dimension(embedding)?;
        }

        let mut guard = self.storage.write().await;
        let storage = guard.get_or_insert_with(IndexStorage::default);
        storage.texts.extend_from_slice(texts);
        storage.vectors.extend_from_slice(embeddings);

        tracing::debug!(
            added = embeddings.len(),
            total = storage.vectors.len(),
            "Vectors appended"
        );
        Ok(())
    }

    async fn search(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError> {
        if top_k == 0 {
            return Err(VectorStoreError::InvalidTopK);
        }
        self.check_dimension(embedding)?;

        let guard = self.storage.read().await;
        let storage = guard.as_ref().ok_or(VectorStoreError::NotInitialized)?;

        let mut scored: Vec<(usize, f32)> = storage
            .vectors
            .iter()
            .map(|v| embedding.squared_euclidean_distance(v))
            .enumerate()
            .collect();
        // Stable on ties: equal distances keep insertion order.
        scored.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        scored.truncate(top_k);

        Ok(scored
            .into_iter()
            .map(|(position, distance)| SearchResult {
                text: storage.texts[position].clone(),
                distance,
            })
            .collect())
    }
}
