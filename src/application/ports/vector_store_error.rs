#[derive(Debug, thiserror::Error)]
pub enum VectorStoreError {
    #[error("index not initialized: nothing has been added yet")]
    NotInitialized,
    #[error("dimension mismatch: index expects {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("append failed: {texts} texts but {embeddings} embeddings")]
    LengthMismatch { texts: usize, embeddings: usize },
    #[error("top_k must be greater than zero")]
    InvalidTopK,
}
