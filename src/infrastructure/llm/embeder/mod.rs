mod embedder_factory;
mod mock_embedder;
mod openai_embedder;

pub use embedder_factory::{EmbedderFactory, EmbedderFactoryError};
pub use mock_embedder::MockEmbedder;
pub use openai_embedder::OpenAiEmbedder;
