mod embeder;
mod mock_llm_client;
mod openai_client;

pub use embeder::{EmbedderFactory, EmbedderFactoryError, MockEmbedder, OpenAiEmbedder};
pub use mock_llm_client::MockLlmClient;
pub use openai_client::OpenAiClient;
