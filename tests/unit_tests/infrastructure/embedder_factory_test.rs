use pdfqa::infrastructure::llm::{EmbedderFactory, EmbedderFactoryError};
use pdfqa::presentation::config::{EmbeddingProvider, OpenAiSettings};

#[tokio::test]
async fn given_mock_provider_when_creating_then_embeds_offline_with_configured_dimension() {
    let settings = OpenAiSettings::default();

    let embedder = EmbedderFactory::create(EmbeddingProvider::Mock, &settings, 24).unwrap();
    let embedding = embedder.embed("offline").await.unwrap();

    assert_eq!(embedding.dimensions(), 24);
}

#[test]
fn given_openai_provider_without_key_when_creating_then_returns_missing_api_key() {
    let settings = OpenAiSettings::default();

    let result = EmbedderFactory::create(EmbeddingProvider::OpenAi, &settings, 1536);

    assert!(matches!(result, Err(EmbedderFactoryError::MissingApiKey)));
}

#[test]
fn given_openai_provider_with_key_when_creating_then_succeeds() {
    let settings = OpenAiSettings {
        api_key: Some("sk-test".to_string()),
        ..OpenAiSettings::default()
    };

    assert!(EmbedderFactory::create(EmbeddingProvider::OpenAi, &settings, 1536).is_ok());
}
