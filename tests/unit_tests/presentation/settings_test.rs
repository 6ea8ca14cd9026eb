use pdfqa::presentation::config::{ConfigError, Settings};

fn valid_settings() -> Settings {
    let mut settings = Settings::default();
    settings.openai.api_key = Some("sk-test".to_string());
    settings.slack.bot_token = Some("xoxb-test".to_string());
    settings.slack.channel = Some("#qa".to_string());
    settings
}

fn invalid_field(result: Result<(), ConfigError>) -> &'static str {
    match result {
        Err(ConfigError::Invalid { field, .. }) => field,
        other => panic!("expected invalid setting, got {other:?}"),
    }
}

#[test]
fn given_defaults_when_inspecting_then_match_documented_values() {
    let settings = Settings::default();

    assert_eq!(settings.pdf.chunk_size, 1000);
    assert_eq!(settings.pdf.chunk_overlap, 200);
    assert_eq!(settings.pdf.max_ingested_chunks, 8);
    assert_eq!(settings.vector_store.dimension, 1536);
    assert_eq!(settings.vector_store.similarity_top_k, 3);
    assert_eq!(settings.openai.model, "gpt-4o-mini");
    assert_eq!(settings.openai.temperature, 0.0);
    assert_eq!(settings.pipeline.answer_concurrency, 1);
}

#[test]
fn given_complete_settings_when_validating_then_succeeds() {
    assert!(valid_settings().validate(true).is_ok());
}

#[test]
fn given_overlap_not_smaller_than_chunk_size_when_validating_then_rejects_overlap() {
    let mut settings = valid_settings();
    settings.pdf.chunk_size = 100;
    settings.pdf.chunk_overlap = 100;

    assert_eq!(invalid_field(settings.validate(true)), "pdf.chunk_overlap");
}

#[test]
fn given_zero_values_when_validating_then_names_the_offending_field() {
    let mut settings = valid_settings();
    settings.pdf.chunk_size = 0;
    assert_eq!(invalid_field(settings.validate(true)), "pdf.chunk_size");

    let mut settings = valid_settings();
    settings.vector_store.dimension = 0;
    assert_eq!(invalid_field(settings.validate(true)), "vector_store.dimension");

    let mut settings = valid_settings();
    settings.vector_store.similarity_top_k = 0;
    assert_eq!(
        invalid_field(settings.validate(true)),
        "vector_store.similarity_top_k"
    );

    let mut settings = valid_settings();
    settings.pipeline.answer_concurrency = 0;
    assert_eq!(
        invalid_field(settings.validate(true)),
        "pipeline.answer_concurrency"
    );
}

#[test]
fn given_missing_api_key_when_validating_then_fails() {
    let mut settings = valid_settings();
    settings.openai.api_key = Some("   ".to_string());

    assert_eq!(invalid_field(settings.validate(false)), "openai.api_key");
}

#[test]
fn given_missing_slack_token_when_reporting_disabled_then_validation_passes() {
    let mut settings = valid_settings();
    settings.slack.bot_token = None;
    settings.slack.channel = None;

    assert!(settings.validate(false).is_ok());
    assert_eq!(invalid_field(settings.validate(true)), "slack.bot_token");
}

#[test]
fn given_secrets_when_debug_printing_then_they_are_redacted() {
    let rendered = format!("{:?}", valid_settings());

    assert!(!rendered.contains("sk-test"));
    assert!(!rendered.contains("xoxb-test"));
    assert!(rendered.contains("[REDACTED]"));
}
