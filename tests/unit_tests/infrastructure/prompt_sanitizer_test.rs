use pdfqa::infrastructure::observability::sanitize_prompt;

#[test]
fn given_blank_text_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_question_when_sanitizing_then_returns_it_trimmed() {
    assert_eq!(
        sanitize_prompt("  What is the capital of France?  "),
        "What is the capital of France?"
    );
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_and_reports_length() {
    let text = "é".repeat(150);

    let sanitized = sanitize_prompt(&text);

    assert!(sanitized.starts_with(&"é".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_api_keys_when_sanitizing_then_secrets_are_redacted() {
    let sanitized = sanitize_prompt("use sk-abc123 and xoxb-999-token with Bearer eyJhbGc");

    assert!(!sanitized.contains("abc123"));
    assert!(!sanitized.contains("999-token"));
    assert!(!sanitized.contains("eyJhbGc"));
    assert!(sanitized.contains("sk-[REDACTED]"));
    assert!(sanitized.contains("xoxb-[REDACTED]"));
    assert!(sanitized.contains("Bearer [REDACTED]"));
}

#[test]
fn given_query_string_credentials_when_sanitizing_then_only_values_are_redacted() {
    let sanitized = sanitize_prompt("url?api_key=secret&password=hunter2&page=2");

    assert_eq!(
        sanitized,
        "url?api_key=[REDACTED]&password=[REDACTED]&page=2"
    );
}

#[test]
fn given_pattern_inside_a_word_when_sanitizing_then_text_is_kept() {
    assert_eq!(sanitize_prompt("a risk-free task-list"), "a risk-free task-list");
}
