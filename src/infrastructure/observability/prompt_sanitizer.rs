const MAX_VISIBLE_CHARS: usize = 100;

const SECRET_PATTERNS: [(&str, &str); 6] = [
    ("Bearer ", "Bearer [REDACTED]"),
    ("sk-", "sk-[REDACTED]"),
    ("xoxb-", "xoxb-[REDACTED]"),
    ("api_key=", "api_key=[REDACTED]"),
    ("password=", "password=[REDACTED]"),
    ("token=", "token=[REDACTED]"),
];

/// Truncates and redacts question or answer text before it is logged.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{head}... ({total_chars} chars total)")
    } else {
        trimmed.to_string()
    };

    SECRET_PATTERNS
        .iter()
        .fold(visible, |text, (pattern, replacement)| {
            redact(&text, pattern, replacement)
        })
}

fn redact(text: &str, pattern: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(pattern) {
        let (before, matched) = rest.split_at(idx);
        result.push_str(before);

        // Only redact at a word start: "risk-free" is not a key.
        let mid_word = result
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric());
        if mid_word {
            result.push_str(pattern);
            rest = &matched[pattern.len()..];
            continue;
        }

        result.push_str(replacement);
        let secret = &matched[pattern.len()..];
        let end = secret
            .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
            .unwrap_or(secret.len());
        rest = &secret[end..];
    }

    result.push_str(rest);
    result
}
