/// Substituted for any answer the model gives without knowing.
pub const DATA_NOT_AVAILABLE: &str = "Data Not Available";

const UNKNOWN_ANSWER_PREFIXES: [&str; 2] = ["i don't know", "i'm not sure"];

/// Prefix match on the lowercased answer. Natural-language matching is
/// brittle; see DESIGN.md for the structured-confidence open question.
pub fn is_unknown_answer(answer: &str) -> bool {
    let lowered = answer.to_lowercase();
    UNKNOWN_ANSWER_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

pub fn normalize_answer(answer: String) -> String {
    if is_unknown_answer(&answer) {
        DATA_NOT_AVAILABLE.to_string()
    } else {
        answer
    }
}
