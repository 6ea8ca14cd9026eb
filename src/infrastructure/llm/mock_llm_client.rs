use std::collections::HashMap;

use crate::application::ports::{LlmClient, LlmClientError};

/// Answers from a fixed question → answer table. Questions missing from the
/// table get the default answer, or fail if none is set.
#[derive(Default)]
pub struct MockLlmClient {
    answers: HashMap<String, String>,
    failing: Vec<String>,
    default_answer: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(answer: impl Into<String>) -> Self {
        Self {
            default_answer: Some(answer.into()),
            ..Self::default()
        }
    }

    pub fn answer(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers.insert(question.into(), answer.into());
        self
    }

    pub fn fail_on(mut self, question: impl Into<String>) -> Self {
        self.failing.push(question.into());
        self
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, question: &str, _context: &str) -> Result<String, LlmClientError> {
        if self.failing.iter().any(|q| q == question) {
            return Err(LlmClientError::ApiRequestFailed(format!(
                "mock failure for '{question}'"
            )));
        }

        self.answers
            .get(question)
            .or(self.default_answer.as_ref())
            .cloned()
            .ok_or_else(|| LlmClientError::InvalidResponse(format!("no answer for '{question}'")))
    }
}
