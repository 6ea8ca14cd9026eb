use std::sync::Arc;

use futures::stream::{self, Stream, StreamExt};
use tracing::Instrument;

use crate::application::ports::{LlmClient, LlmClientError, VectorStore};
use crate::domain::{QaResult, QuestionFailure, normalize_answer};
use crate::infrastructure::observability::sanitize_prompt;

use super::{RetrievalError, RetrievalService};

pub struct AnsweringService<L, V>
where
    L: LlmClient + ?Sized,
    V: VectorStore + ?Sized,
{
    retrieval: Arc<RetrievalService<V>>,
    llm_client: Arc<L>,
    concurrency: usize,
}

impl<L, V> AnsweringService<L, V>
where
    L: LlmClient + ?Sized,
    V: VectorStore + ?Sized,
{
    pub fn new(retrieval: Arc<RetrievalService<V>>, llm_client: Arc<L>, concurrency: usize) -> Self {
        Self {
            retrieval,
            llm_client,
            concurrency: concurrency.max(1),
        }
    }

    pub async fn answer(&self, question: &str) -> Result<QaResult, AnswerError> {
        let context = self.retrieval.retrieve(question).await?;
        let raw_answer = self.llm_client.complete(question, &context).await?;
        let answer = normalize_answer(raw_answer.trim().to_string());

        tracing::info!(answer = %sanitize_prompt(&answer), "Question answered");
        Ok(QaResult::new(question, answer))
    }

    /// Yields `(position, outcome)` in input order. Up to `concurrency`
    /// questions are in flight at once.
    pub fn answer_stream<'a>(
        &'a self,
        questions: &'a [String],
    ) -> impl Stream<Item = (usize, Result<QaResult, AnswerError>)> + 'a {
        stream::iter(questions.iter().enumerate())
            .map(move |(position, question)| {
                let span = tracing::info_span!(
                    "question",
                    position,
                    question = %sanitize_prompt(question),
                );
                async move { (position, self.answer(question).await) }.instrument(span)
            })
            .buffered(self.concurrency)
    }
}

/// Logs a failed question. The caller leaves it out of the results.
pub(crate) fn record_failure(
    position: usize,
    question: &str,
    error: &AnswerError,
) -> QuestionFailure {
    tracing::error!(
        position,
        question = %sanitize_prompt(question),
        error = %error,
        "Error answering question"
    );
    QuestionFailure {
        position,
        question: question.to_string(),
        error: error.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("retrieval: {0}")]
    Retrieval(#[from] RetrievalError),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
}
