use std::path::Path;
use std::sync::Arc;

use futures::StreamExt;

use crate::application::ports::{
    FileLoader, LlmClient, Reporter, ReporterError, TextSplitter, VectorStore,
};
use crate::domain::{QaResult, QuestionFailure, RunState, RunStateError};

use super::answering_service::record_failure;
use super::{AnsweringService, IngestionError, IngestionService};

const REPORT_HEADER: &str = "Questions and Answers:";
const FAILURE_HEADER: &str = "Failed questions:";

/// Drives one run: ingest a document, answer every question against it and
/// report the results. `run` never returns an error; the outcome carries the
/// terminal state instead.
pub struct QaPipeline<F, T, V, L>
where
    F: FileLoader + ?Sized,
    T: TextSplitter + ?Sized,
    V: VectorStore + ?Sized,
    L: LlmClient + ?Sized,
{
    ingestion: IngestionService<F, T, V>,
    answering: AnsweringService<L, V>,
    reporter: Option<Arc<dyn Reporter>>,
    fallback_reporter: Arc<dyn Reporter>,
}

#[derive(Debug)]
pub struct RunOutcome {
    pub state: RunState,
    pub results: Vec<QaResult>,
    pub failures: Vec<QuestionFailure>,
    pub report_delivered: bool,
    pub error: Option<PipelineError>,
}

impl RunOutcome {
    fn new() -> Self {
        Self {
            state: RunState::Idle,
            results: Vec::new(),
            failures: Vec::new(),
            report_delivered: false,
            error: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.state == RunState::Done
    }

    fn transition(&mut self, next: RunState) {
        match self.state.advance(next) {
            Ok(state) => {
                tracing::debug!(from = %self.state, to = %state, "Run state transition");
                self.state = state;
            }
            Err(e) => {
                tracing::error!(error = %e, "Rejected run state transition");
                self.fail(PipelineError::State(e));
            }
        }
    }

    fn fail(&mut self, error: PipelineError) {
        self.state = RunState::Failed;
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

impl<F, T, V, L> QaPipeline<F, T, V, L>
where
    F: FileLoader + ?Sized,
    T: TextSplitter + ?Sized,
    V: VectorStore + ?Sized,
    L: LlmClient + ?Sized,
{
    /// `reporter` is `None` when results should only be returned to the
    /// caller. `fallback_reporter` receives failure notices the primary
    /// channel could not deliver.
    pub fn new(
        ingestion: IngestionService<F, T, V>,
        answering: AnsweringService<L, V>,
        reporter: Option<Arc<dyn Reporter>>,
        fallback_reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            ingestion,
            answering,
            reporter,
            fallback_reporter,
        }
    }

    #[tracing::instrument(
        skip(self, questions),
        fields(path = %pdf_path.display(), questions = questions.len())
    )]
    pub async fn run(&self, pdf_path: &Path, questions: &[String]) -> RunOutcome {
        let mut outcome = RunOutcome::new();
        outcome.transition(RunState::Ingesting);

        let ingested = self.ingestion.ingest_file(pdf_path).await;
        self.complete_run(outcome, ingested.map(|_| ()), questions).await
    }

    /// Same as `run` for text that has already been extracted.
    pub async fn run_text(&self, raw_text: &str, questions: &[String]) -> RunOutcome {
        let mut outcome = RunOutcome::new();
        outcome.transition(RunState::Ingesting);

        let ingested = self.ingestion.ingest_text(raw_text).await;
        self.complete_run(outcome, ingested.map(|_| ()), questions).await
    }

    async fn complete_run(
        &self,
        mut outcome: RunOutcome,
        ingested: Result<(), IngestionError>,
        questions: &[String],
    ) -> RunOutcome {
        if let Err(e) = ingested {
            tracing::error!(error = %e, "Error processing document");
            let notice = format!("An error occurred: {e}");
            outcome.fail(PipelineError::Ingestion(e));
            self.post_failure_notice(&notice).await;
            return outcome;
        }

        self.answer_questions(&mut outcome, questions).await;
        if outcome.state.is_terminal() {
            return outcome;
        }

        outcome.transition(RunState::Reporting);
        self.report(&mut outcome).await;
        outcome
    }

    async fn answer_questions(&self, outcome: &mut RunOutcome, questions: &[String]) {
        let mut answers = std::pin::pin!(self.answering.answer_stream(questions));

        while let Some((position, answered)) = answers.next().await {
            outcome.transition(RunState::Answering { question: position });
            if outcome.state.is_terminal() {
                return;
            }

            match answered {
                Ok(result) => outcome.results.push(result),
                Err(e) => outcome
                    .failures
                    .push(record_failure(position, &questions[position], &e)),
            }
        }

        tracing::info!(
            answered = outcome.results.len(),
            failed = outcome.failures.len(),
            "All questions processed"
        );
    }

    async fn report(&self, outcome: &mut RunOutcome) {
        let Some(reporter) = &self.reporter else {
            tracing::info!("Reporting disabled; results returned to caller only");
            outcome.transition(RunState::Done);
            return;
        };

        let message = match format_report(&outcome.results, &outcome.failures) {
            Ok(message) => message,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize results");
                let notice = format!("An error occurred: {e}");
                outcome.fail(PipelineError::Serialization(e));
                self.post_fallback(&notice).await;
                return;
            }
        };

        match reporter.post(&message).await {
            Ok(()) => {
                tracing::info!("Results posted");
                outcome.report_delivered = true;
                outcome.transition(RunState::Done);
            }
            Err(e) => {
                tracing::error!(error = %e, "Error posting results");
                let notice = format!("An error occurred: {e}");
                outcome.fail(PipelineError::Reporting(e));
                self.post_fallback(&notice).await;
            }
        }
    }

    async fn post_failure_notice(&self, notice: &str) {
        if let Some(reporter) = &self.reporter {
            match reporter.post(notice).await {
                Ok(()) => return,
                Err(e) => tracing::error!(error = %e, "Error posting failure notice"),
            }
        }
        self.post_fallback(notice).await;
    }

    async fn post_fallback(&self, notice: &str) {
        if let Err(e) = self.fallback_reporter.post(notice).await {
            tracing::error!(error = %e, "Fallback reporter failed; notice dropped");
        }
    }
}

/// Renders results as a fenced JSON block, followed by a list of questions
/// that could not be processed.
pub fn format_report(
    results: &[QaResult],
    failures: &[QuestionFailure],
) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(results)?;
    let mut message = format!("{REPORT_HEADER}\n```\n{json}\n```");

    if !failures.is_empty() {
        message.push('\n');
        message.push_str(FAILURE_HEADER);
        for failure in failures {
            message.push_str(&format!(
                "\n- [{}] {}: {}",
                failure.position + 1,
                failure.question,
                failure.error
            ));
        }
    }

    Ok(message)
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("ingestion: {0}")]
    Ingestion(IngestionError),
    #[error("serialization: {0}")]
    Serialization(serde_json::Error),
    #[error("reporting: {0}")]
    Reporting(ReporterError),
    #[error("state: {0}")]
    State(RunStateError),
}
