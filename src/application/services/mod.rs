mod answering_service;
mod ingestion_service;
mod qa_pipeline;
mod retrieval_service;

pub use answering_service::{AnswerError, AnsweringService};
pub use ingestion_service::{IngestionError, IngestionReport, IngestionService};
pub use qa_pipeline::{PipelineError, QaPipeline, RunOutcome, format_report};
pub use retrieval_service::{RetrievalError, RetrievalService};
