mod answer_policy;
mod chunk;
mod document;
mod embedding;
mod qa_result;
mod run_state;

pub use answer_policy::{DATA_NOT_AVAILABLE, is_unknown_answer, normalize_answer};
pub use chunk::Chunk;
pub use document::{Document, DocumentId};
pub use embedding::Embedding;
pub use qa_result::{QaResult, QuestionFailure};
pub use run_state::{RunState, RunStateError};
