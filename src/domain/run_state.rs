use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Ingesting,
    Answering { question: usize },
    Reporting,
    Done,
    Failed,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Failed)
    }

    pub fn advance(self, next: RunState) -> Result<RunState, RunStateError> {
        let allowed = match (self, next) {
            (from, RunState::Failed) => !from.is_terminal(),
            (RunState::Idle, RunState::Ingesting) => true,
            (RunState::Ingesting, RunState::Answering { question: 0 }) => true,
            (RunState::Ingesting, RunState::Reporting) => true,
            (
                RunState::Answering { question: current },
                RunState::Answering {
                    question: following,
                },
            ) => following == current + 1,
            (RunState::Answering { .. }, RunState::Reporting) => true,
            (RunState::Reporting, RunState::Done) => true,
            _ => false,
        };

        if allowed {
            Ok(next)
        } else {
            Err(RunStateError {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => write!(f, "IDLE"),
            RunState::Ingesting => write!(f, "INGESTING"),
            RunState::Answering { question } => write!(f, "ANSWERING({question})"),
            RunState::Reporting => write!(f, "REPORTING"),
            RunState::Done => write!(f, "DONE"),
            RunState::Failed => write!(f, "FAILED"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid run state transition: {from} -> {to}")]
pub struct RunStateError {
    pub from: RunState,
    pub to: RunState,
}
