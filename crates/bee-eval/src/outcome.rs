//! How a run ended, and where an interpreter is in its lifecycle.

use bee_types::ErrorKind;
use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Completed,
    Aborted { kind: ErrorKind, message: String },
}

impl RunOutcome {
    pub fn aborted(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Aborted {
            kind,
            message: message.into(),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// The abort tag, or `None` for a completed run.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Completed => None,
            Self::Aborted { kind, .. } => Some(*kind),
        }
    }
}

impl From<&EvalError> for RunOutcome {
    fn from(err: &EvalError) -> Self {
        Self::aborted(err.kind(), err.to_string())
    }
}

/// `Idle → Running → Completed | Aborted`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Completed,
    Aborted { kind: ErrorKind, message: String },
}

impl From<&RunOutcome> for RunState {
    fn from(outcome: &RunOutcome) -> Self {
        match outcome {
            RunOutcome::Completed => Self::Completed,
            RunOutcome::Aborted { kind, message } => Self::Aborted {
                kind: *kind,
                message: message.clone(),
            },
        }
    }
}
