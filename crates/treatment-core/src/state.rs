//! Treatment record lifecycle.
//!
//! A record is either `InProgress` or `Completed` — nothing else. There is
//! no cancellation state and no way back out of `Completed`; a finished
//! treatment is a historical fact.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a treatment record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordState {
    InProgress,
    Completed,
}

/// Error type for lifecycle violations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum StateError {
    /// The record already reached its terminal state
    AlreadyCompleted,
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::AlreadyCompleted => {
                write!(f, "Treatment record is already completed")
            }
        }
    }
}

impl RecordState {
    /// State a fresh record starts in, given whether its selected steps
    /// already satisfy the completion predicate (zero-step sub-treatments
    /// start — and stay — `Completed`).
    pub fn on_creation(complete: bool) -> Self {
        if complete {
            RecordState::Completed
        } else {
            RecordState::InProgress
        }
    }

    pub fn from_flag(is_completed: bool) -> Self {
        Self::on_creation(is_completed)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RecordState::Completed)
    }

    /// Next state after a resume session, given whether the cumulative
    /// completed-step union now satisfies the completion predicate.
    ///
    /// Only an `InProgress` record can be resumed; `Completed` is terminal.
    pub fn resume(self, now_complete: bool) -> Result<RecordState, StateError> {
        match self {
            RecordState::InProgress => Ok(RecordState::on_creation(now_complete)),
            RecordState::Completed => Err(StateError::AlreadyCompleted),
        }
    }
}

impl std::fmt::Display for RecordState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordState::InProgress => write!(f, "in progress"),
            RecordState::Completed => write!(f, "completed"),
        }
    }
}
