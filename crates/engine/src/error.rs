// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine

use roster_adapters::ApiError;
use roster_core::{TaskId, ValidationError};
use thiserror::Error;

/// Why a submission did not produce a job
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("invalid matrix: {0}")]
    Validation(#[from] ValidationError),
    #[error("submission quota exhausted")]
    QuotaExhausted,
    #[error("request rejected by solver: {0}")]
    Rejected(String),
    #[error("solver unavailable: {0}")]
    Unavailable(ApiError),
}

impl From<ApiError> for SubmitError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::QuotaExhausted => SubmitError::QuotaExhausted,
            ApiError::Rejected { status, body } if body.trim().is_empty() => {
                SubmitError::Rejected(format!("status {status}"))
            }
            ApiError::Rejected { body, .. } => SubmitError::Rejected(body),
            other => SubmitError::Unavailable(other),
        }
    }
}

/// Failure of a single status check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    /// Retry at the normal cadence.
    #[error("status check failed: {0}")]
    Transient(ApiError),
    /// The solver does not know the task. Stop polling.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// History store failures. Local state is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("failed to load history: {0}")]
    Load(ApiError),
    #[error("failed to rename {task_id}: {source}")]
    Rename { task_id: TaskId, source: ApiError },
    #[error("failed to delete {task_id}: {source}")]
    Delete { task_id: TaskId, source: ApiError },
    #[error("no history record for task {0}")]
    UnknownTask(TaskId),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
