// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request/response boundary to the solver service and history store

mod http;

pub use http::{HttpApi, HttpApiConfig};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ApiCall, FakeApi};

use async_trait::async_trait;
use roster_core::{
    HistoryRecord, JobStatusUpdate, Quota, RosteringRequest, SubmitReceipt, TaskId,
};
use thiserror::Error;

/// Errors from boundary calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("not found")]
    NotFound,
    #[error("quota exhausted")]
    QuotaExhausted,
    #[error("rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("server error (status {status})")]
    Server { status: u16 },
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Network-level failures that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::Transport(_) | ApiError::Timeout | ApiError::Server { .. }
        )
    }

    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            404 => ApiError::NotFound,
            429 => ApiError::QuotaExhausted,
            500..=599 => ApiError::Server { status },
            _ => ApiError::Rejected { status, body },
        }
    }
}

/// Solver service: submission, status checks and quota.
#[async_trait]
pub trait SolverApi: Clone + Send + Sync + 'static {
    /// Submit a rostering request for asynchronous solving
    async fn submit(&self, request: &RosteringRequest) -> Result<SubmitReceipt, ApiError>;

    /// Check the status of a submitted task
    async fn poll_status(&self, task_id: &TaskId) -> Result<JobStatusUpdate, ApiError>;

    /// Remaining submissions in the current quota window
    async fn fetch_quota(&self) -> Result<Quota, ApiError>;
}

/// Remote history store, keyed by task id.
#[async_trait]
pub trait HistoryApi: Clone + Send + Sync + 'static {
    async fn list_history(&self) -> Result<Vec<HistoryRecord>, ApiError>;

    async fn rename(&self, task_id: &TaskId, new_title: &str) -> Result<(), ApiError>;

    async fn delete(&self, task_id: &TaskId) -> Result<(), ApiError>;
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
