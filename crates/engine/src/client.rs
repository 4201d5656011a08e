// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stateless request/response wrapper around the solver boundary

use crate::error::{PollError, SubmitError};
use roster_adapters::{ApiError, SolverApi};
use roster_core::{ConstraintMatrixModel, Job, JobStatusUpdate, Quota, RosteringRequest, TaskId};

/// Submits requests, checks status and reads the quota.
#[derive(Clone)]
pub struct JobClient<A> {
    api: A,
}

impl<A: SolverApi> JobClient<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Build the model's request and submit it.
    ///
    /// Validation failures never reach the boundary.
    pub async fn submit_model(&self, model: &ConstraintMatrixModel) -> Result<Job, SubmitError> {
        let request = model.build_request()?;
        self.submit(&request).await
    }

    pub async fn submit(&self, request: &RosteringRequest) -> Result<Job, SubmitError> {
        let receipt = self.api.submit(request).await?;
        tracing::info!(task_id = %receipt.task_id, status = %receipt.status, "job submitted");
        Ok(Job::new(receipt.task_id, receipt.status))
    }

    /// One status check. Anything but "not found" is worth retrying.
    pub async fn poll_status(&self, task_id: &TaskId) -> Result<JobStatusUpdate, PollError> {
        match self.api.poll_status(task_id).await {
            Ok(update) => Ok(update),
            Err(ApiError::NotFound) => Err(PollError::NotFound(task_id.clone())),
            Err(e) => Err(PollError::Transient(e)),
        }
    }

    /// Best-effort quota read. Failures degrade to `None` ("unknown").
    pub async fn fetch_quota(&self) -> Option<Quota> {
        match self.api.fetch_quota().await {
            Ok(quota) => Some(quota),
            Err(e) => {
                tracing::debug!(error = %e, "quota unknown");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
