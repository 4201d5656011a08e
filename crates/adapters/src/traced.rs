// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::api::{ApiError, HistoryApi, SolverApi};
use async_trait::async_trait;
use roster_core::{HistoryRecord, JobStatusUpdate, Quota, RosteringRequest, SubmitReceipt, TaskId};
use std::time::Instant;
use tracing::Instrument;

/// Wrapper that adds tracing to any boundary implementation
#[derive(Clone)]
pub struct TracedApi<A> {
    inner: A,
}

impl<A> TracedApi<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

#[async_trait]
impl<A: SolverApi> SolverApi for TracedApi<A> {
    async fn submit(&self, request: &RosteringRequest) -> Result<SubmitReceipt, ApiError> {
        async {
            tracing::info!(
                workers = request.workers.len(),
                rooms = request.rooms.len(),
                "starting"
            );
            let start = Instant::now();
            let result = self.inner.submit(request).await;
            let elapsed_ms = elapsed_ms(start);
            match &result {
                Ok(receipt) => {
                    tracing::info!(task_id = %receipt.task_id, elapsed_ms, "submitted")
                }
                Err(e) => tracing::error!(elapsed_ms, error = %e, "submit failed"),
            }
            result
        }
        .instrument(tracing::info_span!("api.submit", title = %request.title))
        .await
    }

    async fn poll_status(&self, task_id: &TaskId) -> Result<JobStatusUpdate, ApiError> {
        async {
            let start = Instant::now();
            let result = self.inner.poll_status(task_id).await;
            let elapsed_ms = elapsed_ms(start);
            match &result {
                Ok(update) => tracing::debug!(status = %update.status, elapsed_ms, "checked"),
                Err(e) if e.is_transient() => {
                    tracing::warn!(elapsed_ms, error = %e, "status check failed")
                }
                Err(e) => tracing::error!(elapsed_ms, error = %e, "status check failed"),
            }
            result
        }
        .instrument(tracing::info_span!("api.poll_status", task_id = %task_id))
        .await
    }

    async fn fetch_quota(&self) -> Result<Quota, ApiError> {
        async {
            let start = Instant::now();
            let result = self.inner.fetch_quota().await;
            let elapsed_ms = elapsed_ms(start);
            match &result {
                Ok(quota) => {
                    tracing::debug!(remaining = quota.quota_remaining, elapsed_ms, "fetched")
                }
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "quota unavailable"),
            }
            result
        }
        .instrument(tracing::info_span!("api.quota"))
        .await
    }
}

#[async_trait]
impl<A: HistoryApi> HistoryApi for TracedApi<A> {
    async fn list_history(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        async {
            let start = Instant::now();
            let result = self.inner.list_history().await;
            let elapsed_ms = elapsed_ms(start);
            match &result {
                Ok(records) => tracing::info!(count = records.len(), elapsed_ms, "loaded"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "load failed"),
            }
            result
        }
        .instrument(tracing::info_span!("api.history.list"))
        .await
    }

    async fn rename(&self, task_id: &TaskId, new_title: &str) -> Result<(), ApiError> {
        async {
            let start = Instant::now();
            let result = self.inner.rename(task_id, new_title).await;
            let elapsed_ms = elapsed_ms(start);
            match &result {
                Ok(()) => tracing::info!(new_title, elapsed_ms, "renamed"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "rename failed"),
            }
            result
        }
        .instrument(tracing::info_span!("api.history.rename", task_id = %task_id))
        .await
    }

    async fn delete(&self, task_id: &TaskId) -> Result<(), ApiError> {
        async {
            let start = Instant::now();
            let result = self.inner.delete(task_id).await;
            let elapsed_ms = elapsed_ms(start);
            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "deleted"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "delete failed"),
            }
            result
        }
        .instrument(tracing::info_span!("api.history.delete", task_id = %task_id))
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
