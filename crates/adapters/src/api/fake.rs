// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake boundary for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ApiError, HistoryApi, SolverApi};
use async_trait::async_trait;
use parking_lot::Mutex;
use roster_core::{
    HistoryRecord, JobStatus, JobStatusUpdate, Quota, RosteringRequest, SubmitReceipt, TaskId,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

/// Recorded boundary call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Submit { title: String },
    PollStatus { task_id: TaskId },
    FetchQuota,
    ListHistory,
    Rename { task_id: TaskId, new_title: String },
    Delete { task_id: TaskId },
}

struct FakeApiState {
    calls: Vec<ApiCall>,
    next_task: u64,
    submit_results: VecDeque<Result<SubmitReceipt, ApiError>>,
    status_scripts: HashMap<TaskId, VecDeque<Result<JobStatusUpdate, ApiError>>>,
    poll_delay: Duration,
    polls_in_flight: usize,
    max_polls_in_flight: usize,
    quota: Result<Quota, ApiError>,
    history: Vec<HistoryRecord>,
    list_error: Option<ApiError>,
    rename_error: Option<ApiError>,
    delete_error: Option<ApiError>,
}

/// Fake solver/history boundary for testing.
///
/// Submissions hand out `task-1`, `task-2`, ... unless a result was queued.
/// Status checks replay the script queued for the task; the last scripted
/// response repeats once the script runs out. Unscripted tasks are not found.
#[derive(Clone)]
pub struct FakeApi {
    inner: Arc<Mutex<FakeApiState>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeApiState {
                calls: Vec::new(),
                next_task: 1,
                submit_results: VecDeque::new(),
                status_scripts: HashMap::new(),
                poll_delay: Duration::ZERO,
                polls_in_flight: 0,
                max_polls_in_flight: 0,
                quota: Ok(Quota {
                    quota_remaining: 5,
                    last_reset_date: None,
                }),
                history: Vec::new(),
                list_error: None,
                rename_error: None,
                delete_error: None,
            })),
        }
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ApiCall> {
        self.inner.lock().calls.clone()
    }

    /// Number of status checks issued for `task_id`
    pub fn poll_count(&self, task_id: &str) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|c| matches!(c, ApiCall::PollStatus { task_id: t } if t == task_id))
            .count()
    }

    /// Number of calls that reached the history store's mutating endpoints
    pub fn mutation_count(&self) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|c| matches!(c, ApiCall::Rename { .. } | ApiCall::Delete { .. }))
            .count()
    }

    /// Queue the outcome of the next submission
    pub fn push_submit_result(&self, result: Result<SubmitReceipt, ApiError>) {
        self.inner.lock().submit_results.push_back(result);
    }

    /// Queue status-check responses for a task
    pub fn script_status(
        &self,
        task_id: &str,
        responses: impl IntoIterator<Item = Result<JobStatusUpdate, ApiError>>,
    ) {
        self.inner
            .lock()
            .status_scripts
            .entry(TaskId::new(task_id))
            .or_default()
            .extend(responses);
    }

    /// Shorthand for scripting plain status transitions
    pub fn script_statuses(&self, task_id: &str, statuses: &[JobStatus]) {
        self.script_status(
            task_id,
            statuses.iter().map(|s| Ok(JobStatusUpdate::new(*s))),
        );
    }

    /// Make every status check take `delay` before answering
    pub fn set_poll_delay(&self, delay: Duration) {
        self.inner.lock().poll_delay = delay;
    }

    /// Highest number of status checks that were in flight at once
    pub fn max_polls_in_flight(&self) -> usize {
        self.inner.lock().max_polls_in_flight
    }

    pub fn set_quota(&self, quota: Result<Quota, ApiError>) {
        self.inner.lock().quota = quota;
    }

    /// Replace the remote history
    pub fn set_history(&self, records: Vec<HistoryRecord>) {
        self.inner.lock().history = records;
    }

    /// Current remote history
    pub fn history(&self) -> Vec<HistoryRecord> {
        self.inner.lock().history.clone()
    }

    pub fn set_list_error(&self, error: Option<ApiError>) {
        self.inner.lock().list_error = error;
    }

    pub fn set_rename_error(&self, error: Option<ApiError>) {
        self.inner.lock().rename_error = error;
    }

    pub fn set_delete_error(&self, error: Option<ApiError>) {
        self.inner.lock().delete_error = error;
    }

    fn next_status(&self, task_id: &TaskId) -> Result<JobStatusUpdate, ApiError> {
        let mut inner = self.inner.lock();
        let Some(script) = inner.status_scripts.get_mut(task_id) else {
            return Err(ApiError::NotFound);
        };
        match script.len() {
            0 => Err(ApiError::NotFound),
            1 => script.front().cloned().unwrap_or(Err(ApiError::NotFound)),
            _ => script.pop_front().unwrap_or(Err(ApiError::NotFound)),
        }
    }
}

#[async_trait]
impl SolverApi for FakeApi {
    async fn submit(&self, request: &RosteringRequest) -> Result<SubmitReceipt, ApiError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ApiCall::Submit {
            title: request.title.clone(),
        });
        if let Some(result) = inner.submit_results.pop_front() {
            return result;
        }
        let task_id = TaskId::new(format!("task-{}", inner.next_task));
        inner.next_task += 1;
        Ok(SubmitReceipt {
            task_id,
            status: JobStatus::Submitted,
        })
    }

    async fn poll_status(&self, task_id: &TaskId) -> Result<JobStatusUpdate, ApiError> {
        let delay = {
            let mut inner = self.inner.lock();
            inner.calls.push(ApiCall::PollStatus {
                task_id: task_id.clone(),
            });
            inner.polls_in_flight += 1;
            inner.max_polls_in_flight = inner.max_polls_in_flight.max(inner.polls_in_flight);
            inner.poll_delay
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let result = self.next_status(task_id);
        self.inner.lock().polls_in_flight -= 1;
        result
    }

    async fn fetch_quota(&self) -> Result<Quota, ApiError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ApiCall::FetchQuota);
        inner.quota.clone()
    }
}

#[async_trait]
impl HistoryApi for FakeApi {
    async fn list_history(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ApiCall::ListHistory);
        match &inner.list_error {
            Some(e) => Err(e.clone()),
            None => Ok(inner.history.clone()),
        }
    }

    async fn rename(&self, task_id: &TaskId, new_title: &str) -> Result<(), ApiError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ApiCall::Rename {
            task_id: task_id.clone(),
            new_title: new_title.to_string(),
        });
        if let Some(e) = &inner.rename_error {
            return Err(e.clone());
        }
        let record = inner
            .history
            .iter_mut()
            .find(|r| &r.task_id == task_id)
            .ok_or(ApiError::NotFound)?;
        record.title = Some(new_title.to_string());
        Ok(())
    }

    async fn delete(&self, task_id: &TaskId) -> Result<(), ApiError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ApiCall::Delete {
            task_id: task_id.clone(),
        });
        if let Some(e) = &inner.delete_error {
            return Err(e.clone());
        }
        let before = inner.history.len();
        inner.history.retain(|r| &r.task_id != task_id);
        if inner.history.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
