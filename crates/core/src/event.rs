// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle events emitted while a job is submitted and tracked.

use crate::id::TaskId;
use crate::job::JobStatus;
use serde::{Deserialize, Serialize};

/// Events observed by the orchestrator and the workbench.
///
/// Serializes with `{"type": "scope:name", ...fields}` format.
/// Unknown type tags deserialize to `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    // -- job --
    #[serde(rename = "job:submitted")]
    JobSubmitted { task_id: TaskId },

    /// A poll returned a status that moved the job forward.
    #[serde(rename = "job:updated")]
    JobUpdated { task_id: TaskId, status: JobStatus },

    /// The job reached `Completed` or `Failed`. Polling has stopped.
    #[serde(rename = "job:finished")]
    JobFinished { task_id: TaskId, status: JobStatus },

    /// The service no longer knows the task. Polling has stopped.
    #[serde(rename = "job:lost")]
    JobLost { task_id: TaskId },

    // -- poll --
    #[serde(rename = "poll:cancelled")]
    PollCancelled { task_id: TaskId },

    /// A status check failed transiently and will be retried.
    #[serde(rename = "poll:retry")]
    PollRetry { task_id: TaskId, error: String },

    // -- history --
    #[serde(rename = "history:refreshed")]
    HistoryRefreshed { count: usize },

    /// Catch-all for unknown event types (extensibility)
    #[serde(other, rename = "custom")]
    Custom,
}

impl Event {
    pub fn name(&self) -> &str {
        match self {
            Event::JobSubmitted { .. } => "job:submitted",
            Event::JobUpdated { .. } => "job:updated",
            Event::JobFinished { .. } => "job:finished",
            Event::JobLost { .. } => "job:lost",
            Event::PollCancelled { .. } => "poll:cancelled",
            Event::PollRetry { .. } => "poll:retry",
            Event::HistoryRefreshed { .. } => "history:refreshed",
            Event::Custom => "custom",
        }
    }

    pub fn log_summary(&self) -> String {
        let t = self.name();
        match self {
            Event::JobSubmitted { task_id }
            | Event::JobLost { task_id }
            | Event::PollCancelled { task_id } => format!("{t} task={task_id}"),
            Event::JobUpdated { task_id, status } | Event::JobFinished { task_id, status } => {
                format!("{t} task={task_id} status={status}")
            }
            Event::PollRetry { task_id, error } => format!("{t} task={task_id} error={error}"),
            Event::HistoryRefreshed { count } => format!("{t} count={count}"),
            Event::Custom => t.to_string(),
        }
    }

    /// Task this event concerns, if any.
    pub fn task_id(&self) -> Option<&TaskId> {
        match self {
            Event::JobSubmitted { task_id }
            | Event::JobUpdated { task_id, .. }
            | Event::JobFinished { task_id, .. }
            | Event::JobLost { task_id }
            | Event::PollCancelled { task_id }
            | Event::PollRetry { task_id, .. } => Some(task_id),
            Event::HistoryRefreshed { .. } | Event::Custom => None,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
