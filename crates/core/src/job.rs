// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Solver job state machine.
//!
//! `Submitted → Running → {Completed | Failed}`. Terminal states are sticky:
//! once a job completes or fails, later updates are ignored.

use crate::id::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Job status as reported by the solver.
///
/// Serializes as exactly `Submitted`, `Running`, `Completed`, `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    Submitted,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    /// Wire string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Submitted => "Submitted",
            JobStatus::Running => "Running",
            JobStatus::Completed => "Completed",
            JobStatus::Failed => "Failed",
        }
    }

    fn rank(self) -> u8 {
        match self {
            JobStatus::Submitted => 0,
            JobStatus::Running => 1,
            JobStatus::Completed | JobStatus::Failed => 2,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the presentation layer shows for a job or history record.
///
/// Kept apart from [`JobStatus`] so display wording never drives control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLabel {
    Submitted,
    Running,
    Completed,
    Failed,
    /// Tracking was lost (the solver no longer knows the task).
    Unknown,
}

/// Visual tone of a status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Pending,
    Active,
    Success,
    Failure,
    Neutral,
}

impl StatusLabel {
    pub fn text(self) -> &'static str {
        match self {
            StatusLabel::Submitted => "Submitted",
            StatusLabel::Running => "Running",
            StatusLabel::Completed => "Completed",
            StatusLabel::Failed => "Failed",
            StatusLabel::Unknown => "Unknown",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            StatusLabel::Submitted => Tone::Pending,
            StatusLabel::Running => Tone::Active,
            StatusLabel::Completed => Tone::Success,
            StatusLabel::Failed => Tone::Failure,
            StatusLabel::Unknown => Tone::Neutral,
        }
    }
}

impl From<JobStatus> for StatusLabel {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Submitted => StatusLabel::Submitted,
            JobStatus::Running => StatusLabel::Running,
            JobStatus::Completed => StatusLabel::Completed,
            JobStatus::Failed => StatusLabel::Failed,
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

fn submitted() -> JobStatus {
    JobStatus::Submitted
}

/// Solver acknowledgement of a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    #[serde(alias = "taskId")]
    pub task_id: TaskId,
    #[serde(default = "submitted")]
    pub status: JobStatus,
}

/// One status-check response. Fields other than `status` are kept verbatim
/// and merged into the job's payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStatusUpdate {
    pub status: JobStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobStatusUpdate {
    pub fn new(status: JobStatus) -> Self {
        Self {
            status,
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Whether the job is still being watched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tracking {
    /// Status checks are being scheduled.
    Polling,
    /// Reached a terminal status.
    Settled,
    /// The solver reported the task as unknown; status is no longer known.
    Lost,
    /// The caller stopped tracking before a terminal status.
    Cancelled,
}

/// Result of applying a status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: JobStatus, to: JobStatus },
    /// Payload merged, status unchanged.
    Unchanged,
    /// The job was already terminal; nothing changed.
    Ignored,
}

/// A tracked solver job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub task_id: TaskId,
    pub status: JobStatus,
    pub tracking: Tracking,
    /// Latest fields reported by the solver besides the status.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub payload: Map<String, Value>,
    /// Status checks applied so far.
    #[serde(default)]
    pub polls: u32,
}

impl Job {
    pub fn new(task_id: TaskId, status: JobStatus) -> Self {
        let tracking = if status.is_terminal() {
            Tracking::Settled
        } else {
            Tracking::Polling
        };
        Self {
            task_id,
            status,
            tracking,
            payload: Map::new(),
            polls: 0,
        }
    }

    pub fn submitted(task_id: TaskId) -> Self {
        Self::new(task_id, JobStatus::Submitted)
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// True while the orchestrator should keep scheduling status checks.
    pub fn needs_poll(&self) -> bool {
        self.tracking == Tracking::Polling && !self.is_terminal()
    }

    /// Merge a status-check response into the job.
    ///
    /// Status only moves forward: a stale `Submitted` after `Running` keeps
    /// `Running`. The task id is never overwritten by payload fields.
    pub fn apply(&mut self, update: JobStatusUpdate) -> Transition {
        if self.is_terminal() {
            return Transition::Ignored;
        }
        self.polls += 1;
        for (key, value) in update.extra {
            if key == "task_id" || key == "taskId" {
                continue;
            }
            self.payload.insert(key, value);
        }

        let from = self.status;
        if update.status.rank() < from.rank() || update.status == from {
            return Transition::Unchanged;
        }
        self.status = update.status;
        if self.status.is_terminal() {
            self.tracking = Tracking::Settled;
        }
        Transition::Advanced {
            from,
            to: update.status,
        }
    }

    /// The solver no longer knows this task.
    pub fn mark_lost(&mut self) {
        if !self.is_terminal() {
            self.tracking = Tracking::Lost;
        }
    }

    pub fn mark_cancelled(&mut self) {
        if self.tracking == Tracking::Polling {
            self.tracking = Tracking::Cancelled;
        }
    }

    pub fn label(&self) -> StatusLabel {
        match self.tracking {
            Tracking::Lost => StatusLabel::Unknown,
            _ => self.status.into(),
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
