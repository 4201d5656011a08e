// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted summaries of past rostering requests.

use crate::id::TaskId;
use crate::job::JobStatus;
use crate::projector::{project_serialized, Projection};
use crate::time_fmt::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Title shown for records saved without one.
pub const DEFAULT_TITLE: &str = "Matrix Schedule";

/// One entry of the remote history store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Store-assigned row id. Numeric ids are kept as their decimal text.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub task_id: TaskId,
    #[serde(default)]
    pub title: Option<String>,
    pub status: JobStatus,
    pub date_created: String,
    /// Serialized `{"worker_rostering_instance": ...}`.
    #[serde(default)]
    pub request_json: Option<String>,
    /// Serialized `{"workers_at_shifts": ...}`.
    #[serde(default)]
    pub solution: Option<String>,
}

impl HistoryRecord {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => DEFAULT_TITLE,
        }
    }

    /// Only completed records with a stored solution can be projected.
    pub fn is_viewable(&self) -> bool {
        self.status == JobStatus::Completed && self.solution.is_some()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date_created)
    }

    pub fn projection(&self) -> Projection {
        project_serialized(self.request_json.as_deref(), self.solution.as_deref())
    }
}

/// Body of the list-history response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryList {
    #[serde(default)]
    pub schedules: Vec<HistoryRecord>,
}

/// Body of the rename call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRequest {
    pub new_title: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
