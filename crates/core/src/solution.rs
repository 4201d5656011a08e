// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Solver-side data: the expanded instance stored with a history record and
//! the solver's assignment of workers to shifts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A time-boxed slot in one room, produced by the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub uid: String,
    /// Room name (not id).
    pub room: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverWorker {
    pub uid: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverRoom {
    pub name: String,
}

/// The instance the solver actually worked on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverInstance {
    #[serde(default)]
    pub shifts: Vec<Shift>,
    #[serde(default)]
    pub workers: Vec<SolverWorker>,
    #[serde(default)]
    pub rooms: Vec<SolverRoom>,
}

/// Shape of a history record's `request_json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRequest {
    pub worker_rostering_instance: SolverInstance,
}

/// Solver output. Only meaningful once the job completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Shift uid → ordered worker uids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers_at_shifts: Option<HashMap<String, Vec<String>>>,
    /// Solver-reported status, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Solution {
    pub fn from_assignments(workers_at_shifts: HashMap<String, Vec<String>>) -> Self {
        Self {
            workers_at_shifts: Some(workers_at_shifts),
            status: None,
        }
    }
}
