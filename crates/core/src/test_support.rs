// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{
    ConstraintMatrixModel, HistoryRecord, JobStatus, RoomId, ScheduleSettings, TaskId, WorkerId,
};
use chrono::{NaiveDate, TimeZone, Utc};

// ── Model fixtures ──────────────────────────────────────────────────────────

/// Two workers, one room, `w1` eligible for `r1`, 09:00–10:00 with
/// 25 minute meetings.
pub fn small_model() -> ConstraintMatrixModel {
    let mut model = ConstraintMatrixModel::empty();
    model.set_title("Standup");
    let w1 = model.add_worker();
    model.add_worker();
    let r1 = model.add_room();
    let _ = model.toggle_eligibility(&w1, &r1);
    model.set_settings(
        ScheduleSettings::new(utc(2025, 1, 1, 9), utc(2025, 1, 1, 10)).with_meeting_duration(25),
    );
    model
}

pub fn worker_id(id: &str) -> WorkerId {
    WorkerId::new(id)
}

pub fn room_id(id: &str) -> RoomId {
    RoomId::new(id)
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32) -> chrono::DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .map(|t| Utc.from_utc_datetime(&t))
        .unwrap_or_default()
}

// ── History fixtures ────────────────────────────────────────────────────────

/// Stored request with one room and two consecutive shifts.
pub const SAMPLE_REQUEST_JSON: &str = r#"{"worker_rostering_instance":{"shifts":[{"uid":"s1","room":"Room 1","start_time":"2025-01-01T09:00:00","end_time":"2025-01-01T09:25:00"},{"uid":"s2","room":"Room 1","start_time":"2025-01-01T09:25:00","end_time":"2025-01-01T09:50:00"}],"workers":[{"uid":"w1","name":"Worker 1"},{"uid":"w2","name":"Worker 2"}],"rooms":[{"name":"Room 1"}]}}"#;

/// Solution for [`SAMPLE_REQUEST_JSON`]: `w1` in the first shift only.
pub const SAMPLE_SOLUTION_JSON: &str = r#"{"workers_at_shifts":{"s1":["w1"],"s2":[]}}"#;

pub fn history_record(task_id: &str, title: Option<&str>, status: JobStatus) -> HistoryRecord {
    HistoryRecord {
        id: task_id.trim_start_matches("task-").to_string(),
        task_id: TaskId::new(task_id),
        title: title.map(str::to_string),
        status,
        date_created: "2025-01-01T08:00:00".to_string(),
        request_json: None,
        solution: None,
    }
}

/// A completed record carrying the sample request and solution.
pub fn completed_record(task_id: &str, title: Option<&str>) -> HistoryRecord {
    HistoryRecord {
        request_json: Some(SAMPLE_REQUEST_JSON.to_string()),
        solution: Some(SAMPLE_SOLUTION_JSON.to_string()),
        ..history_record(task_id, title, JobStatus::Completed)
    }
}
