// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Solver request snapshot and its building blocks.
//!
//! These types are the wire shape of the `generate-schedule` call: field
//! names and casing follow what the solver expects.

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

crate::define_id! {
    /// Identifier of a worker row in the constraint matrix (`w1`, `w2`, ...).
    pub struct WorkerId;
}

crate::define_id! {
    /// Identifier of a room column in the constraint matrix (`r1`, `r2`, ...).
    pub struct RoomId;
}

/// Reasons a constraint matrix cannot be turned into a solver request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at least one worker is required")]
    NoWorkers,
    #[error("at least one room is required")]
    NoRooms,
    #[error("unknown worker: {0}")]
    UnknownWorker(WorkerId),
    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),
    #[error("worker {worker} is assigned to missing room {room}")]
    DanglingAssignment { worker: WorkerId, room: RoomId },
    #[error("start time {start} must be before end time {end}")]
    EmptyTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("meeting duration must be at least one minute")]
    ZeroMeetingDuration,
    #[error("unavailability window for {worker} must start before it ends ({start} .. {end})")]
    InvalidWindow {
        worker: WorkerId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("room {0} must have a capacity of at least 1")]
    ZeroCapacity(RoomId),
    #[error("invalid unavailability hour '{0}' (expected 0-23)")]
    InvalidHour(String),
}

/// A span of time during which a worker cannot be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailabilityWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl UnavailabilityWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window covering `hour:00:00` through `hour:59:59` on `date`.
    pub fn hour_of(date: NaiveDate, hour: u32) -> Option<Self> {
        let start = date.and_hms_opt(hour, 0, 0)?.and_utc();
        let end = date.and_hms_opt(hour, 59, 59)?.and_utc();
        Some(Self { start, end })
    }

    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }
}

/// A worker row as submitted to the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    #[serde(default)]
    pub unavailability: Vec<UnavailabilityWindow>,
}

/// A room column as submitted to the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
}

/// Global time settings for the schedule.
///
/// Durations are whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSettings {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub meeting_duration: u32,
    pub rest_time: u32,
}

impl ScheduleSettings {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
            ..Self::default()
        }
    }

    pub fn with_meeting_duration(mut self, minutes: u32) -> Self {
        self.meeting_duration = minutes;
        self
    }

    pub fn with_rest_time(mut self, minutes: u32) -> Self {
        self.rest_time = minutes;
        self
    }

    /// Check `start < end` and a non-zero meeting duration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_time >= self.end_time {
            return Err(ValidationError::EmptyTimeRange {
                start: self.start_time,
                end: self.end_time,
            });
        }
        if self.meeting_duration == 0 {
            return Err(ValidationError::ZeroMeetingDuration);
        }
        Ok(())
    }
}

impl Default for ScheduleSettings {
    /// 09:00 to 17:00 on 2025-01-01 (UTC), 25 minute meetings, no rest.
    fn default() -> Self {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
        let at = |hour| {
            day.and_hms_opt(hour, 0, 0)
                .map(|t| t.and_utc())
                .unwrap_or_default()
        };
        Self {
            start_time: at(9),
            end_time: at(17),
            meeting_duration: 25,
            rest_time: 0,
        }
    }
}

/// Immutable snapshot of the constraint matrix, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosteringRequest {
    pub title: String,
    pub workers: Vec<Worker>,
    pub rooms: Vec<Room>,
    /// Eligible rooms per worker, in worker order. Every worker has an entry.
    pub assignments: IndexMap<WorkerId, Vec<RoomId>>,
    pub settings: ScheduleSettings,
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
