// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! roster-core: domain types for the rostering job-lifecycle engine

pub mod event;
pub mod history;
pub mod id;
pub mod job;
pub mod matrix;
pub mod projector;
pub mod quota;
pub mod request;
pub mod solution;
pub mod time_fmt;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use event::Event;
pub use history::{HistoryList, HistoryRecord, RenameRequest, DEFAULT_TITLE};
pub use id::{IdCounter, TaskId};
pub use job::{
    Job, JobStatus, JobStatusUpdate, StatusLabel, SubmitReceipt, Tone, Tracking, Transition,
};
pub use matrix::ConstraintMatrixModel;
pub use projector::{
    project, project_serialized, Cell, Grid, GridRow, NoData, NoDataReason, Projection,
    UNKNOWN_WORKER,
};
pub use quota::Quota;
pub use request::{
    Room, RoomId, RosteringRequest, ScheduleSettings, UnavailabilityWindow, ValidationError,
    Worker, WorkerId,
};
pub use solution::{Shift, Solution, SolverInstance, SolverRoom, SolverWorker, StoredRequest};
pub use time_fmt::{format_clock, format_slot, parse_timestamp};
