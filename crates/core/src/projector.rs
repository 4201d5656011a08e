// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Projects a flat solver assignment back onto a time × room grid.
//!
//! Shifts are grouped by room name and sorted by start time within each
//! room. Rows follow the first room's shift order and the other rooms are
//! read **by position**: row `i` shows each room's `i`-th shift. Rooms are
//! not checked for sharing the same slot sequence; when they do not, cells
//! in a row may belong to different times.

use crate::job::StatusLabel;
use crate::solution::{Shift, Solution, SolverInstance, StoredRequest};
use crate::time_fmt::{format_slot, parse_timestamp};
use serde::Serialize;
use std::collections::HashMap;

/// Name shown for a worker uid missing from the instance.
pub const UNKNOWN_WORKER: &str = "Unknown";

/// Why no grid could be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoDataReason {
    /// No solution stored for the record.
    MissingSolution,
    /// A solution exists but has no `workers_at_shifts` mapping.
    MissingAssignments,
    /// The stored request could not be read.
    MalformedRequest,
    /// The solution payload could not be read.
    MalformedSolution,
    /// The instance lists no rooms.
    NoRooms,
    /// The first room has no shifts, so there is no row axis.
    NoShifts,
}

/// Explicit "nothing to show" result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoData {
    pub reason: NoDataReason,
    /// Status reported inside the solution, or "Unknown".
    pub status: String,
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "workers", rename_all = "snake_case")]
pub enum Cell {
    /// Worker display names, in solver order.
    Assigned(Vec<String>),
    /// The room has a shift in this row but nobody was placed in it.
    Empty,
    /// The room has fewer shifts than the first room.
    NoShift,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub start_time: String,
    pub end_time: String,
    /// `HH:MM - HH:MM`
    pub label: String,
    /// One cell per room, in [`Grid::rooms`] order.
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub rooms: Vec<String>,
    pub rows: Vec<GridRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Projection {
    Grid(Grid),
    NoData(NoData),
}

impl Projection {
    fn no_data(reason: NoDataReason, solution: Option<&Solution>) -> Self {
        let status = solution
            .and_then(|s| s.status.clone())
            .unwrap_or_else(|| StatusLabel::Unknown.text().to_string());
        Projection::NoData(NoData { reason, status })
    }

    pub fn grid(&self) -> Option<&Grid> {
        match self {
            Projection::Grid(grid) => Some(grid),
            Projection::NoData(_) => None,
        }
    }
}

/// Project serialized history payloads (`request_json`, `solution`).
///
/// Never fails: unreadable input becomes [`Projection::NoData`].
pub fn project_serialized(request_json: Option<&str>, solution: Option<&str>) -> Projection {
    let solution = match solution.map(serde_json::from_str::<Solution>) {
        None => return Projection::no_data(NoDataReason::MissingSolution, None),
        Some(Err(_)) => return Projection::no_data(NoDataReason::MalformedSolution, None),
        Some(Ok(solution)) => solution,
    };
    if solution.workers_at_shifts.is_none() {
        return Projection::no_data(NoDataReason::MissingAssignments, Some(&solution));
    }
    let request = request_json.and_then(|raw| serde_json::from_str::<StoredRequest>(raw).ok());
    match request {
        Some(request) => project(&request.worker_rostering_instance, Some(&solution)),
        None => Projection::no_data(NoDataReason::MalformedRequest, Some(&solution)),
    }
}

/// Project a solver instance and its solution onto a time × room grid.
pub fn project(instance: &SolverInstance, solution: Option<&Solution>) -> Projection {
    let Some(solution) = solution else {
        return Projection::no_data(NoDataReason::MissingSolution, None);
    };
    let Some(assigned) = solution.workers_at_shifts.as_ref() else {
        return Projection::no_data(NoDataReason::MissingAssignments, Some(solution));
    };
    if instance.rooms.is_empty() {
        return Projection::no_data(NoDataReason::NoRooms, Some(solution));
    }

    let names: HashMap<&str, &str> = instance
        .workers
        .iter()
        .map(|w| (w.uid.as_str(), w.name.as_str()))
        .collect();
    let by_room: Vec<Vec<&Shift>> = instance
        .rooms
        .iter()
        .map(|room| shifts_in_room(&instance.shifts, &room.name))
        .collect();

    let axis = match by_room.first() {
        Some(shifts) if !shifts.is_empty() => shifts,
        _ => return Projection::no_data(NoDataReason::NoShifts, Some(solution)),
    };
    let display_name = |uid: &String| {
        names
            .get(uid.as_str())
            .copied()
            .unwrap_or(UNKNOWN_WORKER)
            .to_string()
    };

    let rows = axis
        .iter()
        .enumerate()
        .map(|(idx, slot)| GridRow {
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
            label: format_slot(&slot.start_time, &slot.end_time),
            cells: by_room
                .iter()
                .map(|shifts| match shifts.get(idx) {
                    None => Cell::NoShift,
                    Some(shift) => match assigned.get(&shift.uid) {
                        Some(uids) if !uids.is_empty() => {
                            Cell::Assigned(uids.iter().map(&display_name).collect())
                        }
                        _ => Cell::Empty,
                    },
                })
                .collect(),
        })
        .collect();

    Projection::Grid(Grid {
        rooms: instance.rooms.iter().map(|r| r.name.clone()).collect(),
        rows,
    })
}

/// Shifts for one room, ascending by start time.
fn shifts_in_room<'a>(shifts: &'a [Shift], room: &str) -> Vec<&'a Shift> {
    let mut in_room: Vec<&Shift> = shifts.iter().filter(|s| s.room == room).collect();
    in_room.sort_by_key(|s| (parse_timestamp(&s.start_time), s.start_time.clone()));
    in_room
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;
