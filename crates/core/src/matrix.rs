// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Editable constraint matrix: workers × rooms with availability and settings.
//!
//! The model owns referential integrity. Removing a worker drops its
//! eligibility row and unavailability; removing a room drops it from every
//! worker's eligible set. Worker and room ids come from monotonic counters
//! and are never handed out twice, even after removals.

use crate::id::IdCounter;
use crate::request::{
    Room, RoomId, RosteringRequest, ScheduleSettings, UnavailabilityWindow, ValidationError,
    Worker, WorkerId,
};
use indexmap::{IndexMap, IndexSet};

/// In-progress rostering problem, edited until [`build_request`] snapshots it.
///
/// [`build_request`]: ConstraintMatrixModel::build_request
#[derive(Debug, Clone)]
pub struct ConstraintMatrixModel {
    title: String,
    workers: Vec<Worker>,
    rooms: Vec<Room>,
    eligibility: IndexMap<WorkerId, IndexSet<RoomId>>,
    settings: ScheduleSettings,
    worker_ids: IdCounter,
    room_ids: IdCounter,
}

impl Default for ConstraintMatrixModel {
    /// One worker, one room, default settings.
    fn default() -> Self {
        let mut model = Self::empty();
        model.add_worker();
        model.add_room();
        model
    }
}

impl ConstraintMatrixModel {
    /// A model with no workers or rooms.
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            workers: Vec::new(),
            rooms: Vec::new(),
            eligibility: IndexMap::new(),
            settings: ScheduleSettings::default(),
            worker_ids: IdCounter::new("w"),
            room_ids: IdCounter::new("r"),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn settings(&self) -> &ScheduleSettings {
        &self.settings
    }

    /// Replace the global settings. Consistency is checked at build time.
    pub fn set_settings(&mut self, settings: ScheduleSettings) {
        self.settings = settings;
    }

    pub fn worker(&self, id: &WorkerId) -> Option<&Worker> {
        self.workers.iter().find(|w| &w.id == id)
    }

    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    /// Look up a room by its display name.
    pub fn room_named(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Append a worker named `Worker <n>` and return its fresh id.
    pub fn add_worker(&mut self) -> WorkerId {
        let (n, id): (u64, WorkerId) = self.worker_ids.take();
        self.workers.push(Worker {
            id: id.clone(),
            name: format!("Worker {n}"),
            unavailability: Vec::new(),
        });
        self.eligibility.insert(id.clone(), IndexSet::new());
        id
    }

    /// Append a room named `Room <n>` with capacity 1 and return its fresh id.
    pub fn add_room(&mut self) -> RoomId {
        let (n, id): (u64, RoomId) = self.room_ids.take();
        self.rooms.push(Room {
            id: id.clone(),
            name: format!("Room {n}"),
            capacity: 1,
        });
        id
    }

    /// Remove a worker together with its eligibility row and unavailability.
    pub fn remove_worker(&mut self, id: &WorkerId) -> Result<Worker, ValidationError> {
        let pos = self
            .workers
            .iter()
            .position(|w| &w.id == id)
            .ok_or_else(|| ValidationError::UnknownWorker(id.clone()))?;
        self.eligibility.shift_remove(id);
        Ok(self.workers.remove(pos))
    }

    /// Remove a room and scrub it from every worker's eligible set.
    pub fn remove_room(&mut self, id: &RoomId) -> Result<Room, ValidationError> {
        let pos = self
            .rooms
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| ValidationError::UnknownRoom(id.clone()))?;
        for rooms in self.eligibility.values_mut() {
            rooms.shift_remove(id);
        }
        Ok(self.rooms.remove(pos))
    }

    pub fn rename_worker(
        &mut self,
        id: &WorkerId,
        name: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.worker_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn rename_room(
        &mut self,
        id: &RoomId,
        name: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.room_mut(id)?.name = name.into();
        Ok(())
    }

    pub fn set_room_capacity(
        &mut self,
        id: &RoomId,
        capacity: u32,
    ) -> Result<(), ValidationError> {
        if capacity == 0 {
            return Err(ValidationError::ZeroCapacity(id.clone()));
        }
        self.room_mut(id)?.capacity = capacity;
        Ok(())
    }

    /// Replace a worker's full unavailability list.
    pub fn set_unavailability(
        &mut self,
        id: &WorkerId,
        windows: Vec<UnavailabilityWindow>,
    ) -> Result<(), ValidationError> {
        if let Some(bad) = windows.iter().find(|w| !w.is_valid()) {
            return Err(ValidationError::InvalidWindow {
                worker: id.clone(),
                start: bad.start,
                end: bad.end,
            });
        }
        self.worker_mut(id)?.unavailability = windows;
        Ok(())
    }

    /// Replace a worker's unavailability from a comma-separated hour list
    /// such as `"10, 11, 14"`.
    ///
    /// Each hour becomes a window covering that whole hour on the schedule's
    /// start date. An empty list clears the worker's unavailability.
    pub fn set_unavailable_hours(
        &mut self,
        id: &WorkerId,
        hours: &str,
    ) -> Result<(), ValidationError> {
        let day = self.settings.start_time.date_naive();
        let windows = hours
            .split(',')
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(|h| {
                h.parse::<u32>()
                    .ok()
                    .and_then(|hour| UnavailabilityWindow::hour_of(day, hour))
                    .ok_or_else(|| ValidationError::InvalidHour(h.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.set_unavailability(id, windows)
    }

    /// Flip whether `worker` may be placed in `room`. Returns the new membership.
    pub fn toggle_eligibility(
        &mut self,
        worker: &WorkerId,
        room: &RoomId,
    ) -> Result<bool, ValidationError> {
        if self.room(room).is_none() {
            return Err(ValidationError::UnknownRoom(room.clone()));
        }
        let rooms = self
            .eligibility
            .get_mut(worker)
            .ok_or_else(|| ValidationError::UnknownWorker(worker.clone()))?;
        if rooms.shift_remove(room) {
            Ok(false)
        } else {
            rooms.insert(room.clone());
            Ok(true)
        }
    }

    pub fn is_eligible(&self, worker: &WorkerId, room: &RoomId) -> bool {
        self.eligibility
            .get(worker)
            .is_some_and(|rooms| rooms.contains(room))
    }

    /// Rooms a worker may be placed in, in the order they were ticked.
    pub fn eligible_rooms(&self, worker: &WorkerId) -> impl Iterator<Item = &RoomId> {
        self.eligibility.get(worker).into_iter().flatten()
    }

    /// Snapshot the model into a solver request.
    ///
    /// Fails when either axis is empty, settings are inconsistent, a window
    /// or capacity is invalid, or an eligibility entry points at something
    /// that no longer exists.
    pub fn build_request(&self) -> Result<RosteringRequest, ValidationError> {
        if self.workers.is_empty() {
            return Err(ValidationError::NoWorkers);
        }
        if self.rooms.is_empty() {
            return Err(ValidationError::NoRooms);
        }
        self.settings.validate()?;

        for worker in &self.workers {
            if let Some(bad) = worker.unavailability.iter().find(|w| !w.is_valid()) {
                return Err(ValidationError::InvalidWindow {
                    worker: worker.id.clone(),
                    start: bad.start,
                    end: bad.end,
                });
            }
        }
        if let Some(room) = self.rooms.iter().find(|r| r.capacity == 0) {
            return Err(ValidationError::ZeroCapacity(room.id.clone()));
        }

        for (worker, rooms) in &self.eligibility {
            if self.worker(worker).is_none() {
                return Err(ValidationError::UnknownWorker(worker.clone()));
            }
            if let Some(room) = rooms.iter().find(|r| self.room(r).is_none()) {
                return Err(ValidationError::DanglingAssignment {
                    worker: worker.clone(),
                    room: room.clone(),
                });
            }
        }

        let assignments: IndexMap<WorkerId, Vec<RoomId>> = self
            .workers
            .iter()
            .map(|w| (w.id.clone(), self.eligible_rooms(&w.id).cloned().collect()))
            .collect();

        Ok(RosteringRequest {
            title: self.title.clone(),
            workers: self.workers.clone(),
            rooms: self.rooms.clone(),
            assignments,
            settings: self.settings,
        })
    }

    fn worker_mut(&mut self, id: &WorkerId) -> Result<&mut Worker, ValidationError> {
        self.workers
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or_else(|| ValidationError::UnknownWorker(id.clone()))
    }

    fn room_mut(&mut self, id: &RoomId) -> Result<&mut Room, ValidationError> {
        self.rooms
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| ValidationError::UnknownRoom(id.clone()))
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
