// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML matrix definitions.
//!
//! ```toml
//! title = "Weekly Sync"
//! [settings]
//! start_time = "2025-01-01T09:00:00Z"
//! end_time = "2025-01-01T17:00:00Z"
//! meeting_duration = 25
//! rest_time = 0
//! [[rooms]]
//! name = "Room 1"
//! capacity = 1
//! [[workers]]
//! name = "Ana"
//! unavailable_hours = [10, 11]
//! eligible = ["Room 1"]
//! ```
//!
//! Rooms are referenced by name. Unavailable hours fall on the schedule's
//! start date.

use chrono::{DateTime, Utc};
use roster_core::{parse_timestamp, ConstraintMatrixModel, ScheduleSettings, ValidationError};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixFileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid matrix file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid {field} '{value}' (expected an ISO 8601 timestamp)")]
    InvalidTime { field: &'static str, value: String },
    #[error("duplicate room name '{0}'")]
    DuplicateRoom(String),
    #[error("worker '{worker}' lists unknown room '{room}'")]
    UnknownRoom { worker: String, room: String },
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatrixFile {
    #[serde(default)]
    title: String,
    #[serde(default)]
    settings: SettingsFile,
    #[serde(default)]
    rooms: Vec<RoomFile>,
    #[serde(default)]
    workers: Vec<WorkerFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    start_time: Option<String>,
    end_time: Option<String>,
    meeting_duration: Option<u32>,
    rest_time: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RoomFile {
    name: String,
    #[serde(default = "default_capacity")]
    capacity: u32,
}

fn default_capacity() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WorkerFile {
    name: String,
    #[serde(default)]
    unavailable_hours: Vec<u32>,
    #[serde(default)]
    eligible: Vec<String>,
}

/// Read and build a matrix from a TOML file.
pub fn load(path: &Path) -> Result<ConstraintMatrixModel, MatrixFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| MatrixFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Build a matrix from TOML text.
///
/// Structural checks (duplicate names, unknown rooms, capacities, hours)
/// happen here; whole-matrix validation is left to
/// [`ConstraintMatrixModel::build_request`].
pub fn parse(text: &str) -> Result<ConstraintMatrixModel, MatrixFileError> {
    let file: MatrixFile = toml::from_str(text)?;

    let mut model = ConstraintMatrixModel::empty();
    model.set_title(file.title);
    model.set_settings(file.settings.resolve()?);

    let mut seen = HashSet::new();
    for room in &file.rooms {
        if !seen.insert(room.name.as_str()) {
            return Err(MatrixFileError::DuplicateRoom(room.name.clone()));
        }
        let id = model.add_room();
        model.rename_room(&id, room.name.as_str())?;
        model.set_room_capacity(&id, room.capacity)?;
    }

    for worker in &file.workers {
        let id = model.add_worker();
        model.rename_worker(&id, worker.name.as_str())?;
        let hours = worker
            .unavailable_hours
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        model.set_unavailable_hours(&id, &hours)?;

        for name in &worker.eligible {
            let room = model
                .room_named(name)
                .map(|r| r.id.clone())
                .ok_or_else(|| MatrixFileError::UnknownRoom {
                    worker: worker.name.clone(),
                    room: name.clone(),
                })?;
            if !model.is_eligible(&id, &room) {
                model.toggle_eligibility(&id, &room)?;
            }
        }
    }

    Ok(model)
}

impl SettingsFile {
    fn resolve(&self) -> Result<ScheduleSettings, MatrixFileError> {
        let defaults = ScheduleSettings::default();
        Ok(ScheduleSettings {
            start_time: resolve_time("start_time", &self.start_time, defaults.start_time)?,
            end_time: resolve_time("end_time", &self.end_time, defaults.end_time)?,
            meeting_duration: self.meeting_duration.unwrap_or(defaults.meeting_duration),
            rest_time: self.rest_time.unwrap_or(defaults.rest_time),
        })
    }
}

fn resolve_time(
    field: &'static str,
    value: &Option<String>,
    fallback: DateTime<Utc>,
) -> Result<DateTime<Utc>, MatrixFileError> {
    match value {
        Some(v) => parse_timestamp(v).ok_or_else(|| MatrixFileError::InvalidTime {
            field,
            value: v.clone(),
        }),
        None => Ok(fallback),
    }
}

#[cfg(test)]
#[path = "matrix_file_tests.rs"]
mod tests;
