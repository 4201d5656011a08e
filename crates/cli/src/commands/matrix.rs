// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `roster matrix` - Offline matrix checks

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use roster_core::{format_clock, RosteringRequest, ScheduleSettings, DEFAULT_TITLE};

use crate::color;
use crate::matrix_file;
use crate::output::{print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct MatrixArgs {
    #[command(subcommand)]
    pub command: MatrixCommand,
}

#[derive(Subcommand)]
pub enum MatrixCommand {
    /// Validate a matrix file and show the request it builds
    Check {
        /// Path to a TOML matrix definition
        file: PathBuf,
    },
}

pub fn handle(command: MatrixCommand, format: OutputFormat) -> Result<()> {
    match command {
        MatrixCommand::Check { file } => {
            let model = matrix_file::load(&file)?;
            let request = model
                .build_request()
                .with_context(|| format!("{} is not a valid matrix", file.display()))?;
            match format {
                OutputFormat::Text => format_request(&mut std::io::stdout(), &request),
                OutputFormat::Json => print_json(&request)?,
            }
        }
    }
    Ok(())
}

pub(crate) fn format_request(out: &mut impl Write, request: &RosteringRequest) {
    let title = if request.title.trim().is_empty() {
        DEFAULT_TITLE
    } else {
        request.title.as_str()
    };
    let _ = writeln!(out, "{}", color::header(title));
    let _ = writeln!(out, "{}", settings_line(&request.settings));
    let _ = writeln!(out);

    let mut rooms = Table::new(vec![Column::left("ROOM"), Column::right("CAPACITY")]);
    for room in &request.rooms {
        rooms.row(vec![room.name.clone(), room.capacity.to_string()]);
    }
    rooms.render(out);
    let _ = writeln!(out);

    let mut workers = Table::new(vec![
        Column::left("WORKER"),
        Column::left("UNAVAILABLE"),
        Column::left("ROOMS"),
    ]);
    for worker in &request.workers {
        let unavailable = worker
            .unavailability
            .iter()
            .map(|w| format_clock(&w.start))
            .collect::<Vec<_>>();
        let eligible = request
            .assignments
            .get(&worker.id)
            .into_iter()
            .flatten()
            .filter_map(|id| request.rooms.iter().find(|r| &r.id == id))
            .map(|r| r.name.clone())
            .collect::<Vec<_>>();
        workers.row(vec![worker.name.clone(), or_dash(unavailable), or_dash(eligible)]);
    }
    workers.render(out);
}

fn settings_line(settings: &ScheduleSettings) -> String {
    let start = settings.start_time;
    let end = settings.end_time;
    let window = if start.date_naive() == end.date_naive() {
        format!(
            "{} {} - {}",
            start.format("%Y-%m-%d"),
            format_clock(&start),
            format_clock(&end)
        )
    } else {
        format!(
            "{} - {}",
            start.format("%Y-%m-%d %H:%M"),
            end.format("%Y-%m-%d %H:%M")
        )
    };
    format!(
        "{window}, {} min meetings, {} min rest",
        settings.meeting_duration, settings.rest_time
    )
}

fn or_dash(items: Vec<String>) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
