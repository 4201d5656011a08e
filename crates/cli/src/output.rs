// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use roster_core::{Cell, Grid, NoData, NoDataReason, Projection};
use serde::Serialize;

use crate::table::{Column, Table};

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Shown for a room shift nobody was placed in.
pub const EMPTY_CELL: &str = "-";
/// Shown where a room has no shift in the row.
pub const NO_SHIFT_CELL: &str = "";

/// Render a projected solution as a time × room table.
pub fn format_projection(out: &mut impl Write, projection: &Projection) {
    match projection {
        Projection::Grid(grid) => format_grid(out, grid),
        Projection::NoData(no_data) => {
            let _ = writeln!(out, "{}", no_data_message(no_data));
        }
    }
}

fn format_grid(out: &mut impl Write, grid: &Grid) {
    let mut cols = vec![Column::left("TIME")];
    cols.extend(grid.rooms.iter().map(|room| Column::left(room.clone())));
    let mut table = Table::new(cols);
    for row in &grid.rows {
        let mut cells = vec![row.label.clone()];
        cells.extend(row.cells.iter().map(cell_text));
        table.row(cells);
    }
    table.render(out);
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Assigned(workers) => workers.join(", "),
        Cell::Empty => EMPTY_CELL.to_string(),
        Cell::NoShift => NO_SHIFT_CELL.to_string(),
    }
}

pub fn no_data_message(no_data: &NoData) -> String {
    let reason = match no_data.reason {
        NoDataReason::MissingSolution => "no solution stored",
        NoDataReason::MissingAssignments => "the solution has no assignments",
        NoDataReason::MalformedRequest => "the stored request is unreadable",
        NoDataReason::MalformedSolution => "the stored solution is unreadable",
        NoDataReason::NoRooms => "the request has no rooms",
        NoDataReason::NoShifts => "the solution has no shifts",
    };
    format!("No schedule to show: {reason} (status: {})", no_data.status)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
