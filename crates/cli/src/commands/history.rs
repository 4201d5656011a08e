// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `roster history` - Past schedules

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use roster_adapters::HistoryApi;
use roster_core::{HistoryRecord, StatusLabel, TaskId};
use roster_engine::HistoryStore;
use serde::Serialize;

use crate::color;
use crate::output::{format_projection, print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommand,
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List past schedules
    List,
    /// Show a past schedule and its solution grid
    Show {
        /// Task ID of the schedule
        task_id: String,
    },
    /// Rename a past schedule
    Rename {
        /// Task ID of the schedule
        task_id: String,
        /// New title
        title: String,
    },
    /// Delete a past schedule
    Delete {
        /// Task ID of the schedule
        task_id: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Serialize)]
struct RecordView<'a> {
    #[serde(flatten)]
    record: &'a HistoryRecord,
    display_title: &'a str,
    viewable: bool,
}

impl<'a> RecordView<'a> {
    fn new(record: &'a HistoryRecord) -> Self {
        Self {
            record,
            display_title: record.display_title(),
            viewable: record.is_viewable(),
        }
    }
}

pub async fn handle<A: HistoryApi>(
    command: HistoryCommand,
    api: A,
    format: OutputFormat,
) -> Result<()> {
    let mut store = HistoryStore::new(api);
    store.list().await?;

    match command {
        HistoryCommand::List => match format {
            OutputFormat::Text => format_history_list(&mut std::io::stdout(), store.records()),
            OutputFormat::Json => {
                let views: Vec<RecordView<'_>> =
                    store.records().iter().map(RecordView::new).collect();
                print_json(&views)?;
            }
        },

        HistoryCommand::Show { task_id } => {
            let task_id = TaskId::new(task_id);
            if !store.select_by_task_id(&task_id) {
                bail!("no history record for task {task_id}");
            }
            let Some(record) = store.selected() else {
                bail!("no history record for task {task_id}");
            };
            match format {
                OutputFormat::Text => format_record(&mut std::io::stdout(), record),
                OutputFormat::Json => {
                    let obj = serde_json::json!({
                        "record": RecordView::new(record),
                        "projection": record.projection(),
                    });
                    print_json(&obj)?;
                }
            }
        }

        HistoryCommand::Rename { task_id, title } => {
            let title = title.trim();
            if title.is_empty() {
                bail!("title must not be empty");
            }
            let task_id = TaskId::new(task_id);
            store.rename(&task_id, title).await?;
            match format {
                OutputFormat::Text => println!("Renamed {task_id} to \"{title}\""),
                OutputFormat::Json => {
                    if let Some(record) = store.get(&task_id) {
                        print_json(&RecordView::new(record))?;
                    }
                }
            }
        }

        HistoryCommand::Delete { task_id, yes } => {
            let task_id = TaskId::new(task_id);
            let Some(record) = store.get(&task_id) else {
                bail!("no history record for task {task_id}");
            };
            if !yes {
                let prompt = format!("Delete \"{}\" ({task_id})?", record.display_title());
                let stdin = std::io::stdin();
                if !confirm(&mut stdin.lock(), &mut std::io::stderr(), &prompt)? {
                    println!("Cancelled");
                    return Ok(());
                }
            }
            let removed = store.delete(&task_id).await?;
            match format {
                OutputFormat::Text => println!("Deleted {task_id}"),
                OutputFormat::Json => print_json(&RecordView::new(&removed))?,
            }
        }
    }
    Ok(())
}

/// Ask a yes/no question. Anything but `y`/`yes` (or end of input) declines.
pub(crate) fn confirm(
    input: &mut impl BufRead,
    prompt_out: &mut impl Write,
    prompt: &str,
) -> std::io::Result<bool> {
    write!(prompt_out, "{prompt} [y/N] ")?;
    prompt_out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

pub(crate) fn format_history_list(out: &mut impl Write, records: &[HistoryRecord]) {
    if records.is_empty() {
        let _ = writeln!(out, "No schedules");
        return;
    }

    let mut table = Table::new(vec![
        Column::muted("TASK"),
        Column::left("TITLE").with_max(40),
        Column::left("CREATED"),
        Column::status("STATUS"),
    ]);
    for record in records {
        table.row(vec![
            record.task_id.to_string(),
            record.display_title().to_string(),
            created_label(record),
            StatusLabel::from(record.status).text().to_string(),
        ]);
    }
    table.render(out);
}

pub(crate) fn format_record(out: &mut impl Write, record: &HistoryRecord) {
    let _ = writeln!(out, "{}", color::header(record.display_title()));
    let _ = writeln!(out, "Task:    {}", record.task_id);
    let _ = writeln!(
        out,
        "Status:  {}",
        color::status(StatusLabel::from(record.status).text())
    );
    let _ = writeln!(out, "Created: {}", created_label(record));
    let _ = writeln!(out);
    format_projection(out, &record.projection());
}

fn created_label(record: &HistoryRecord) -> String {
    record
        .created_at()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| record.date_created.clone())
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
