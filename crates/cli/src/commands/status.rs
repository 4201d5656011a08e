// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `roster status` - One-off status check

use std::io::Write;

use anyhow::Result;
use roster_adapters::SolverApi;
use roster_core::{Job, StatusLabel, TaskId};
use roster_engine::{JobClient, PollError};

use crate::color;
use crate::exit_error::{self, ExitError};
use crate::output::{print_json, OutputFormat};

pub async fn handle<A: SolverApi>(api: A, task_id: String, format: OutputFormat) -> Result<()> {
    let task_id = TaskId::new(task_id);
    let mut job = Job::submitted(task_id.clone());
    match JobClient::new(api).poll_status(&task_id).await {
        Ok(update) => {
            job.apply(update);
        }
        Err(PollError::NotFound(_)) => {
            job.mark_lost();
        }
        Err(e) => return Err(e.into()),
    }

    match format {
        OutputFormat::Text => format_job(&mut std::io::stdout(), &job),
        OutputFormat::Json => print_json(&job)?,
    }
    if job.label() == StatusLabel::Unknown {
        return Err(ExitError::new(exit_error::JOB_LOST, "").into());
    }
    Ok(())
}

/// `task-1  Running` followed by any extra fields the solver reported.
pub(crate) fn format_job(out: &mut impl Write, job: &Job) {
    let _ = writeln!(
        out,
        "{}  {}",
        color::muted(job.task_id.as_str()),
        color::status(job.label().text())
    );
    for (key, value) in &job.payload {
        let value = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let _ = writeln!(out, "  {key}: {value}");
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
