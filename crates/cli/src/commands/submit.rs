// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `roster submit` - Submit a matrix and wait for its schedule

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use roster_adapters::{HistoryApi, SolverApi};
use roster_core::{Job, Projection, StatusLabel};
use roster_engine::Workbench;

use crate::commands::status::format_job;
use crate::exit_error::{self, ExitError};
use crate::matrix_file;
use crate::output::{format_projection, print_json, OutputFormat};

#[derive(Args)]
pub struct SubmitArgs {
    /// Path to a TOML matrix definition
    pub file: PathBuf,

    /// Print the task ID and return without waiting for the solver
    #[arg(long)]
    pub no_wait: bool,
}

pub async fn handle<A: SolverApi + HistoryApi>(
    args: SubmitArgs,
    api: A,
    poll_interval: Duration,
    format: OutputFormat,
) -> Result<()> {
    let model = matrix_file::load(&args.file)?;
    let mut workbench = Workbench::new(api, poll_interval).with_model(model);

    let job = workbench.submit().await?;
    if args.no_wait {
        match format {
            OutputFormat::Text => format_job(&mut std::io::stdout(), &job),
            OutputFormat::Json => print_json(&job)?,
        }
        return Ok(());
    }

    if format == OutputFormat::Text {
        eprintln!("Submitted {}, waiting for the solver...", job.task_id);
    }

    let job = tokio::select! {
        job = workbench.wait_for_job() => job,
        Ok(()) = tokio::signal::ctrl_c() => {
            return Err(ExitError::new(exit_error::INTERRUPTED, "interrupted").into());
        }
    };
    let Some(job) = job else {
        anyhow::bail!("job tracking stopped unexpectedly");
    };

    let projection = workbench.history().selected().map(|r| r.projection());
    match format {
        OutputFormat::Text => {
            let mut out = std::io::stdout();
            format_job(&mut out, &job);
            if let Some(projection) = &projection {
                println!();
                format_projection(&mut out, projection);
            } else if job.label() == StatusLabel::Completed {
                println!("Schedule not in history yet; try `roster history show {}`", job.task_id);
            }
        }
        OutputFormat::Json => print_json(&SubmitView {
            job: &job,
            projection: projection.as_ref(),
        })?,
    }

    exit_for(&job)
}

#[derive(serde::Serialize)]
struct SubmitView<'a> {
    job: &'a Job,
    projection: Option<&'a Projection>,
}

/// Completed jobs succeed; failed and lost jobs carry their own exit code.
fn exit_for(job: &Job) -> Result<()> {
    match job.label() {
        StatusLabel::Failed => Err(ExitError::new(
            exit_error::JOB_FAILED,
            format!("task {} failed", job.task_id),
        )
        .into()),
        StatusLabel::Unknown => Err(ExitError::new(
            exit_error::JOB_LOST,
            format!("lost track of task {}", job.task_id),
        )
        .into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
